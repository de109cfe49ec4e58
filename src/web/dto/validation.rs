//! Validation utilities for web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// This extractor deserializes the request body as JSON and then
/// validates it using the `validator` crate. Both malformed bodies and
/// failed validations answer with the generic plain-text error the API
/// serves for caller mistakes.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, extract the JSON body
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("rejected request body: {}", e);
            ApiError::bad_request()
        })?;

        // Then, validate the deserialized value
        value.validate().map_err(|e| {
            tracing::debug!("rejected request fields: {}", e);
            ApiError::bad_request()
        })?;

        Ok(ValidatedJson(value))
    }
}
