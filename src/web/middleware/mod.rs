//! Middleware for the web API.

mod cors;

pub use cors::create_cors_layer;
