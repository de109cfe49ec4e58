//! Delete-password hashing for Anonboard.
//!
//! Threads and replies each carry an independent delete password. The
//! password is hashed with Argon2id at creation and only the hash is
//! stored; deletion and redaction verify against it.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// Password hash is invalid.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

/// Create the Argon2 hasher with fixed parameters.
///
/// Parameters:
/// - Memory cost: 19 MB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
///
/// Delete passwords are hashed on every thread/reply creation, so the
/// cost is kept at the crate-default recommendation rather than an
/// interactive-login grade setting.
fn create_argon2() -> Argon2<'static> {
    // Memory cost in KiB (19 MB = 19456 KiB)
    let m_cost = 19456;
    // Time cost (iterations)
    let t_cost = 2;
    // Parallelism (threads)
    let p_cost = 1;

    let params = Params::new(m_cost, t_cost, p_cost, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a delete password using Argon2id.
///
/// Returns a PHC-formatted hash string that includes the salt and parameters.
///
/// # Examples
///
/// ```
/// use anonboard::hash_delete_password;
///
/// let hash = hash_delete_password("pw1").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_delete_password(password: &str) -> Result<String, PasswordError> {
    // Generate a random salt
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = create_argon2();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a delete password against a stored hash.
///
/// Returns `Ok(())` if the password matches, or an error if it doesn't.
///
/// # Examples
///
/// ```
/// use anonboard::{hash_delete_password, verify_delete_password};
///
/// let hash = hash_delete_password("pw1").unwrap();
/// assert!(verify_delete_password("pw1", &hash).is_ok());
/// assert!(verify_delete_password("bad", &hash).is_err());
/// ```
pub fn verify_delete_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    // Parse the stored hash
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    // Verify the password
    // Note: The parameters are taken from the parsed hash, not from create_argon2()
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::VerificationFailed)
}
