//! Account passwords. Only the Argon2id PHC string (`$argon2id$v=19$...`) is stored in
//! `users.password_hash`; the plaintext never leaves the register and login handlers.
//!
//! Argon2 hashing is CPU-bound, so the handlers go through the `_blocking` variants
//! which hop onto Tokio's blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

/// Salt and hash a new account password.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check a login attempt against a stored hash. A wrong password is `Ok(false)`; a
/// stored value that is not a PHC string is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, Error> {
    let stored = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

pub(crate) async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;
    Ok(hash)
}

pub(crate) async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, AppError> {
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;
    Ok(valid)
}
