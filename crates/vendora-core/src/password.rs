//! Password hashing with bcrypt.
//!
//! Each call to [`hash_password`] draws a fresh salt, which bcrypt embeds in
//! the digest, so verification needs nothing but the stored hash.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor used for every stored password.
pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch; errors only when `hash` is not a bcrypt digest.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}
