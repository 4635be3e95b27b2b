/**
 * Password Hashing
 *
 * bcrypt with a work factor of 10. Hashing and comparison are CPU-bound, so
 * both run on Tokio's blocking pool and only suspend the calling request.
 * bcrypt generates a fresh salt per hash and compares in constant time.
 */

use thiserror::Error;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;
    Ok(hashed)
}

/// Compare a plaintext password against a stored hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
