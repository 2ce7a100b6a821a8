//! Password hashing with bcrypt.
//!
//! bcrypt only looks at the first 72 bytes of its input, so longer passwords
//! are refused outright instead of being silently truncated.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::error::BackendError;

/// Longest password bcrypt can distinguish
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(plaintext: &str) -> Result<String, BackendError> {
    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Err(BackendError::bad_request(format!(
            "Password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored hash
///
/// Comparison is constant-time inside bcrypt.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BackendError> {
    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }
    Ok(verify(plaintext, password_hash)?)
}
