use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use entity::account::{is_usable_password, UNUSABLE_PASSWORD_PREFIX};
use rand_core::{OsRng, RngCore};

use crate::types::error::AppError;

/// Produces the credential to store for `raw`. `None` yields a sentinel that
/// `verify` will never accept.
pub fn make_password(raw: Option<&str>) -> Result<String, AppError> {
    match raw {
        Some(raw) => hash(raw).map_err(|e| AppError::Internal(format!("hashing password failed: {e}"))),
        None => Ok(unusable_password()),
    }
}

pub fn hash(raw: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(raw.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(raw: &str, stored: &str) -> bool {
    if !is_usable_password(stored) {
        return false;
    }
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default().verify_password(raw.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

pub fn unusable_password() -> String {
    let mut buf = [0u8; 30];
    OsRng.fill_bytes(&mut buf);
    format!("{UNUSABLE_PASSWORD_PREFIX}{}", URL_SAFE_NO_PAD.encode(buf))
}
