//! Argon2id password hashing, verification, and length validation.
//!
//! Hashes use the Argon2id variant with a random salt from [`OsRng`], stored
//! in PHC string format so algorithm parameters and salt travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate that a password length falls within `[min, max]` characters.
///
/// The upper bound keeps pathological inputs away from the hash function.
pub fn validate_password_length(password: &str, min: usize, max: usize) -> Result<(), String> {
    let len = password.chars().count();
    if len < min {
        return Err(format!("Password must be at least {min} characters long"));
    }
    if len > max {
        return Err(format!("Password must be at most {max} characters long"));
    }
    Ok(())
}
