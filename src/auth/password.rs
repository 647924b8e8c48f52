// Password hashing and validation service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::auth::error::AuthError;

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a random salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashError)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Validate password strength requirements (minimum 6 characters)
    pub fn validate_password_strength(password: &str) -> Result<(), AuthError> {
        if password.chars().count() < 6 {
            return Err(AuthError::InvalidPasswordFormat(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();
        assert!(PasswordService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!PasswordService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = PasswordService::hash_password("same password").unwrap();
        let hash2 = PasswordService::hash_password("same password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_password_strength() {
        assert!(PasswordService::validate_password_strength("abc").is_err());
        assert!(PasswordService::validate_password_strength("abcdef").is_ok());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(PasswordService::verify_password("anything", "not-a-phc-string").is_err());
    }
}
