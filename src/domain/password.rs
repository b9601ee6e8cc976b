//! Password value object.
//!
//! Plain text only ever passes through [`Password::new`]; what is stored is an
//! Argon2 PHC string and what is returned to clients is
//! [`PASSWORD_MASK`](crate::config::PASSWORD_MASK).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh random salt.
    ///
    /// # Errors
    /// Returns a validation error if the password is blank.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.trim().is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash read back from the database.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plain text candidate against this hash. A malformed stored hash
    /// never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("p1").unwrap();

        assert!(password.verify("p1"));
        assert!(!password.verify("p2"));
        assert!(password.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_hash_never_contains_plain_text() {
        let password = Password::new("secret-value").unwrap();
        assert!(!password.as_str().contains("secret-value"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::new("SamePassword").unwrap();
        let pass2 = Password::new("SamePassword").unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify("SamePassword"));
        assert!(pass2.verify("SamePassword"));
    }

    #[test]
    fn test_blank_password_rejected() {
        assert!(matches!(Password::new(""), Err(AppError::Validation(_))));
        assert!(matches!(Password::new("  "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_from_hash_round_trips_storage() {
        let password = Password::new("p1").unwrap();
        let restored = Password::from_hash(password.clone().into_string());
        assert!(restored.verify("p1"));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!Password::from_hash("not-a-hash".to_string()).verify("anything"));
    }
}
