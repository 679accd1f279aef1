use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Signing material for issued credentials
#[derive(Clone)]
pub struct SecurityConfig {
    /// Server-held secret for HMAC signing and verification
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the secret from `ACCESS_TOKEN_SECRET`; an unset or empty value is a config error.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("ACCESS_TOKEN_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(Self::new(secret.into_bytes())),
            _ => Err(AppError::config(
                "Required environment variable 'ACCESS_TOKEN_SECRET' is not set",
            )),
        }
    }
}

// Never print the secret.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
