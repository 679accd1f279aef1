use std::env;

use crate::error::AppError;

const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Credentials for the payment processor
#[derive(Clone)]
pub struct PaymentsConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl PaymentsConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// `STRIPE_SECRET_KEY` is required; `STRIPE_API_BASE` optionally overrides the endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::config("Required environment variable 'STRIPE_SECRET_KEY' is not set")
            })?;

        let cfg = Self::new(secret_key);
        Ok(match env::var("STRIPE_API_BASE") {
            Ok(base) if !base.trim().is_empty() => cfg.with_api_base(base.trim()),
            _ => cfg,
        })
    }
}

impl std::fmt::Debug for PaymentsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentsConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}
