//! Payment-intent brokering against the payment processor (Stripe REST, no SDK).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::payments::PaymentsConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Currency every intent is created in.
pub const CURRENCY: &str = "usd";

/// Convert a price in major units into processor minor units (cents).
pub fn to_minor_units(price: f64) -> Result<i64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::invalid(
            ErrorCode::InvalidPrice,
            "Price must be a positive number",
        ));
    }
    let cents = (price * 100.0).round();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(AppError::invalid(
            ErrorCode::InvalidPrice,
            "Price is out of range",
        ));
    }
    Ok(cents as i64)
}

/// Whatever can mint a payment intent and hand back its client secret.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> Result<String, AppError>;
}

/// Production processor talking to `POST {api_base}/v1/payment_intents`.
pub struct StripeProcessor {
    client: reqwest::Client,
    config: PaymentsConfig,
}

#[derive(Debug, Deserialize)]
struct IntentResponse {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl StripeProcessor {
    pub fn new(config: PaymentsConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> Result<String, AppError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);
        let amount = amount_minor.to_string();

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&[
                ("amount", amount.as_str()),
                ("currency", currency),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Payment processor unreachable");
                AppError::upstream(
                    ErrorCode::PaymentProviderUnavailable,
                    "Payment processor is unavailable",
                )
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.json::<StripeErrorBody>().await.ok();
            let (kind, message) = body
                .map(|b| (b.error.kind, b.error.message))
                .unwrap_or((None, None));
            warn!(
                status = status.as_u16(),
                kind = kind.as_deref().unwrap_or("unknown"),
                message = message.as_deref().unwrap_or(""),
                "Payment processor rejected intent"
            );
            return Err(AppError::upstream(
                ErrorCode::PaymentProviderError,
                "Payment processor rejected the request",
            ));
        }

        let intent = resp.json::<IntentResponse>().await.map_err(|e| {
            warn!(error = %e, "Unreadable payment processor response");
            AppError::upstream(
                ErrorCode::PaymentProviderError,
                "Unexpected payment processor response",
            )
        })?;

        debug!(amount_minor, currency, "Payment intent created");
        intent.client_secret.ok_or_else(|| {
            AppError::upstream(
                ErrorCode::PaymentProviderError,
                "Payment processor returned no client secret",
            )
        })
    }
}

/// Stand-in used when no processor credentials are configured.
pub struct DisabledProcessor;

#[async_trait]
impl PaymentProcessor for DisabledProcessor {
    async fn create_intent(&self, _amount_minor: i64, _currency: &str) -> Result<String, AppError> {
        warn!("Payment intent requested but no payment processor is configured");
        Err(AppError::upstream(
            ErrorCode::PaymentProviderUnavailable,
            "Payments are not configured",
        ))
    }
}

/// Validate the price and ask the processor for an intent.
pub async fn create_payment_intent(
    processor: &dyn PaymentProcessor,
    price: f64,
) -> Result<String, AppError> {
    let amount = to_minor_units(price)?;
    processor.create_intent(amount, CURRENCY).await
}
