//! Security events, logged with a fixed `event` field so they can be alerted on.

use tracing::warn;

use crate::auth::errors::AuthError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A request was turned away by the credential check or a role gate.
pub fn access_denied(err: &AuthError, path: &str, email: Option<&str>) {
    let trace_id = trace_ctx::trace_id();
    let event = match err {
        AuthError::Forbidden { .. } => "SECURITY_ROLE_DENIED",
        _ => "SECURITY_CREDENTIAL_REJECTED",
    };

    warn!(
        event,
        %trace_id,
        path,
        email = %Redacted(email.unwrap_or("")),
        reason = %err,
        "Access denied"
    );
}
