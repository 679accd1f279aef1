//! Failures of the token service and the role guard.

use thiserror::Error;

use crate::errors::domain::DomainError;

/// Why a presented credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFault {
    Expired,
    InvalidSignature,
    Malformed,
}

impl CredentialFault {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialFault::Expired => "token_expired",
            CredentialFault::InvalidSignature => "invalid_signature",
            CredentialFault::Malformed => "invalid_token",
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential (or no verified identity) on the request.
    #[error("unauthenticated")]
    Unauthenticated,
    /// Credential present but its signature, structure or expiry is bad.
    #[error("invalid credential: {}", .0.as_str())]
    InvalidCredential(CredentialFault),
    /// Identity verified but not allowed: unknown identity or wrong role.
    #[error("forbidden (identity_found={identity_found})")]
    Forbidden { identity_found: bool },
    /// Caller tried to supply a registered claim the server owns.
    #[error("reserved claim '{0}'")]
    ReservedClaim(String),
    #[error("signing failed: {0}")]
    Signing(String),
    /// The identity store could not answer.
    #[error("identity lookup failed: {0}")]
    Upstream(#[from] DomainError),
}
