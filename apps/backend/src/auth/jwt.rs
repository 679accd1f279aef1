use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{IdentityClaims, TokenClaims};
use crate::auth::errors::{AuthError, CredentialFault};
use crate::state::security_config::SecurityConfig;

/// Lifetime of an issued credential.
pub const CREDENTIAL_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Sign the given identity claims into a credential valid for [`CREDENTIAL_TTL`].
///
/// The caller is responsible for transporting the token (cookie).
pub fn issue_credential(
    identity: &IdentityClaims,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    if let Some(name) = identity.reserved_claim() {
        return Err(AuthError::ReservedClaim(name.to_string()));
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::Signing("Failed to get current time".to_string()))?
        .as_secs() as i64;
    let exp = iat + CREDENTIAL_TTL.as_secs() as i64;

    let claims = TokenClaims {
        identity: identity.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AuthError::Signing(format!("Failed to encode JWT: {e}")))
}

/// Verify a credential and return the identity claims it embeds, unchanged.
///
/// Errors:
/// - absent or empty token → `Unauthenticated`
/// - expired → `InvalidCredential(Expired)`
/// - signature mismatch → `InvalidCredential(InvalidSignature)`
/// - anything else that fails to decode → `InvalidCredential(Malformed)`
pub fn verify_credential(
    token: Option<&str>,
    security: &SecurityConfig,
) -> Result<IdentityClaims, AuthError> {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AuthError::Unauthenticated),
    };

    // Default Validation checks exp and requires it; pin the algorithm.
    // No clock leeway: a credential is dead the second `exp` passes.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims.identity)
    .map_err(|e| {
        let fault = match e.kind() {
            ErrorKind::ExpiredSignature => CredentialFault::Expired,
            ErrorKind::InvalidSignature => CredentialFault::InvalidSignature,
            _ => CredentialFault::Malformed,
        };
        AuthError::InvalidCredential(fault)
    })
}
