//! Identity claims carried inside the credential.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registered claims the token service sets itself.
pub const RESERVED_CLAIMS: &[&str] = &["exp", "iat", "nbf"];

/// The identity a credential vouches for.
///
/// `email` is the only claim the server relies on; anything else the client
/// sent at issuance (name, photo, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityClaims {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// First reserved claim name present in `extra`, if any.
    pub fn reserved_claim(&self) -> Option<&str> {
        RESERVED_CLAIMS
            .iter()
            .copied()
            .find(|name| self.extra.contains_key(*name))
    }
}

/// Wire form of the token payload: identity plus registered claims.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TokenClaims {
    #[serde(flatten)]
    pub identity: IdentityClaims,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
