use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::IdentityClaims;
use crate::auth::errors::AuthError;
use crate::error::AppError;

/// The verified identity `CookieAuth` stored for this request.
///
/// Fails with 401 when the resource is not behind `CookieAuth` or the
/// credential was missing.
#[derive(Debug, Clone)]
pub struct Identity(pub IdentityClaims);

impl Identity {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<IdentityClaims>().cloned();
        ready(
            claims
                .map(Identity)
                .ok_or_else(|| AppError::from(AuthError::Unauthenticated)),
        )
    }
}
