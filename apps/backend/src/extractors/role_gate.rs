//! Role-gated extractors: `AdminOnly` and `HostOnly`.
//!
//! The role is looked up through the guard held in `AppState` every time one
//! of these is extracted; the credential alone never grants a role.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::IdentityClaims;
use crate::auth::guard::{Authorized, RoleGuard};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Selects which guard of `AppState` an extractor consults.
pub trait RequiredRole: 'static {
    fn guard(state: &AppState) -> &RoleGuard;
}

#[derive(Debug)]
pub struct Admin;
#[derive(Debug)]
pub struct Host;

impl RequiredRole for Admin {
    fn guard(state: &AppState) -> &RoleGuard {
        &state.admin_guard
    }
}

impl RequiredRole for Host {
    fn guard(state: &AppState) -> &RoleGuard {
        &state.host_guard
    }
}

/// Caller passed the `R` role gate.
#[derive(Debug)]
pub struct RoleGated<R> {
    pub authorized: Authorized,
    _role: PhantomData<R>,
}

impl<R> RoleGated<R> {
    pub fn email(&self) -> &str {
        &self.authorized.email
    }
}

pub type AdminOnly = RoleGated<Admin>;
pub type HostOnly = RoleGated<Host>;

impl<R: RequiredRole> FromRequest for RoleGated<R> {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<IdentityClaims>().cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();
        let path = req.path().to_string();

        Box::pin(async move {
            let app_state = app_state
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let guard = R::guard(&app_state);

            match guard.require(claims.as_ref()).await {
                Ok(authorized) => Ok(RoleGated {
                    authorized,
                    _role: PhantomData,
                }),
                Err(e) => {
                    security::access_denied(&e, &path, claims.as_ref().map(|c| c.email.as_str()));
                    Err(AppError::from(e))
                }
            }
        })
    }
}
