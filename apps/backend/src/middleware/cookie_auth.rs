//! Credential check for token-gated resources.
//!
//! Reads the `token` cookie, verifies it and stores the embedded
//! [`IdentityClaims`] in request extensions. Requests without a valid
//! credential are answered here with 401; the handler (and any role lookup)
//! never runs.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_credential;
use crate::config::cookie::CREDENTIAL_COOKIE;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct CookieAuth;

impl<S, B> Transform<S, ServiceRequest> for CookieAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthMiddleware { service }))
    }
}

pub struct CookieAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CookieAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(app_state) = req.app_data::<web::Data<AppState>>().cloned() else {
            let res = req.error_response(AppError::internal("AppState not available"));
            return Box::pin(async move { Ok(res.map_into_right_body()) });
        };

        let token = req.cookie(CREDENTIAL_COOKIE).map(|c| c.value().to_string());

        match verify_credential(token.as_deref(), &app_state.security) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(e) => {
                security::access_denied(&e, req.path(), None);
                // Rendered here so the problem document carries this request's trace id.
                let res = req.error_response(AppError::from(e));
                Box::pin(async move { Ok(res.map_into_right_body()) })
            }
        }
    }
}
