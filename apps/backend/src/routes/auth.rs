use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::auth::claims::IdentityClaims;
use crate::auth::jwt::issue_credential;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::services::require_email;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Issue a credential for the posted identity claims and set it as the `token` cookie.
async fn issue(
    body: ValidatedJson<IdentityClaims>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut claims = body.into_inner();
    claims.email = require_email(&claims.email)?;

    let token = issue_credential(&claims, SystemTime::now(), &app_state.security)?;
    info!(email = %Redacted(&claims.email), "Credential issued");

    Ok(HttpResponse::Ok()
        .cookie(app_state.env.credential_cookie(token))
        .json(SuccessResponse { success: true }))
}

async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .cookie(app_state.env.cleared_cookie())
        .json(SuccessResponse { success: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue))
        .route("/logout", web::get().to(logout));
}
