use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WriteResult;
use crate::entities::users::Role;
use crate::error::AppError;
use crate::extractors::{AdminOnly, HostOnly, ValidatedJson};
use crate::middleware::CookieAuth;
use crate::repos::users::User;
use crate::services::users::{self as users_service, LoginOutcome, LoginProfile};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<f64>,
    pub timestamp: i64,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            photo: u.photo,
            role: u.role,
            is_verified: u.is_verified,
            designation: u.designation,
            bank_account_no: u.bank_account_no,
            salary: u.salary,
            timestamp: u.timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<Role>,
    // Raw value: only a literal JSON `true` counts. The web client has shipped
    // both spellings.
    #[serde(default, alias = "isVerfied")]
    pub is_verified: Option<Value>,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<f64>,
}

impl From<SaveUserRequest> for LoginProfile {
    fn from(r: SaveUserRequest) -> Self {
        Self {
            email: r.email,
            name: r.name,
            photo: r.photo,
            role: r.role,
            verified_flag: matches!(r.is_verified, Some(Value::Bool(true))),
            designation: r.designation,
            bank_account_no: r.bank_account_no,
            salary: r.salary,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: Role,
}

/// Save-on-login: create on first sight, otherwise return the stored record
/// (or raise the verification flag when asked to).
async fn save_user(
    body: ValidatedJson<SaveUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = users_service::login_upsert(app_state.db(), body.into_inner().into()).await?;

    Ok(match outcome {
        LoginOutcome::Existing(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        LoginOutcome::Verified { matched, modified } => {
            HttpResponse::Ok().json(WriteResult::updated(matched, modified))
        }
        LoginOutcome::Created(user) => HttpResponse::Ok().json(WriteResult::upserted(user.id)),
    })
}

/// `null` when no identity exists for the email.
async fn get_user(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = users_service::get_user(app_state.db(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user.map(UserResponse::from)))
}

async fn list_users(
    _admin: AdminOnly,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let users = users_service::list_users(app_state.db()).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn list_employees(
    _host: HostOnly,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let users = users_service::list_employees(app_state.db()).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn change_role(
    _admin: AdminOnly,
    path: web::Path<String>,
    body: ValidatedJson<ChangeRoleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let matched = users_service::change_role(app_state.db(), &path.into_inner(), body.role).await?;
    Ok(HttpResponse::Ok().json(WriteResult::updated(matched, matched)))
}

async fn verify_user(
    _host: HostOnly,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let matched = users_service::verify_user(app_state.db(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(WriteResult::updated(matched, matched)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::put().to(save_user))
        .route("/user/{email}", web::get().to(get_user))
        .service(
            web::resource("/users")
                .wrap(CookieAuth)
                .route(web::get().to(list_users)),
        )
        .service(
            web::resource("/users-employee")
                .wrap(CookieAuth)
                .route(web::get().to(list_employees)),
        )
        .service(
            web::resource("/users/role/{email}")
                .wrap(CookieAuth)
                .route(web::patch().to(change_role)),
        )
        .service(
            web::resource("/users/verify/{email}")
                .wrap(CookieAuth)
                .route(web::patch().to(verify_user)),
        );
}
