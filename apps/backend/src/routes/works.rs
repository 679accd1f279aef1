use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::InsertResult;
use crate::error::AppError;
use crate::extractors::{Identity, ValidatedJson};
use crate::middleware::CookieAuth;
use crate::repos::works::Work;
use crate::services::works as works_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A work entry as the client sees it: fixed fields plus whatever else was
/// submitted with it, flattened back in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkResponse {
    pub id: i64,
    pub employee: Employee,
    pub category: String,
    pub created_at: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<Work> for WorkResponse {
    fn from(w: Work) -> Self {
        let details = match w.details {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: w.id,
            employee: Employee {
                email: w.employee_email,
                name: w.employee_name,
            },
            category: w.category,
            created_at: w.created_at,
            details,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkRequest {
    pub employee: Option<Employee>,
    #[serde(default)]
    pub category: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct WorksQuery {
    pub category: Option<String>,
}

async fn list_works(
    _identity: Identity,
    query: web::Query<WorksQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let works = works_service::list_works(app_state.db(), query.category.as_deref()).await?;
    let body: Vec<WorkResponse> = works.into_iter().map(WorkResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Without an `employee` object in the body the entry is filed under the caller.
async fn create_work(
    identity: Identity,
    body: ValidatedJson<CreateWorkRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateWorkRequest {
        employee,
        category,
        details,
    } = body.into_inner();
    let (email, name) = match employee {
        Some(e) => (e.email, e.name),
        None => (identity.email().to_string(), None),
    };

    let work = works_service::create_work(
        app_state.db(),
        &email,
        name,
        &category,
        Value::Object(details),
    )
    .await?;
    Ok(HttpResponse::Ok().json(InsertResult::new(work.id)))
}

async fn list_my_works(
    _identity: Identity,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let works = works_service::list_works_for(app_state.db(), &path.into_inner()).await?;
    let body: Vec<WorkResponse> = works.into_iter().map(WorkResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/works")
            .wrap(CookieAuth)
            .route(web::get().to(list_works)),
    )
    .service(
        web::resource("/work")
            .wrap(CookieAuth)
            .route(web::post().to(create_work)),
    )
    .service(
        web::resource("/my-works/{email}")
            .wrap(CookieAuth)
            .route(web::get().to(list_my_works)),
    );
}
