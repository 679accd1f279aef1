use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::InsertResult;
use crate::error::AppError;
use crate::extractors::{HostOnly, Identity, ValidatedJson};
use crate::middleware::CookieAuth;
use crate::repos::salaries::Salary;
use crate::services::salaries::{self as salaries_service, SalaryPayment};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResponse {
    pub id: i64,
    pub email: String,
    pub month: String,
    pub year: i32,
    pub salary: f64,
    pub transaction_id: Option<String>,
    pub paid_at: i64,
}

impl From<Salary> for SalaryResponse {
    fn from(s: Salary) -> Self {
        Self {
            id: s.id,
            email: s.employee_email,
            month: s.month,
            year: s.year,
            salary: s.amount,
            transaction_id: s.transaction_id,
            paid_at: s.paid_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySalaryRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub month: String,
    pub year: i32,
    #[serde(alias = "amount")]
    pub salary: f64,
    pub transaction_id: Option<String>,
}

async fn pay_salary(
    _host: HostOnly,
    body: ValidatedJson<PaySalaryRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let salary = salaries_service::record_salary(
        app_state.db(),
        SalaryPayment {
            employee_email: req.email,
            month: req.month,
            year: req.year,
            amount: req.salary,
            transaction_id: req.transaction_id,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(InsertResult::new(salary.id)))
}

async fn list_salaries(
    _identity: Identity,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = salaries_service::list_salaries_for(app_state.db(), &path.into_inner()).await?;
    let body: Vec<SalaryResponse> = rows.into_iter().map(SalaryResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/salary")
            .wrap(CookieAuth)
            .route(web::post().to(pay_salary)),
    )
    .service(
        web::resource("/salaries/{email}")
            .wrap(CookieAuth)
            .route(web::get().to(list_salaries)),
    );
}
