use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{HostOnly, ValidatedJson};
use crate::middleware::CookieAuth;
use crate::services::payments::create_payment_intent;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

async fn create_intent(
    _host: HostOnly,
    body: ValidatedJson<PaymentIntentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let client_secret = create_payment_intent(app_state.payments.as_ref(), body.price).await?;
    Ok(HttpResponse::Ok().json(PaymentIntentResponse { client_secret }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/create-payment-intent")
            .wrap(CookieAuth)
            .route(web::post().to(create_intent)),
    );
}
