use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::{role_cache_ttl, DbKind, PaymentsConfig, RuntimeEnv};
use backend::infra::state::build_state;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::services::payments::StripeProcessor;
use backend::state::security_config::SecurityConfig;
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let security_config = match SecurityConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid security configuration");
            std::process::exit(1);
        }
    };

    let env = RuntimeEnv::from_env();
    let mut builder = build_state()
        .with_env(env)
        .with_db(DbKind::Postgres)
        .with_security(security_config)
        .with_role_cache_ttl(role_cache_ttl());

    match PaymentsConfig::from_env().and_then(StripeProcessor::new) {
        Ok(processor) => builder = builder.with_payments(Arc::new(processor)),
        Err(e) => warn!(error = %e, "Payment processor not configured; intents will fail"),
    }

    let app_state = match builder.build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, env = ?env, "HR Hub backend starting");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
