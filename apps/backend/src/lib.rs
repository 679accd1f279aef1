#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::IdentityClaims;
pub use auth::guard::{RoleGuard, RoleLookup};
pub use auth::jwt::{issue_credential, verify_credential, CREDENTIAL_TTL};
pub use config::db::{db_url, DbKind};
pub use config::RuntimeEnv;
pub use entities::users::Role;
pub use error::AppError;
pub use extractors::{AdminOnly, HostOnly, Identity};
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::{
    cors_middleware, CookieAuth, RequestTrace, StructuredLogger, TraceSpan,
};
pub use services::payments::PaymentProcessor;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
