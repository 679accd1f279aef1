use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::guard::RoleGuard;
use crate::config::cookie::RuntimeEnv;
use crate::services::payments::PaymentProcessor;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Signing material for credentials
    pub security: SecurityConfig,
    /// Decides the credential cookie attributes
    pub env: RuntimeEnv,
    pub admin_guard: RoleGuard,
    pub host_guard: RoleGuard,
    pub payments: Arc<dyn PaymentProcessor>,
}

impl AppState {
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("env", &self.env)
            .field("admin_guard", &self.admin_guard)
            .field("host_guard", &self.host_guard)
            .finish_non_exhaustive()
    }
}
