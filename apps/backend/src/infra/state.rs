use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::auth::guard::{CachedRoleLookup, DbRoleLookup, RoleGuard, RoleLookup};
use crate::config::cookie::RuntimeEnv;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::payments::{DisabledProcessor, PaymentProcessor};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    db: Option<DatabaseConnection>,
    role_lookup: Option<Arc<dyn RoleLookup>>,
    role_cache_ttl: Option<Duration>,
    payments: Option<Arc<dyn PaymentProcessor>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            env: RuntimeEnv::Dev,
            db_kind: None,
            db: None,
            role_lookup: None,
            role_cache_ttl: None,
            payments: None,
        }
    }

    /// Connect and migrate a database of this kind during `build`.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Use an already-open (and migrated) connection.
    pub fn with_connection(mut self, db: DatabaseConnection) -> Self {
        self.db = Some(db);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    /// Replace the store-backed role lookup (tests count lookups through this).
    pub fn with_role_lookup(mut self, lookup: Arc<dyn RoleLookup>) -> Self {
        self.role_lookup = Some(lookup);
        self
    }

    /// `None` or a zero duration keeps the cache off.
    pub fn with_role_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.role_cache_ttl = ttl.filter(|t| !t.is_zero());
        self
    }

    pub fn with_payments(mut self, payments: Arc<dyn PaymentProcessor>) -> Self {
        self.payments = Some(payments);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match (self.db, self.db_kind) {
            (Some(conn), _) => conn,
            // single entrypoint: build + migrate
            (None, Some(kind)) => bootstrap_db(kind).await?,
            (None, None) => {
                return Err(AppError::config(
                    "StateBuilder needs a database (with_db or with_connection)",
                ))
            }
        };

        let mut lookup: Arc<dyn RoleLookup> = match self.role_lookup {
            Some(lookup) => lookup,
            None => Arc::new(DbRoleLookup::new(db.clone())),
        };
        if let Some(ttl) = self.role_cache_ttl {
            info!(ttl_secs = ttl.as_secs_f64(), "Role lookup cache enabled");
            lookup = Arc::new(CachedRoleLookup::new(lookup, ttl));
        }

        let payments = self
            .payments
            .unwrap_or_else(|| Arc::new(DisabledProcessor) as Arc<dyn PaymentProcessor>);

        Ok(AppState {
            db,
            security: self.security_config,
            env: self.env,
            admin_guard: RoleGuard::admin(lookup.clone()),
            host_guard: RoleGuard::host(lookup),
            payments,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
