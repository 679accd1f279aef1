use std::sync::Arc;
use std::time::SystemTime;

use actix_web::cookie::Cookie;
use backend::auth::claims::IdentityClaims;
use backend::auth::jwt::issue_credential;
use backend::config::cookie::CREDENTIAL_COOKIE;
use backend::config::{DbKind, RuntimeEnv};
use backend::entities::users::Role;
use backend::infra::db::bootstrap_db;
use backend::infra::state::build_state;
use backend::repos::users::{self, User, UserCreate};
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::DatabaseConnection;

use super::fakes::{CountingLookup, FakeProcessor};

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// A migrated in-memory store plus the state built on top of it, with
/// handles on the fakes so tests can assert on them.
pub struct TestHarness {
    pub state: AppState,
    pub db: DatabaseConnection,
    pub lookup: Arc<CountingLookup>,
    pub payments: Arc<FakeProcessor>,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_env(RuntimeEnv::Dev).await
    }

    pub async fn with_env(env: RuntimeEnv) -> Self {
        let db = bootstrap_db(DbKind::SqliteMemory)
            .await
            .expect("sqlite bootstrap");
        let lookup = CountingLookup::new(db.clone());
        let payments = Arc::new(FakeProcessor::default());

        let state = build_state()
            .with_connection(db.clone())
            .with_env(env)
            .with_security(SecurityConfig::new(TEST_SECRET))
            .with_role_lookup(lookup.clone())
            .with_payments(payments.clone())
            .build()
            .await
            .expect("state");

        Self {
            state,
            db,
            lookup,
            payments,
        }
    }
}

pub async fn seed_user(db: &DatabaseConnection, email: &str, role: Role) -> User {
    users::create_user(db, UserCreate::new(email, 0).with_role(role))
        .await
        .expect("seed user")
}

/// A `token` cookie carrying a freshly issued credential for `email`.
pub fn cookie_for(email: &str) -> Cookie<'static> {
    let token = issue_credential(
        &IdentityClaims::new(email),
        SystemTime::now(),
        &SecurityConfig::new(TEST_SECRET),
    )
    .expect("issue");
    Cookie::new(CREDENTIAL_COOKIE, token)
}
