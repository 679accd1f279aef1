use actix_web::web;
use serde::Serialize;

pub mod auth;
pub mod health;
pub mod payments;
pub mod salaries;
pub mod users;
pub mod works;

/// Outcome of an update, in the shape the web client already consumes.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<i64>,
    pub upserted_count: u64,
}

impl WriteResult {
    pub fn updated(matched: u64, modified: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
            upserted_id: None,
            upserted_count: 0,
        }
    }

    pub fn upserted(id: i64) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
            upserted_count: 1,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: i64,
}

impl InsertResult {
    pub fn new(inserted_id: i64) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Register every route. Credential-gated resources carry their own
/// `CookieAuth` wrapper, so the same tree serves `main.rs` and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(users::configure_routes)
        .configure(works::configure_routes)
        .configure(salaries::configure_routes)
        .configure(payments::configure_routes);
}
