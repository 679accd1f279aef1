use std::env;

use crate::error::AppError;

/// Which engine the application connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// Production database
    Postgres,
    /// Throwaway in-memory SQLite (tests, local experiments)
    SqliteMemory,
}

/// Builds the connection URL for the given engine.
///
/// For Postgres, `DATABASE_URL` wins when set; otherwise the URL is assembled
/// from `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`, `DB_USER` and `DB_PASS`.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            if let Some(url) = non_empty_var("DATABASE_URL") {
                return Ok(url);
            }
            let host = non_empty_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = non_empty_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = must_var("POSTGRES_DB")?;
            let username = must_var("DB_USER")?;
            let password = must_var("DB_PASS")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Strip credentials before a URL goes anywhere near a log line.
pub fn sanitize_db_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &url[..scheme_end], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    non_empty_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
