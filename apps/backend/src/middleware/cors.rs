use std::env;

use actix_cors::Cors;
use actix_web::http::header;

const DEFAULT_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:5174"];

/// Origins from `CORS_ALLOWED_ORIGINS` (comma-separated); empty, "null" and
/// non-http(s) entries are dropped. Falls back to the local dev servers.
pub fn allowed_origins() -> Vec<String> {
    let configured: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if configured.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    }
}

/// CORS with credentials: the browser must send the credential cookie cross-origin.
pub fn cors_middleware() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins() {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
