#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// The `token` cookie a response set, if any.
pub fn credential_cookie<B>(resp: &ServiceResponse<B>) -> Option<actix_web::cookie::Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == backend::config::cookie::CREDENTIAL_COOKIE)
        .map(|c| c.into_owned())
}

/// Helper to check the trace id in a problem body matches the response header.
pub fn assert_trace_id_matches(json: &Value, header_trace_id: &str) {
    let trace_id_in_body = json["trace_id"]
        .as_str()
        .expect("trace_id field should be a string");
    assert_eq!(
        trace_id_in_body, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
}
