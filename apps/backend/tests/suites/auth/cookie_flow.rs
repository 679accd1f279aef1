// Issuing, presenting and clearing the `token` cookie.

use std::time::{Duration, SystemTime};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::claims::IdentityClaims;
use backend::auth::jwt::{issue_credential, verify_credential, CREDENTIAL_TTL};
use backend::config::cookie::CREDENTIAL_COOKIE;
use backend::config::RuntimeEnv;
use backend::entities::users::Role;
use backend::state::security_config::SecurityConfig;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::common::credential_cookie;
use crate::support::test_state::TEST_SECRET;
use crate::support::{cookie_for, create_test_app, seed_user, TestHarness};

#[actix_web::test]
async fn test_jwt_sets_http_only_cookie_and_carries_claims() {
    let h = TestHarness::new().await;
    let security = h.state.security.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "ada@hrhub.test", "name": "Ada", "photo": "p.png"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = credential_cookie(&resp).expect("token cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_ne!(cookie.secure(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));

    let claims = verify_credential(Some(cookie.value()), &security).unwrap();
    assert_eq!(claims.email, "ada@hrhub.test");
    assert_eq!(claims.extra.get("name"), Some(&json!("Ada")));
    assert_eq!(claims.extra.get("photo"), Some(&json!("p.png")));
}

#[actix_web::test]
async fn test_prod_cookie_is_secure_and_cross_site() {
    let h = TestHarness::with_env(RuntimeEnv::Prod).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "ada@hrhub.test"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let cookie = credential_cookie(&resp).expect("token cookie");
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::None));
}

#[actix_web::test]
async fn test_jwt_without_email_is_rejected() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(credential_cookie(&resp).is_none());
}

#[actix_web::test]
async fn test_jwt_with_reserved_claim_is_rejected() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "ada@hrhub.test", "exp": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::BAD_REQUEST,
        "RESERVED_CLAIM",
        "Claim 'exp' is set by the server and cannot be supplied",
    )
    .await;
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = credential_cookie(&resp).expect("cleared cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));
}

#[actix_web::test]
async fn test_missing_cookie_is_401_without_role_lookup() {
    let h = TestHarness::new().await;
    let lookup = h.lookup.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    for uri in ["/users", "/users-employee", "/works", "/salaries/a@x.com"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "unauthorized access",
        )
        .await;
    }
    assert_eq!(lookup.calls(), 0);
}

#[actix_web::test]
async fn test_invalid_and_expired_cookies_are_401() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    let lookup = h.lookup.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let garbage = Cookie::new(CREDENTIAL_COOKIE, "not-a-jwt");
    let foreign = {
        let token = issue_credential(
            &IdentityClaims::new("boss@hrhub.test"),
            SystemTime::now(),
            &SecurityConfig::new("some-other-secret"),
        )
        .unwrap();
        Cookie::new(CREDENTIAL_COOKIE, token)
    };
    // Lapsed only seconds ago
    let expired = {
        let issued = SystemTime::now() - CREDENTIAL_TTL - Duration::from_secs(5);
        let token = issue_credential(
            &IdentityClaims::new("boss@hrhub.test"),
            issued,
            &SecurityConfig::new(TEST_SECRET),
        )
        .unwrap();
        Cookie::new(CREDENTIAL_COOKIE, token)
    };

    for (cookie, code) in [
        (garbage, "UNAUTHORIZED_INVALID_TOKEN"),
        (foreign, "UNAUTHORIZED_INVALID_TOKEN"),
        (expired, "UNAUTHORIZED_EXPIRED_TOKEN"),
    ] {
        let req = test::TestRequest::get()
            .uri("/users")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            StatusCode::UNAUTHORIZED,
            code,
            "unauthorized access",
        )
        .await;
    }
    assert_eq!(lookup.calls(), 0);
}

#[actix_web::test]
async fn test_issued_cookie_opens_token_gated_route() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "emp@hrhub.test"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = credential_cookie(&resp).unwrap();

    let req = test::TestRequest::get()
        .uri("/my-works/emp@hrhub.test")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    // Cookie built by hand from the same secret works the same way
    let req = test::TestRequest::get()
        .uri("/works")
        .cookie(cookie_for("emp@hrhub.test"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
