// Admin and host gates against the real store.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::entities::users::Role;
use backend::repos::users as users_repo;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::{cookie_for, create_test_app, seed_user, TestHarness};

#[actix_web::test]
async fn test_admin_reaches_admin_routes_but_not_host_routes() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    seed_user(&h.db, "emp@hrhub.test", Role::Employee).await;
    let lookup = h.lookup.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/users")
        .cookie(cookie_for("boss@hrhub.test"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(lookup.calls(), 1);

    let req = test::TestRequest::get()
        .uri("/users-employee")
        .cookie(cookie_for("boss@hrhub.test"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "INSUFFICIENT_ROLE",
        "unauthorized access!!",
    )
    .await;
    assert_eq!(lookup.calls(), 2);
}

#[actix_web::test]
async fn test_host_reaches_host_routes_but_not_admin_routes() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    seed_user(&h.db, "emp@hrhub.test", Role::Employee).await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/users-employee")
        .cookie(cookie_for("hr@hrhub.test"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["email"].as_str())
        .collect();
    assert_eq!(emails, vec!["emp@hrhub.test"]);

    let req = test::TestRequest::patch()
        .uri("/users/role/emp@hrhub.test")
        .cookie(cookie_for("hr@hrhub.test"))
        .set_json(json!({"role": "host"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_identity_with_valid_cookie_is_rejected() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/users")
        .cookie(cookie_for("ghost@hrhub.test"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "FORBIDDEN_USER_NOT_FOUND",
        "unauthorized access!!",
    )
    .await;
}

#[actix_web::test]
async fn test_unset_and_employee_never_pass_a_gate() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "new@hrhub.test", Role::Unset).await;
    seed_user(&h.db, "emp@hrhub.test", Role::Employee).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    for email in ["new@hrhub.test", "emp@hrhub.test"] {
        for uri in ["/users", "/users-employee"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(cookie_for(email))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{email} {uri}");
        }
    }
}

#[actix_web::test]
async fn test_demotion_applies_to_the_next_request() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    let db = h.db.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;
    let cookie = cookie_for("boss@hrhub.test");

    let req = test::TestRequest::get()
        .uri("/users")
        .cookie(cookie.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Same credential, new role in the store
    users_repo::set_role(&db, "boss@hrhub.test", Role::Employee)
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .cookie(cookie)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_admin_changes_role_and_host_verifies() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    seed_user(&h.db, "emp@hrhub.test", Role::Employee).await;
    let db = h.db.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::patch()
        .uri("/users/role/emp@hrhub.test")
        .cookie(cookie_for("boss@hrhub.test"))
        .set_json(json!({"role": "host"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["matchedCount"], json!(1));

    let req = test::TestRequest::patch()
        .uri("/users/verify/emp@hrhub.test")
        .cookie(cookie_for("hr@hrhub.test"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = users_repo::find_user_by_email(&db, "emp@hrhub.test")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.role, Role::Host);
    assert!(stored.is_verified);

    let req = test::TestRequest::patch()
        .uri("/users/verify/nobody@hrhub.test")
        .cookie(cookie_for("hr@hrhub.test"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
