use actix_web::http::StatusCode;
use actix_web::test;
use backend::entities::users::Role;
use serde_json::{json, Value};

use crate::support::{cookie_for, create_test_app, seed_user, TestHarness};

#[actix_web::test]
async fn test_host_pays_once_per_month() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let pay = |month: &str| {
        test::TestRequest::post()
            .uri("/salary")
            .cookie(cookie_for("hr@hrhub.test"))
            .set_json(json!({
                "email": "emp@hrhub.test",
                "month": month,
                "year": 2024,
                "salary": 2500.0,
                "transactionId": "pi_123"
            }))
            .to_request()
    };

    let resp = test::call_service(&app, pay("march")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["insertedId"].is_i64());

    // "3" and "March" name the same period
    let resp = test::call_service(&app, pay("3")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = test::call_service(&app, pay("April")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/salaries/emp@hrhub.test")
        .cookie(cookie_for("emp@hrhub.test"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r["month"] == json!("March")));
    assert!(rows.iter().all(|r| r["transactionId"] == json!("pi_123")));
    assert!(rows.iter().all(|r| r["salary"] == json!(2500.0)));
}

#[actix_web::test]
async fn test_salary_rejects_bad_input() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    for body in [
        json!({"email": "emp@hrhub.test", "month": "Smarch", "year": 2024, "salary": 10}),
        json!({"email": "emp@hrhub.test", "month": "May", "year": 2024, "salary": 0}),
        json!({"email": "emp@hrhub.test", "month": "May", "year": 12, "salary": 10}),
        json!({"email": "nope", "month": "May", "year": 2024, "salary": 10}),
    ] {
        let req = test::TestRequest::post()
            .uri("/salary")
            .cookie(cookie_for("hr@hrhub.test"))
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
    }
}

#[actix_web::test]
async fn test_employee_cannot_pay_salaries() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "emp@hrhub.test", Role::Employee).await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/salary")
        .cookie(cookie_for("emp@hrhub.test"))
        .set_json(json!({"email": "emp@hrhub.test", "month": "May", "year": 2024, "salary": 1e6}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
