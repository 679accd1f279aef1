use actix_web::http::StatusCode;
use actix_web::test;
use backend::entities::users::Role;
use serde_json::{json, Value};

use crate::support::{cookie_for, create_test_app, seed_user, TestHarness};

#[actix_web::test]
async fn test_host_creates_intent_in_minor_units() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    let payments = h.payments.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/create-payment-intent")
        .cookie(cookie_for("hr@hrhub.test"))
        .set_json(json!({"price": 19.99}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"clientSecret": "pi_test_1999_secret_abc"}));

    assert_eq!(payments.requests(), vec![(1999, "usd".to_string())]);
}

#[actix_web::test]
async fn test_non_positive_price_never_reaches_processor() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "hr@hrhub.test", Role::Host).await;
    let payments = h.payments.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    for price in [json!(0), json!(-12.5)] {
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .cookie(cookie_for("hr@hrhub.test"))
            .set_json(json!({ "price": price }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], json!("INVALID_PRICE"));
    }

    // Wrong type is caught by the JSON extractor
    let req = test::TestRequest::post()
        .uri("/create-payment-intent")
        .cookie(cookie_for("hr@hrhub.test"))
        .set_json(json!({"price": "ten"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    assert!(payments.requests().is_empty());
}

#[actix_web::test]
async fn test_intent_is_host_only() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "boss@hrhub.test", Role::Admin).await;
    let payments = h.payments.clone();
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/create-payment-intent")
        .cookie(cookie_for("boss@hrhub.test"))
        .set_json(json!({"price": 5}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert!(payments.requests().is_empty());
}
