use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use crate::support::{cookie_for, create_test_app, TestHarness};

#[actix_web::test]
async fn test_post_and_filter_works() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    for (email, category, hours) in [
        ("a@hrhub.test", "Sales", 4),
        ("b@hrhub.test", "Support", 6),
        ("a@hrhub.test", "Support", 2),
    ] {
        let req = test::TestRequest::post()
            .uri("/work")
            .cookie(cookie_for(email))
            .set_json(json!({
                "employee": {"email": email, "name": "Someone"},
                "category": category,
                "hours": hours
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["acknowledged"], json!(true));
        assert!(body["insertedId"].is_i64());
    }

    let list = |uri: &str| {
        test::TestRequest::get()
            .uri(uri)
            .cookie(cookie_for("a@hrhub.test"))
            .to_request()
    };

    let all: Value = test::read_body_json(test::call_service(&app, list("/works")).await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    // The web client sends the literal "null" when no filter is selected
    let unfiltered: Value =
        test::read_body_json(test::call_service(&app, list("/works?category=null")).await).await;
    assert_eq!(unfiltered.as_array().unwrap().len(), 3);

    let support: Value =
        test::read_body_json(test::call_service(&app, list("/works?category=Support")).await)
            .await;
    let support = support.as_array().unwrap();
    assert_eq!(support.len(), 2);
    assert!(support.iter().all(|w| w["category"] == json!("Support")));

    let mine: Value =
        test::read_body_json(test::call_service(&app, list("/my-works/a@hrhub.test")).await)
            .await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine
        .iter()
        .all(|w| w["employee"]["email"] == json!("a@hrhub.test")));
    assert!(mine.iter().any(|w| w["hours"] == json!(4)));
}

#[actix_web::test]
async fn test_post_work_defaults_to_caller() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/work")
        .cookie(cookie_for("me@hrhub.test"))
        .set_json(json!({"category": "Paperwork", "date": "2024-06-01"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/my-works/me@hrhub.test")
        .cookie(cookie_for("me@hrhub.test"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body[0]["employee"]["email"], json!("me@hrhub.test"));
    assert_eq!(body[0]["date"], json!("2024-06-01"));
}

#[actix_web::test]
async fn test_post_work_requires_category() {
    let h = TestHarness::new().await;
    let app = create_test_app(h.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/work")
        .cookie(cookie_for("me@hrhub.test"))
        .set_json(json!({"hours": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], json!("INVALID_CATEGORY"));
}
