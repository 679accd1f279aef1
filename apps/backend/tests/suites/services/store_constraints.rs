// Constraint violations surface as typed domain errors.

use backend::entities::users::Role;
use backend::errors::domain::{ConflictKind, DomainError};
use backend::repos::users::{self as users_repo, UserCreate};
use backend::services::salaries::{self as salaries_service, SalaryPayment};
use backend::services::works as works_service;
use serde_json::json;

use crate::support::{seed_user, TestHarness};

#[tokio::test]
async fn test_duplicate_email_is_unique_email_conflict() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "dup@hrhub.test", Role::Employee).await;

    let err = users_repo::create_user(&h.db, UserCreate::new("dup@hrhub.test", 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::UniqueEmail, _)
    ));
}

#[tokio::test]
async fn test_role_lookup_reads_current_store_value() {
    let h = TestHarness::new().await;
    seed_user(&h.db, "r@hrhub.test", Role::Host).await;

    assert_eq!(
        users_repo::find_role_by_email(&h.db, "r@hrhub.test")
            .await
            .unwrap(),
        Some(Role::Host)
    );
    users_repo::set_role(&h.db, "r@hrhub.test", Role::Admin)
        .await
        .unwrap();
    assert_eq!(
        users_repo::find_role_by_email(&h.db, "r@hrhub.test")
            .await
            .unwrap(),
        Some(Role::Admin)
    );
    assert_eq!(
        users_repo::find_role_by_email(&h.db, "none@hrhub.test")
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_salary_period_is_unique_per_employee() {
    let h = TestHarness::new().await;
    let pay = |email: &str| SalaryPayment {
        employee_email: email.to_string(),
        month: "June".into(),
        year: 2024,
        amount: 100.0,
        transaction_id: None,
    };

    salaries_service::record_salary(&h.db, pay("a@hrhub.test"))
        .await
        .unwrap();
    // Another employee, same period
    salaries_service::record_salary(&h.db, pay("b@hrhub.test"))
        .await
        .unwrap();
    assert!(salaries_service::record_salary(&h.db, pay("a@hrhub.test"))
        .await
        .is_err());

    let rows = salaries_service::list_salaries_for(&h.db, "a@hrhub.test")
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].transaction_id, None);
}

#[tokio::test]
async fn test_work_details_round_trip_through_json_column() {
    let h = TestHarness::new().await;
    let details = json!({"hours": 7.5, "tags": ["a", "b"], "date": "2024-06-02"});

    let work = works_service::create_work(
        &h.db,
        "w@hrhub.test",
        Some("W".into()),
        "  Sales ",
        details.clone(),
    )
    .await
    .unwrap();
    assert_eq!(work.category, "Sales");

    let listed = works_service::list_works(&h.db, Some("Sales")).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].details, details);
}
