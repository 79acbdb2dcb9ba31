//! HTTP-level tests for loans and the artefact availability flag.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_artefact(pool: &PgPool) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts",
        json!({ "name": "Gold earring", "material": "gold" }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn available(pool: &PgPool, artefact: i64) -> bool {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artefacts/{artefact}"),
    )
    .await;
    body_json(response).await["data"]["available"]
        .as_bool()
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_loan_lifecycle_over_http(pool: PgPool) {
    let artefact = create_artefact(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/loans",
        json!({ "artefact_id": artefact, "loan_date": "2025-03-01", "loan_time": "09:30:00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let loan = body_json(response).await["data"].clone();
    assert_eq!(loan["artefact_name"], "Gold earring");
    assert_eq!(loan["loan_date"], "2025-03-01");
    let loan_id = loan["id"].as_i64().unwrap();
    assert!(!available(&pool, artefact).await);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/loans/{loan_id}"),
        json!({ "return_date": "2025-04-01", "return_time": "16:00:00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["return_date"], "2025-04-01");
    assert!(available(&pool, artefact).await);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/loans").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lending_unavailable_artefact_returns_409(pool: PgPool) {
    let artefact = create_artefact(&pool).await;
    let body = json!({ "artefact_id": artefact });

    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/loans", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/loans", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ARTEFACT_UNAVAILABLE");

    let response = get(common::build_test_app(pool.clone()), "/api/v1/loans").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_loan_for_missing_artefact_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/loans",
        json!({ "artefact_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_loan_releases_artefact(pool: PgPool) {
    let artefact = create_artefact(&pool).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/loans",
        json!({ "artefact_id": artefact }),
    )
    .await;
    let loan_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/loans/{loan_id}");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(available(&pool, artefact).await);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
