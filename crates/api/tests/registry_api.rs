//! HTTP-level tests for shelves, cells, requesters, collections,
//! internal classifiers and artefact CRUD.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Shelves and cells
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_shelf_provisions_cells(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/shelves",
        json!({ "code": 12 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let shelf_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/physical-locations?shelf_id={shelf_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cells = body_json(response).await["data"].as_array().unwrap().clone();
    assert_eq!(cells.len(), 16);
    assert_eq!(cells[0]["level"], 1);
    assert_eq!(cells[0]["column_letter"], "A");

    let cell_id = cells[5]["id"].as_i64().unwrap();
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/physical-locations/{cell_id}"),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["shelf_code"], 12);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_shelf_code_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/shelves",
        json!({ "code": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_shelf_code_returns_409(pool: PgPool) {
    let body = json!({ "code": 3 });
    post_json(common::build_test_app(pool.clone()), "/api/v1/shelves", body.clone()).await;

    let response = post_json(common::build_test_app(pool), "/api/v1/shelves", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("uq_shelves_code"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cell_lookup_validates_address(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/shelves",
        json!({ "code": 29 }),
    )
    .await;
    let shelf_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let lookup = |level: i32, column: &str| {
        format!(
            "/api/v1/physical-locations/lookup?shelf_id={shelf_id}&level={level}&column_letter={column}"
        )
    };

    let response = get(common::build_test_app(pool.clone()), &lookup(5, "A")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get(common::build_test_app(pool.clone()), &lookup(1, "E")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Work tables only have the 1/A cell.
    let response = get(common::build_test_app(pool.clone()), &lookup(2, "B")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = get(common::build_test_app(pool), &lookup(1, "A")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shelf_update_and_delete(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/shelves",
        json!({ "code": 8 }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/shelves/{id}");

    let response = put_json(common::build_test_app(pool.clone()), &uri, json!({ "code": -1 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Regular shelf cannot be renumbered into a work table.
    let response = put_json(common::build_test_app(pool.clone()), &uri, json!({ "code": 29 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = put_json(common::build_test_app(pool.clone()), &uri, json!({ "code": 18 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["code"], 18);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shelf_in_use_cannot_be_deleted(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/shelves",
        json!({ "code": 10 }),
    )
    .await;
    let shelf_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/physical-locations?shelf_id={shelf_id}"),
    )
    .await;
    let cell_id = body_json(response).await["data"][0]["id"].as_i64().unwrap();

    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts",
        json!({ "name": "Urn", "physical_location_id": cell_id }),
    )
    .await;

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/shelves/{shelf_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Requesters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_requester_crud_over_http(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/requesters",
        json!({ "requester_type": "visitor" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/requesters",
        json!({ "requester_type": "investigator", "first_name": "Luis", "dni": "555X" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/requesters/{id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "requester_type": "nobody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "last_name": "Mora" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["first_name"], "Luis");
    assert_eq!(json["data"]["last_name"], "Mora");

    let response = get(common::build_test_app(pool.clone()), "/api/v1/requesters").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Artefacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generic_update_cannot_touch_lifecycle_fields(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts",
        json!({ "name": "Lamp" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artefacts/{id}"),
        json!({ "name": "Oil lamp", "available": false, "physical_location_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Oil lamp");
    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["physical_location_id"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artefact_validation_and_not_found(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts",
        json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/artefacts/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts/999999",
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), "/api/v1/artefacts/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artefact_list_filtered_by_shelf(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/shelves",
        json!({ "code": 15 }),
    )
    .await;
    let shelf_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/physical-locations?shelf_id={shelf_id}"),
    )
    .await;
    let cell_id = body_json(response).await["data"][3]["id"].as_i64().unwrap();

    for (name, location) in [("Brooch", Some(cell_id)), ("Comb", None)] {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/artefacts",
            json!({ "name": name, "physical_location_id": location }),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artefacts?shelf_id={shelf_id}"),
    )
    .await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Brooch");

    let response = get(common::build_test_app(pool), "/api/v1/artefacts").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Collections and internal classifiers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_collection_and_classifier_crud_over_http(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/collections",
        json!({ "name": "Bruch", "year": 1910 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let collection = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/collections/{collection}"),
        json!({ "name": "  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "name": "Ceramics", "number": 3 });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/internal-classifiers",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let classifier = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/internal-classifiers",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artefacts",
        json!({
            "name": "Urn",
            "collection_id": collection,
            "internal_classifier_id": classifier,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let artefact = body_json(response).await["data"].clone();
    assert_eq!(artefact["collection_id"], collection);
    assert_eq!(artefact["internal_classifier_id"], classifier);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/internal-classifiers/{classifier}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/internal-classifiers/{classifier}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_collection_refreshes_cached_listing(pool: PgPool) {
    let state = common::test_state(pool);

    let response = post_json(
        common::build_app_with_state(state.clone()),
        "/api/v1/collections",
        json!({ "name": "Ambrosetti" }),
    )
    .await;
    let collection = body_json(response).await["data"]["id"].as_i64().unwrap();
    post_json(
        common::build_app_with_state(state.clone()),
        "/api/v1/artefacts",
        json!({ "name": "Spindle whorl", "collection_id": collection }),
    )
    .await;

    let response = get(common::build_app_with_state(state.clone()), "/api/v1/artefacts").await;
    assert_eq!(body_json(response).await["data"][0]["collection_id"], collection);

    delete(
        common::build_app_with_state(state.clone()),
        &format!("/api/v1/collections/{collection}"),
    )
    .await;

    let response = get(common::build_app_with_state(state), "/api/v1/artefacts").await;
    assert_eq!(body_json(response).await["data"][0]["collection_id"], Value::Null);
}
