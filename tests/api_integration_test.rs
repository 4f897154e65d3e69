use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tower::util::ServiceExt; // for `oneshot`

use pet_directory::config::{Config, JsonFormat};
use pet_directory::models::pet;
use pet_directory::{db, server};

fn test_config(json_format: JsonFormat) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        port: 8000,
        cors_allowed_origins: Vec::new(),
        json_format,
    }
}

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

async fn setup_app() -> (DatabaseConnection, Router) {
    let db = setup_test_db().await;
    let app = server::build_router(db.clone(), &test_config(JsonFormat::Pretty));
    (db, app)
}

// Helper to create a test pet with a chosen identifier
async fn create_test_pet(db: &DatabaseConnection, id: i32, name: &str, species: &str) {
    let now = chrono::Utc::now().to_rfc3339();
    let pet = pet::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        species: Set(species.to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    pet::Entity::insert(pet)
        .exec(db)
        .await
        .expect("Failed to create pet");
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_welcome_message() {
    let (_db, app) = setup_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Welcome to the pet directory!");
}

#[tokio::test]
async fn test_get_pet_found() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 5, "Gwendolyn", "Dog").await;

    let (status, body) = get(&app, "/pets/5").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["name"], "Gwendolyn");
    assert_eq!(json["species"], "Dog");

    // Only the public fields reach the wire; no bookkeeping columns.
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["id", "name", "species"]);
}

#[tokio::test]
async fn test_get_pet_not_found() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 5, "Gwendolyn", "Dog").await;

    let (status, body) = get(&app, "/pets/1000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Pet 1000 not found.");
}

#[tokio::test]
async fn test_species_listing() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 2, "Gwendolyn", "Dog").await;
    create_test_pet(&db, 3, "Artemis", "Cat").await;
    create_test_pet(&db, 5, "Jennifer", "Dog").await;
    create_test_pet(&db, 6, "Jenna", "Dog").await;

    let (status, body) = get(&app, "/species/Dog").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "count": 3,
            "pets": [
                {"id": 2, "name": "Gwendolyn"},
                {"id": 5, "name": "Jennifer"},
                {"id": 6, "name": "Jenna"}
            ]
        })
    );
}

#[tokio::test]
async fn test_species_listing_empty() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 1, "Artemis", "Cat").await;

    // No matches is a successful, empty listing, not an error
    let (status, body) = get(&app, "/species/Axolotl").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"count": 0, "pets": []}));
}

#[tokio::test]
async fn test_species_match_is_case_sensitive() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 1, "Gwendolyn", "Dog").await;

    let (_, body) = get(&app, "/species/Dog").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["count"], 1);

    let (status, body) = get(&app, "/species/dog").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 5, "Gwendolyn", "Dog").await;

    for uri in ["/", "/pets/5", "/pets/1000", "/species/Dog"] {
        let (_, first) = get(&app, uri).await;
        let (_, second) = get(&app, uri).await;
        assert_eq!(first, second, "body for {} changed between requests", uri);
    }
}

#[tokio::test]
async fn test_pretty_formatting_is_default() {
    let (db, app) = setup_app().await;
    create_test_pet(&db, 5, "Gwendolyn", "Dog").await;

    // Key order is struct declaration order, indentation is two spaces.
    let (_, body) = get(&app, "/pets/5").await;
    let body = String::from_utf8(body).unwrap();
    assert_eq!(
        body,
        "{\n  \"id\": 5,\n  \"name\": \"Gwendolyn\",\n  \"species\": \"Dog\"\n}"
    );
}

#[tokio::test]
async fn test_compact_formatting_mode() {
    let db = setup_test_db().await;
    create_test_pet(&db, 5, "Gwendolyn", "Dog").await;
    let app = server::build_router(db, &test_config(JsonFormat::Compact));

    let (_, body) = get(&app, "/pets/5").await;
    let body = String::from_utf8(body).unwrap();
    assert!(!body.contains('\n'));
    assert_eq!(body, r#"{"id":5,"name":"Gwendolyn","species":"Dog"}"#);
}

#[tokio::test]
async fn test_health_check() {
    let (_db, app) = setup_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "pet-directory");
}
