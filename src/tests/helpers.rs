//! Shared fixtures for the HTTP test modules.

use axum::{
    body::Body,
    http::{Request, Response},
    routing::{get, post, put},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

use crate::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use crate::state::AppState;
use crate::types::new_object_id;
use crate::{auth, db, routes};

pub const TEST_JWT_SECRET: &str = "test-secret-key-0123456789";

pub async fn setup_test_app() -> (Router, AppState, TempDir) {
    // The TempDir guard must stay alive for the duration of the test
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    sqlx::Sqlite::create_database(&db_url).await.unwrap();
    let pool = SqlitePoolOptions::new().max_connections(2).connect(&db_url).await.unwrap();
    db::init_db(&pool).await.unwrap();

    let config = AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 3000 },
        database: DatabaseConfig { url: db_url },
        auth: AuthConfig { jwt_secret: TEST_JWT_SECRET.to_string(), token_expiry_hours: 24 },
    };
    let state = AppState::new(pool, config);

    let app = Router::new()
        .route("/healthz", get(routes::health::healthz))
        .route("/readyz", get(routes::health::readyz))
        .route("/metrics", get(routes::health::metrics))
        .route("/version", get(routes::health::version))
        .route("/register", post(routes::users::register))
        .route("/login", post(routes::users::login))
        .route("/books", post(routes::books::create_book).get(routes::books::list_books))
        .route(
            "/books/{book_id}",
            get(routes::books::get_book)
                .put(routes::books::update_book)
                .delete(routes::books::delete_book),
        )
        .route("/books/{book_id}/review", post(routes::reviews::create_review))
        .route(
            "/books/{book_id}/review/{review_id}",
            put(routes::reviews::update_review).delete(routes::reviews::delete_review),
        )
        .with_state(state.clone());

    (app, state, temp_dir)
}

/// Inserts a user row directly and returns (user_id, bearer token).
pub async fn seed_user(state: &AppState) -> (String, String) {
    let id = new_object_id();
    sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES (?1, ?2, ?3, ?4)")
        .bind(&id)
        .bind("Test User")
        .bind(format!("{}@example.com", &id[..12]))
        .bind(auth::hash_password("password123").unwrap())
        .execute(&state.db)
        .await
        .unwrap();
    let token = auth::create_token(&id, TEST_JWT_SECRET, 24).unwrap();
    (id, token)
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri).header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid create-book payload owned by `user_id`.
pub fn book_payload(user_id: &str, title: &str, isbn: &str) -> Value {
    serde_json::json!({
        "title": title,
        "excerpt": "An excerpt",
        "user_id": user_id,
        "isbn": isbn,
        "category": "Fiction",
        "subcategory": "Fantasy",
        "released_at": "2021-09-17",
    })
}
