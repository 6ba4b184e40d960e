use axum::Json;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Generates a 24-char hex identifier: 4 bytes of unix time followed by
/// 8 random bytes. Sortable by creation time like the ids this API's
/// clients already store.
pub fn new_object_id() -> String {
    let secs = chrono::Utc::now().timestamp() as u32;
    let mut tail = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut tail);
    let mut bytes = Vec::with_capacity(12);
    bytes.extend_from_slice(&secs.to_be_bytes());
    bytes.extend_from_slice(&tail);
    hex::encode(bytes)
}

/// Success envelope: `{status: true, message, data}`.
pub fn envelope<T: Serialize>(message: &str, data: T) -> Json<serde_json::Value> {
    Json(json!({
        "status": true,
        "message": message,
        "data": data,
    }))
}

/// Success envelope without a data payload.
pub fn envelope_message(message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "status": true,
        "message": message,
    }))
}

// ---------------------- Books ----------------------

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub user_id: String,
    pub isbn: String,
    pub category: String,
    pub subcategory: String,
    pub released_at: String,
    pub reviews: i64,
    pub is_deleted: bool,
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub user_id: String,
    pub category: String,
    pub released_at: String,
    pub reviews: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookWithReviews {
    #[serde(flatten)]
    pub book: Book,
    pub reviews_data: Vec<Review>,
}

/// A field that clients may send either as one string or as a list of
/// strings. Lists are stored joined with commas.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn joined(&self) -> String {
        match self {
            StringOrList::One(s) => s.clone(),
            StringOrList::Many(items) => items.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub user_id: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<StringOrList>,
    pub released_at: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub isbn: Option<String>,
    pub released_at: Option<String>,
}

impl UpdateBookRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.excerpt.is_none()
            && self.isbn.is_none()
            && self.released_at.is_none()
    }
}

// ---------------------- Reviews ----------------------

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: String,
    pub book_id: String,
    pub reviewed_by: String,
    pub reviewed_at: String,
    pub rating: i64,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<String>,
    pub rating: Option<i64>,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub reviewed_by: Option<String>,
    pub rating: Option<i64>,
    pub review: Option<String>,
}

impl UpdateReviewRequest {
    pub fn is_empty(&self) -> bool {
        self.reviewed_by.is_none() && self.rating.is_none() && self.review.is_none()
    }
}

// ---------------------- Users ----------------------

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub expires_in_hours: u64,
}
