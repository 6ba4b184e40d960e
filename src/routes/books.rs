use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;

use crate::{
    auth::AuthenticatedUser,
    error::{AppError, AppResult, OptionExt},
    repo,
    state::AppState,
    types::{
        envelope, envelope_message, new_object_id, Book, BookWithReviews, CreateBookRequest,
        UpdateBookRequest,
    },
    validate,
};

pub async fn create_book(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<impl IntoResponse> {
    // Field checks run in a fixed order so the first failing field names
    // the 400 message.
    let title = require_string(req.title.as_deref(), "title")?;
    let excerpt = require_string(req.excerpt.as_deref(), "excerpt")?;

    let user_id = require_string(req.user_id.as_deref(), "user_id")?;
    if !validate::is_object_id(user_id) {
        return Err(AppError::BadRequest("Incorrect user_id format".into()));
    }
    if !user.owns(user_id) {
        return Err(AppError::Forbidden("User's credentials do not match".into()));
    }

    let isbn = require_string(req.isbn.as_deref(), "isbn")?;
    if !validate::is_valid_isbn(isbn) {
        return Err(AppError::BadRequest("isbn must be a valid ISBN-10 or ISBN-13".into()));
    }

    let category = require_string(req.category.as_deref(), "category")?;
    if !validate::is_alphabetic(category) {
        return Err(AppError::BadRequest("category cannot contain numbers".into()));
    }

    // subcategory may arrive as one string or a list; lists are stored joined
    let subcategory = match req.subcategory {
        None => return Err(AppError::BadRequest("subcategory is required".into())),
        Some(ref v) => {
            let joined = v.joined();
            if validate::is_blank(&joined) {
                return Err(AppError::BadRequest("subcategory is in wrong format".into()));
            }
            joined
        }
    };

    let released_at = require_string(req.released_at.as_deref(), "released_at")?;
    if !validate::is_valid_date(released_at) {
        return Err(AppError::BadRequest("released_at must be a date (YYYY-MM-DD)".into()));
    }

    // Uniqueness pre-checks among non-deleted books. Read-then-write,
    // concurrent creations can race past them.
    if repo::books::title_in_use(&state.db, title).await? {
        return Err(AppError::BadRequest("Title already used".into()));
    }
    if repo::books::isbn_in_use(&state.db, isbn).await? {
        return Err(AppError::BadRequest("ISBN already used".into()));
    }

    let id = new_object_id();
    let book = Book {
        id: id.clone(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        user_id: user_id.to_string(),
        isbn: isbn.to_string(),
        category: category.to_string(),
        subcategory,
        released_at: released_at.to_string(),
        reviews: 0,
        is_deleted: false,
        deleted_at: None,
        created_at: String::new(),
        updated_at: String::new(),
    };
    repo::books::insert(&state.db, &book).await?;
    state.metrics.inc_books_created();
    tracing::info!(book_id = %id, user_id = %user.user_id, "book created");

    // Re-read so the response carries the DB-assigned timestamps
    let created = repo::books::find_by_id(&state.db, &id).await?.ok_or_not_found("Book")?;
    Ok((StatusCode::CREATED, envelope("Book created successfully", created)))
}

pub async fn list_books(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filters): Query<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    if let Some(uid) = filters.get("user_id") {
        if !validate::is_object_id(uid) {
            return Err(AppError::BadRequest("Incorrect user_id format".into()));
        }
    }

    // Every query parameter becomes an equality filter; a key that is not
    // a book column matches nothing and the lookup reports Books not found.
    let books = repo::books::list(&state.db, &filters).await?;
    if books.is_empty() {
        return Err(AppError::NotFound("Books not found".into()));
    }
    Ok(envelope("Books list", books))
}

pub async fn get_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(book_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }

    let book = repo::books::find_active_by_id(&state.db, &book_id).await?.ok_or_not_found("Book")?;
    let reviews_data = repo::reviews::list_for_book(&state.db, &book_id).await?;

    Ok(envelope("Book details", BookWithReviews { book, reviews_data }))
}

pub async fn update_book(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(book_id): Path<String>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }

    let book = match repo::books::find_by_id(&state.db, &book_id).await? {
        Some(b) if !b.is_deleted => b,
        _ => return Err(AppError::NotFound("Book not found".into())),
    };
    if !user.owns(&book.user_id) {
        return Err(AppError::Forbidden("Not authorized".into()));
    }
    if req.is_empty() {
        return Err(AppError::BadRequest("Body is empty, please provide data".into()));
    }

    if let Some(ref title) = req.title {
        if validate::is_blank(title) {
            return Err(AppError::BadRequest("title is in wrong format".into()));
        }
        if repo::books::title_in_use(&state.db, title).await? {
            return Err(AppError::BadRequest("Title already used".into()));
        }
    }
    if let Some(ref excerpt) = req.excerpt {
        if validate::is_blank(excerpt) {
            return Err(AppError::BadRequest("excerpt is in wrong format".into()));
        }
    }
    if let Some(ref isbn) = req.isbn {
        if !validate::is_valid_isbn(isbn) {
            return Err(AppError::BadRequest("isbn must be a valid ISBN-10 or ISBN-13".into()));
        }
        if repo::books::isbn_in_use(&state.db, isbn).await? {
            return Err(AppError::BadRequest("ISBN already used".into()));
        }
    }
    if let Some(ref released_at) = req.released_at {
        if !validate::is_valid_date(released_at) {
            return Err(AppError::BadRequest("released_at must be a date (YYYY-MM-DD)".into()));
        }
    }

    let updated = repo::books::update(
        &state.db,
        &book_id,
        req.title.as_deref(),
        req.excerpt.as_deref(),
        req.isbn.as_deref(),
        req.released_at.as_deref(),
    )
    .await?
    .ok_or_not_found("Book")?;
    state.metrics.inc_books_updated();
    tracing::info!(book_id = %book_id, user_id = %user.user_id, "book updated");

    Ok(envelope("Success", updated))
}

pub async fn delete_book(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(book_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }

    let book = match repo::books::find_by_id(&state.db, &book_id).await? {
        Some(b) if !b.is_deleted => b,
        _ => return Err(AppError::NotFound("No such book exists".into())),
    };
    if !user.owns(&book.user_id) {
        return Err(AppError::Forbidden("Not authorized".into()));
    }

    repo::books::soft_delete(&state.db, &book_id).await?;
    state.metrics.inc_books_deleted();
    tracing::info!(book_id = %book_id, user_id = %user.user_id, "book soft-deleted");

    Ok(envelope_message("Book deleted successfully"))
}

/// Presence plus non-blank check; the message names the failing field.
fn require_string<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value {
        None => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(v) if validate::is_blank(v) => {
            Err(AppError::BadRequest(format!("{} is in wrong format", field)))
        }
        Some(v) => Ok(v),
    }
}
