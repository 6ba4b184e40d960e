use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    repo,
    state::AppState,
    types::{envelope, envelope_message, new_object_id, CreateReviewRequest, Review, UpdateReviewRequest},
    validate,
};

pub async fn create_review(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }
    repo::books::find_active_by_id(&state.db, &book_id).await?.ok_or_not_found("Book")?;

    let rating = req.rating.ok_or_else(|| AppError::BadRequest("rating is required".into()))?;
    if !validate::is_valid_rating(rating) {
        return Err(AppError::BadRequest("rating must be between 1 and 5".into()));
    }

    let reviewed_by = match req.reviewed_by.as_deref() {
        None => "Guest".to_string(),
        Some(v) if validate::is_blank(v) => {
            return Err(AppError::BadRequest("reviewed_by is in wrong format".into()))
        }
        Some(v) => v.to_string(),
    };

    let reviewed_at = match req.reviewed_at.as_deref() {
        None => chrono::Utc::now().format("%Y-%m-%d").to_string(),
        Some(v) if !validate::is_valid_date(v) => {
            return Err(AppError::BadRequest("reviewed_at must be a date (YYYY-MM-DD)".into()))
        }
        Some(v) => v.to_string(),
    };

    if let Some(ref text) = req.review {
        if validate::is_blank(text) {
            return Err(AppError::BadRequest("review is in wrong format".into()));
        }
    }

    let review = Review {
        id: new_object_id(),
        book_id: book_id.clone(),
        reviewed_by,
        reviewed_at,
        rating,
        review: req.review,
    };
    repo::reviews::insert(&state.db, &review).await?;
    repo::books::bump_review_count(&state.db, &book_id, 1).await?;
    state.metrics.inc_reviews_created();
    tracing::info!(book_id = %book_id, review_id = %review.id, "review added");

    Ok((StatusCode::CREATED, envelope("Review added successfully", review)))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path((book_id, review_id)): Path<(String, String)>,
    Json(req): Json<UpdateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }
    if !validate::is_object_id(&review_id) {
        return Err(AppError::BadRequest("Incorrect review id format".into()));
    }

    repo::books::find_active_by_id(&state.db, &book_id).await?.ok_or_not_found("Book")?;
    repo::reviews::find_active(&state.db, &book_id, &review_id)
        .await?
        .ok_or_not_found("Review")?;

    if req.is_empty() {
        return Err(AppError::BadRequest("Body is empty, please provide data".into()));
    }
    if let Some(rating) = req.rating {
        if !validate::is_valid_rating(rating) {
            return Err(AppError::BadRequest("rating must be between 1 and 5".into()));
        }
    }
    if let Some(ref by) = req.reviewed_by {
        if validate::is_blank(by) {
            return Err(AppError::BadRequest("reviewed_by is in wrong format".into()));
        }
    }
    if let Some(ref text) = req.review {
        if validate::is_blank(text) {
            return Err(AppError::BadRequest("review is in wrong format".into()));
        }
    }

    repo::reviews::update(
        &state.db,
        &review_id,
        req.reviewed_by.as_deref(),
        req.rating,
        req.review.as_deref(),
    )
    .await?;

    let updated = repo::reviews::find_active(&state.db, &book_id, &review_id)
        .await?
        .ok_or_not_found("Review")?;
    Ok(envelope("Success", updated))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path((book_id, review_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    if !validate::is_object_id(&book_id) {
        return Err(AppError::BadRequest("Incorrect book id format".into()));
    }
    if !validate::is_object_id(&review_id) {
        return Err(AppError::BadRequest("Incorrect review id format".into()));
    }

    repo::books::find_active_by_id(&state.db, &book_id).await?.ok_or_not_found("Book")?;
    repo::reviews::find_active(&state.db, &book_id, &review_id)
        .await?
        .ok_or_not_found("Review")?;

    repo::reviews::soft_delete(&state.db, &review_id).await?;
    repo::books::bump_review_count(&state.db, &book_id, -1).await?;
    tracing::info!(book_id = %book_id, review_id = %review_id, "review soft-deleted");

    Ok(envelope_message("Review deleted successfully"))
}
