use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::types::Review;

const SELECT_COLUMNS: &str = "id, book_id, reviewed_by, reviewed_at, rating, review";

pub async fn insert(pool: &SqlitePool, review: &Review) -> AppResult<()> {
    sqlx::query(
        r#"INSERT INTO reviews (id, book_id, reviewed_by, reviewed_at, rating, review)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
    )
    .bind(&review.id)
    .bind(&review.book_id)
    .bind(&review.reviewed_by)
    .bind(&review.reviewed_at)
    .bind(review.rating)
    .bind(&review.review)
    .execute(pool)
    .await?;
    Ok(())
}

/// Non-deleted reviews for a book, oldest first.
pub async fn list_for_book(pool: &SqlitePool, book_id: &str) -> AppResult<Vec<Review>> {
    let sql = format!(
        "SELECT {} FROM reviews WHERE book_id = ?1 AND is_deleted = 0 ORDER BY created_at ASC",
        SELECT_COLUMNS
    );
    let reviews = sqlx::query_as::<_, Review>(&sql).bind(book_id).fetch_all(pool).await?;
    Ok(reviews)
}

/// A non-deleted review, only if it belongs to the given book.
pub async fn find_active(
    pool: &SqlitePool,
    book_id: &str,
    review_id: &str,
) -> AppResult<Option<Review>> {
    let sql = format!(
        "SELECT {} FROM reviews WHERE id = ?1 AND book_id = ?2 AND is_deleted = 0",
        SELECT_COLUMNS
    );
    let review = sqlx::query_as::<_, Review>(&sql)
        .bind(review_id)
        .bind(book_id)
        .fetch_optional(pool)
        .await?;
    Ok(review)
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    reviewed_by: Option<&str>,
    rating: Option<i64>,
    review: Option<&str>,
) -> AppResult<()> {
    let mut sets: Vec<String> = Vec::new();
    let mut idx = 1;
    if reviewed_by.is_some() {
        sets.push(format!("reviewed_by = ?{}", idx));
        idx += 1;
    }
    if rating.is_some() {
        sets.push(format!("rating = ?{}", idx));
        idx += 1;
    }
    if review.is_some() {
        sets.push(format!("review = ?{}", idx));
        idx += 1;
    }
    if sets.is_empty() {
        return Ok(());
    }

    let sql = format!("UPDATE reviews SET {} WHERE id = ?{}", sets.join(", "), idx);
    let mut qx = sqlx::query(&sql);
    if let Some(v) = reviewed_by {
        qx = qx.bind(v);
    }
    if let Some(v) = rating {
        qx = qx.bind(v);
    }
    if let Some(v) = review {
        qx = qx.bind(v);
    }
    qx = qx.bind(id);
    qx.execute(pool).await?;
    Ok(())
}

pub async fn soft_delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    sqlx::query("UPDATE reviews SET is_deleted = 1 WHERE id = ?1").bind(id).execute(pool).await?;
    Ok(())
}
