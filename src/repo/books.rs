use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::types::{Book, BookSummary};

pub async fn insert(pool: &SqlitePool, book: &Book) -> AppResult<()> {
    sqlx::query(
        r#"INSERT INTO books (id, title, excerpt, user_id, isbn, category, subcategory, released_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#,
    )
    .bind(&book.id)
    .bind(&book.title)
    .bind(&book.excerpt)
    .bind(&book.user_id)
    .bind(&book.isbn)
    .bind(&book.category)
    .bind(&book.subcategory)
    .bind(&book.released_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetches a book regardless of its delete flag. Update/delete handlers
/// need the row to tell "never existed" from "already soft-deleted".
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<Book>> {
    let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(book)
}

pub async fn find_active_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<Book>> {
    let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?1 AND is_deleted = 0")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(book)
}

/// Title uniqueness pre-check among non-deleted books.
///
/// Read-then-write with no atomic guard: two concurrent creations with the
/// same title can both pass this check. Inherited behavior, kept as-is.
pub async fn title_in_use(pool: &SqlitePool, title: &str) -> AppResult<bool> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT id FROM books WHERE title = ?1 AND is_deleted = 0 LIMIT 1")
            .bind(title)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// ISBN uniqueness pre-check; same caveat as [`title_in_use`].
pub async fn isbn_in_use(pool: &SqlitePool, isbn: &str) -> AppResult<bool> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT id FROM books WHERE isbn = ?1 AND is_deleted = 0 LIMIT 1")
            .bind(isbn)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Columns clients may filter the list on. `is_deleted` is excluded: the
/// non-deleted constraint is always applied and cannot be overridden.
const FILTER_COLUMNS: &[&str] = &[
    "id",
    "title",
    "excerpt",
    "user_id",
    "isbn",
    "category",
    "subcategory",
    "released_at",
    "reviews",
];

/// Non-deleted books matching every query parameter as an equality filter,
/// sorted case-insensitively by title.
///
/// A key that is not a book column can never match a row, so it short-
/// circuits to an empty result. Column names come from the whitelist above,
/// never from client input.
pub async fn list(
    pool: &SqlitePool,
    filters: &HashMap<String, String>,
) -> AppResult<Vec<BookSummary>> {
    let mut sql = String::from(
        "SELECT id, title, excerpt, user_id, category, released_at, reviews \
         FROM books WHERE is_deleted = 0",
    );
    let mut binds: Vec<&str> = Vec::new();
    for (key, value) in filters {
        if !FILTER_COLUMNS.contains(&key.as_str()) {
            return Ok(Vec::new());
        }
        binds.push(value);
        sql.push_str(&format!(" AND {} = ?{}", key, binds.len()));
    }
    sql.push_str(" ORDER BY title COLLATE NOCASE ASC");

    let mut qx = sqlx::query_as::<_, BookSummary>(&sql);
    for value in binds {
        qx = qx.bind(value);
    }

    let books = qx.fetch_all(pool).await?;
    Ok(books)
}

/// Applies a partial update. Only provided fields are written; callers have
/// already validated them and re-checked title/ISBN uniqueness.
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    title: Option<&str>,
    excerpt: Option<&str>,
    isbn: Option<&str>,
    released_at: Option<&str>,
) -> AppResult<Option<Book>> {
    let mut sets: Vec<String> = Vec::new();
    let mut idx = 1;
    for (column, value) in
        [("title", title), ("excerpt", excerpt), ("isbn", isbn), ("released_at", released_at)]
    {
        if value.is_some() {
            sets.push(format!("{} = ?{}", column, idx));
            idx += 1;
        }
    }
    if sets.is_empty() {
        return find_by_id(pool, id).await;
    }
    sets.push("updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now')".to_string());

    let sql = format!("UPDATE books SET {} WHERE id = ?{}", sets.join(", "), idx);
    let mut qx = sqlx::query(&sql);
    for value in [title, excerpt, isbn, released_at].into_iter().flatten() {
        qx = qx.bind(value);
    }
    qx = qx.bind(id);
    qx.execute(pool).await?;

    find_by_id(pool, id).await
}

pub async fn soft_delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    sqlx::query(
        r#"UPDATE books SET is_deleted = 1, deleted_at = strftime('%Y-%m-%dT%H:%M:%SZ','now'),
           updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now') WHERE id = ?1"#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Adjusts the denormalized review counter (delta is +1 or -1).
pub async fn bump_review_count(pool: &SqlitePool, id: &str, delta: i64) -> AppResult<()> {
    sqlx::query("UPDATE books SET reviews = MAX(reviews + ?1, 0) WHERE id = ?2")
        .bind(delta)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
