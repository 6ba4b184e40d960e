use sqlx::SqlitePool;

/// Creates the schema idempotently. There is no separate migration tool;
/// every statement here is safe to re-run on an existing database.
pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    // Foreign keys are critical - fail if this doesn't work
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;

    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    // users table
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now'))
        )"#,
    )
    .execute(pool)
    .await?;

    // books table. Title/ISBN uniqueness is deliberately NOT a constraint
    // here; handlers pre-check among non-deleted rows instead.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS books (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            excerpt TEXT NOT NULL,
            user_id TEXT NOT NULL,
            isbn TEXT NOT NULL,
            category TEXT NOT NULL,
            subcategory TEXT NOT NULL,
            released_at TEXT NOT NULL,
            reviews INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // reviews table (soft-deleted alongside their book)
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY,
            book_id TEXT NOT NULL,
            reviewed_by TEXT NOT NULL DEFAULT 'Guest',
            reviewed_at TEXT NOT NULL,
            rating INTEGER NOT NULL,
            review TEXT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            FOREIGN KEY(book_id) REFERENCES books(id)
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_books_title", "CREATE INDEX IF NOT EXISTS idx_books_title ON books(title)"),
        ("idx_books_isbn", "CREATE INDEX IF NOT EXISTS idx_books_isbn ON books(isbn)"),
        ("idx_books_user", "CREATE INDEX IF NOT EXISTS idx_books_user ON books(user_id)"),
        (
            "idx_books_deleted_title",
            "CREATE INDEX IF NOT EXISTS idx_books_deleted_title ON books(is_deleted, title COLLATE NOCASE)",
        ),
        ("idx_reviews_book", "CREATE INDEX IF NOT EXISTS idx_reviews_book ON reviews(book_id, is_deleted)"),
        ("idx_users_email", "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)"),
    ];

    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            match &e {
                sqlx::Error::Database(db_err) => {
                    let msg = db_err.message().to_lowercase();
                    if msg.contains("already exists") || msg.contains("duplicate") {
                        tracing::debug!("Index {} already exists, skipping", name);
                    } else {
                        tracing::warn!("Failed to create index {}: {}", name, e);
                    }
                }
                _ => {
                    tracing::warn!("Failed to create index {}: {}", name, e);
                }
            }
        }
    }

    Ok(())
}
