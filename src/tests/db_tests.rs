#[cfg(test)]
mod tests {
    use sqlx::migrate::MigrateDatabase;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    use crate::db;
    use crate::types::new_object_id;

    async fn test_pool() -> (SqlitePool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite:{}", temp_dir.path().join("test.db").display());
        sqlx::Sqlite::create_database(&db_url).await.unwrap();
        // Single connection so per-connection pragmas from init_db stick
        let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();
        (pool, temp_dir)
    }

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_init_db_creates_schema() {
        let (pool, _guard) = test_pool().await;
        db::init_db(&pool).await.unwrap();

        let tables = table_names(&pool).await;
        for expected in ["users", "books", "reviews"] {
            assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let (pool, _guard) = test_pool().await;
        db::init_db(&pool).await.unwrap();
        db::init_db(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_users_email_is_unique() {
        let (pool, _guard) = test_pool().await;
        db::init_db(&pool).await.unwrap();

        let insert = |id: String| {
            let pool = pool.clone();
            async move {
                sqlx::query(
                    "INSERT INTO users (id, name, email, password_hash) VALUES (?1, ?2, ?3, ?4)",
                )
                .bind(id)
                .bind("Someone")
                .bind("dup@example.com")
                .bind("x")
                .execute(&pool)
                .await
            }
        };

        insert(new_object_id()).await.unwrap();
        assert!(insert(new_object_id()).await.is_err());
    }

    #[tokio::test]
    async fn test_books_default_flags() {
        let (pool, _guard) = test_pool().await;
        db::init_db(&pool).await.unwrap();

        let user_id = new_object_id();
        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES (?1, 'U', 'u@example.com', 'x')")
            .bind(&user_id)
            .execute(&pool)
            .await
            .unwrap();

        let book_id = new_object_id();
        sqlx::query(
            "INSERT INTO books (id, title, excerpt, user_id, isbn, category, subcategory, released_at)
             VALUES (?1, 'T', 'E', ?2, '1234567890', 'Fiction', 'Fantasy', '2021-01-01')",
        )
        .bind(&book_id)
        .bind(&user_id)
        .execute(&pool)
        .await
        .unwrap();

        let (reviews, is_deleted, created_at): (i64, bool, String) = sqlx::query_as(
            "SELECT reviews, is_deleted, created_at FROM books WHERE id = ?1",
        )
        .bind(&book_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(reviews, 0);
        assert!(!is_deleted);
        assert!(!created_at.is_empty());
    }

    #[tokio::test]
    async fn test_reviews_require_existing_book() {
        let (pool, _guard) = test_pool().await;
        db::init_db(&pool).await.unwrap();

        // Enforced by the foreign key pragma set in init_db
        let result = sqlx::query(
            "INSERT INTO reviews (id, book_id, reviewed_by, reviewed_at, rating)
             VALUES (?1, ?2, 'Guest', '2021-01-01', 5)",
        )
        .bind(new_object_id())
        .bind(new_object_id())
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
