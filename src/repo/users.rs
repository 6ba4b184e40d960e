use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::types::User;

pub async fn insert(pool: &SqlitePool, user: &User) -> AppResult<()> {
    sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES (?1, ?2, ?3, ?4)")
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn email_in_use(pool: &SqlitePool, email: &str) -> AppResult<bool> {
    Ok(find_by_email(pool, email).await?.is_some())
}
