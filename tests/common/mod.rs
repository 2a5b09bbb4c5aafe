#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_manager::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_user(pool: &PgPool, email: &str, username: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (email, password, username, phone)
        VALUES ($1, 'secret', $2, NULL)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
