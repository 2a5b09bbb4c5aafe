mod common;

use sqlx::PgPool;
use std::sync::Arc;
use user_manager::domain::entities::NewUser;
use user_manager::domain::repositories::UserRepository;
use user_manager::error::AppError;
use user_manager::infrastructure::persistence::PgUserRepository;

fn make_repo(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(Arc::new(pool))
}

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "secret".to_string(),
        username: username.to_string(),
        phone: Some("010-0000-0000".to_string()),
    }
}

#[sqlx::test]
async fn test_insert_assigns_id_and_timestamps(pool: PgPool) {
    let repo = make_repo(pool);

    let user = repo.insert(new_user("a@x.com", "alice")).await.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.email, "a@x.com");
    // Insert writes both timestamps in the same statement.
    assert_eq!(user.created_at, user.updated_at);
}

#[sqlx::test]
async fn test_insert_duplicate_email_is_conflict(pool: PgPool) {
    let repo = make_repo(pool);

    repo.insert(new_user("dup@x.com", "first")).await.unwrap();

    let result = repo.insert(new_user("dup@x.com", "second")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = make_repo(pool);

    let inserted = repo.insert(new_user("a@x.com", "alice")).await.unwrap();

    let found = repo.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.username, "alice");

    assert!(repo.find_by_id(inserted.id + 1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_email(pool: PgPool) {
    let repo = make_repo(pool);

    repo.insert(new_user("a@x.com", "alice")).await.unwrap();

    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.username, "alice");

    assert!(repo.find_by_email("missing@x.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_all(pool: PgPool) {
    let repo = make_repo(pool);

    repo.insert(new_user("a@x.com", "alice")).await.unwrap();
    repo.insert(new_user("b@x.com", "bob")).await.unwrap();

    let users = repo.find_all().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[sqlx::test]
async fn test_update_refreshes_updated_at_only(pool: PgPool) {
    let repo = make_repo(pool);

    let mut user = repo.insert(new_user("a@x.com", "alice")).await.unwrap();
    let created_at = user.created_at;

    user.replace_profile(NewUser {
        email: "b@x.com".to_string(),
        password: "changed".to_string(),
        username: "bob".to_string(),
        phone: None,
    });

    let updated = repo.update(user).await.unwrap();

    assert_eq!(updated.email, "b@x.com");
    assert_eq!(updated.phone, None);
    // created_at is immutable after first persistence.
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at >= updated.created_at);

    let reread = repo.find_by_id(updated.id).await.unwrap().unwrap();
    assert_eq!(reread.username, "bob");
    assert_eq!(reread.password, "changed");
}

#[sqlx::test]
async fn test_update_vanished_row_is_not_found(pool: PgPool) {
    let repo = make_repo(pool.clone());

    let user = repo.insert(new_user("a@x.com", "alice")).await.unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let result = repo.update(user).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_removes_row(pool: PgPool) {
    let repo = make_repo(pool.clone());

    let user = repo.insert(new_user("a@x.com", "alice")).await.unwrap();
    let id = user.id;

    repo.delete(user.clone()).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert_eq!(common::count_users(&pool).await, 0);

    // Deleting a stale copy reports not-found.
    let result = repo.delete(user).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}
