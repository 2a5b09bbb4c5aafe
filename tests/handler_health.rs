mod common;

use axum_test::TestServer;
use sqlx::PgPool;
use user_manager::routes::app_router;

#[sqlx::test]
async fn test_health_ok(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body.get("version").is_some());
}
