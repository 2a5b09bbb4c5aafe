//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::PgUserRepository;

/// Application state cloned into every handler.
///
/// Wiring is explicit constructor injection: the service holds the repository
/// it was built with, no container involved.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds the state from a connection pool, wiring repository and service.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let user_service = Arc::new(UserService::new(user_repository));

        Self {
            user_service,
            db: pool,
        }
    }
}
