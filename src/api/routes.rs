//! User API route configuration.
//!
//! Every route here is wrapped by the error translator in
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// The five user CRUD routes.
///
/// # Endpoints
///
/// - `GET    /users`       - List all users
/// - `POST   /users`       - Register a user
/// - `GET    /users/{id}`  - Retrieve a user
/// - `PUT    /users/{id}`  - Replace a user's profile
/// - `DELETE /users/{id}`  - Remove a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
