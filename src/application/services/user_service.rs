//! User account service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service implementing the five user use cases: list, get, create, update,
/// delete.
///
/// Owns the not-found decisions for id lookups. It does not pre-check email
/// uniqueness — that invariant belongs to the repository, whose conflict
/// signal passes through untouched. Field formats are deliberately not
/// validated at any layer.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {id} not found")))
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<(), AppError> {
        self.repository.insert(new_user).await?;
        Ok(())
    }

    /// Replaces every mutable field of an existing user.
    ///
    /// Full-replace semantics: all four fields from `profile` are written
    /// unconditionally, even when empty or absent. Returns the refreshed user
    /// with the new `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the new email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, profile: NewUser) -> Result<User, AppError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {id} not found")))?;

        user.replace_profile(profile);

        self.repository.update(user).await
    }

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {id} not found")))?;

        self.repository.delete(user).await
    }
}
