//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A persisted user account.
///
/// The id is assigned by the database and immutable once set. `created_at` is
/// written exactly once on insert; `updated_at` is refreshed by the storage
/// adapter on every mutation, so `created_at <= updated_at` always holds.
///
/// The password is stored as received — hashing was never part of the upstream
/// contract and is tracked as a known gap, not silently added here.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        email: String,
        password: String,
        username: String,
        phone: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password,
            username,
            phone,
            created_at,
            updated_at,
        }
    }

    /// Overwrites every mutable field from `profile`.
    ///
    /// Update is full-replace, not merge-patch: an absent phone clears the
    /// stored phone, an empty string overwrites a non-empty one. Identity and
    /// timestamps are untouched; the storage adapter refreshes `updated_at`.
    pub fn replace_profile(&mut self, profile: NewUser) {
        self.email = profile.email;
        self.password = profile.password;
        self.username = profile.username;
        self.phone = profile.phone;
    }
}

/// Input data for creating a new user.
///
/// Carries no id or timestamps — those are owned by the persistence lifecycle.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone: Option<String>,
}
