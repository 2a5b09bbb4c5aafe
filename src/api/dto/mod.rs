//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Conversions to
//! and from domain entities live next to the DTOs they belong to.

pub mod health;
pub mod user;

pub use user::{CreateUserRequest, UserView};
