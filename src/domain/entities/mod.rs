//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns. Creation
//! inputs use separate structs ([`NewUser`]) so that "no id assigned yet" is a
//! type, not an `Option`.

pub mod user;

pub use user::{NewUser, User};
