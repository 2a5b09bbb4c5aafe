//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. Error classification for use cases (not-found decisions) lives
//! here; HTTP status selection does not.

pub mod services;
