//! Request processing middleware.

pub mod error_translator;
pub mod tracing;
