//! Domain layer containing business entities and repository contracts.
//!
//! This layer has no dependencies on infrastructure or presentation layers.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
