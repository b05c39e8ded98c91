//! Domain layer - Pure business abstractions
//!
//! Record types, repository traits and domain error types. No Axum and no SeaORM
//! entities here; only the `DbErr` conversion and the serde/OpenAPI derives touch
//! outside crates.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
