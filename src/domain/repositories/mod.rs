//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interface (trait) that abstracts data
//! access following the Repository pattern. It is implemented by concrete
//! repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod short_link_repository;

pub use short_link_repository::{ShortLinkRepository, StoreError, StoreResult};

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
