//! Domain layer containing business entities and contracts.
//!
//! This module defines the entities, repository interfaces, and time source the
//! shortening logic is written against, independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Injectable time source
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod clock;
pub mod entities;
pub mod repositories;
