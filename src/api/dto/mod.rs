//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Successful responses share the [`ApiResponse`]
//! envelope.

pub mod health;
pub mod short_link;

pub use short_link::{ApiResponse, CreateShortLinkRequest, ShortLinkData};
