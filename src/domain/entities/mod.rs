//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the expiration predicate lives on
//! [`ShortLink`] so every layer agrees on what "expired" means.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - [`ShortLink`] - A stored record with server-assigned `id` and `created_at`
//! - [`NewShortLink`] - Input for creating a record

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
