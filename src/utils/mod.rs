//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validation`] - HTTP(S) URL checks for incoming requests

pub mod code_generator;
pub mod url_validation;
