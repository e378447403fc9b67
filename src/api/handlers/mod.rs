//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod root;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use urls::{create_short_link_handler, delete_short_link_handler, list_short_links_handler};
