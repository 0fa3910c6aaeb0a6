//! API client module
//!
//! Endpoint bindings and the HTTP client for the Porter backend.

pub mod client;
pub mod endpoints;
pub mod path;
pub mod types;

pub use client::ApiClient;
pub use endpoints::{Endpoint, HttpMethod, ENDPOINTS};
pub use path::{NoParams, PathParams, PathSpec};
pub use types::*;
