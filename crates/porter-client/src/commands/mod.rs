//! Command implementations for the `porter` binary
//!
//! Each command takes an already configured [`ApiClient`](crate::ApiClient),
//! performs its calls and prints the result on stdout.

pub mod auth;
pub mod session;
pub mod user;
