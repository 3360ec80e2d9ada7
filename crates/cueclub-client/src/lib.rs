//! HTTP client for the cueclub session API
//!
//! This crate implements [`cueclub_core::service::SessionService`] on top of
//! the remote billiard-table session API.

pub mod session_client;

pub use session_client::HttpSessionClient;
