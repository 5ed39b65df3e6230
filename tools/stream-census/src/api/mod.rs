//! API client module for the platform's Helix endpoints.
//!
//! Plain REST over HTTPS with bearer authentication.

mod client;
mod types;

pub use client::{decode_body, error_message, http_client, HelixClient, USER_AGENT};
pub use types::*;
