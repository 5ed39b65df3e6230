//! Stream-Census: viewer inequality sampling
//!
//! Authenticates against the platform API, takes the first page of live
//! streams in one category, measures how unevenly viewers are spread across
//! them and appends one CSV line per run.
//!
//! ## Architecture
//!
//! ```text
//! CensusConfig ──→ HelixClient::connect ──→ HelixSession (token, Client-Id)
//!                        │
//!                        ↓  implements StreamDirectory
//!                  CensusService::run
//!                        │  search/categories → exact name match
//!                        │  streams?type=live  → viewer counts (descending)
//!                        │  ascending_from_descending → gini
//!                        ↓
//!                  CensusSummary ──→ CensusRecord::append_to(<OUTPUT>)
//! ```
//!
//! Every step either succeeds or aborts the run; nothing is written unless
//! the whole pipeline succeeds.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ports;
pub mod record;
pub mod runner;
pub mod service;

pub use api::HelixClient;
pub use auth::HelixSession;
pub use config::{CensusConfig, TARGET_CATEGORY};
pub use error::{CensusError, ConfigError};
pub use ports::StreamDirectory;
pub use record::CensusRecord;
pub use runner::run_census;
pub use service::{CensusService, CensusSummary};
