//! Service Layer - pipeline orchestration

mod census_service;

pub use census_service::{find_category, CensusService, CensusSummary};
