//! Read-only data access for landmark records.
//! This crate owns the SQL and row mapping for `landmarks` lookups.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbError, DbOptions};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::landmark::{Landmark, LandmarkId};
pub use repo::landmark_repo::{
    LandmarkRepository, RepoError, RepoResult, SqliteLandmarkRepository,
};
pub use service::landmark_service::LandmarkService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
