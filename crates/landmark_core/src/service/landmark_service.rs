//! Landmark use-case service.
//!
//! # Responsibility
//! - Provide stable lookup entry points for core callers.
//! - Delegate every query to a repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass the repository error contract.
//! - Service layer remains storage-agnostic.

use crate::model::landmark::{Landmark, LandmarkId};
use crate::repo::landmark_repo::{LandmarkRepository, RepoResult};

/// Use-case service wrapper for landmark lookups.
pub struct LandmarkService<R: LandmarkRepository> {
    repo: R,
}

impl<R: LandmarkRepository> LandmarkService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one landmark by primary key.
    pub fn get_landmark(&self, id: LandmarkId) -> RepoResult<Option<Landmark>> {
        self.repo.get_by_id(id)
    }

    /// Lists every stored landmark.
    pub fn list_landmarks(&self) -> RepoResult<Vec<Landmark>> {
        self.repo.get_all()
    }

    pub fn landmarks_in_city(&self, city: &str) -> RepoResult<Vec<Landmark>> {
        self.repo.get_by_city(city)
    }

    pub fn landmarks_by_venue_type(&self, venue_type: &str) -> RepoResult<Vec<Landmark>> {
        self.repo.get_by_venue_type(venue_type)
    }

    /// Lists landmarks available on `day_of_week`.
    ///
    /// Returned unchanged from the repository, so a landmark with several
    /// availability rows on that day appears several times.
    pub fn landmarks_open_on(&self, day_of_week: &str) -> RepoResult<Vec<Landmark>> {
        self.repo.get_by_day_of_week(day_of_week)
    }
}
