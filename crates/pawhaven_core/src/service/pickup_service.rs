//! Pickup scheduling use-case.
//!
//! # Responsibility
//! - Gate pickup submissions behind validation and the geofence.
//! - Delegate persistence to the pickup repository.

use crate::model::records::Pickup;
use crate::model::submission::PickupSubmission;
use crate::repo::pickup_repo::PickupRepository;
use crate::repo::RepoResult;
use crate::service::{ensure_in_region, now_epoch_ms, SubmitResult};
use log::info;

/// Use-case service for pickup submission and retrieval.
pub struct PickupService<R: PickupRepository> {
    repo: R,
}

impl<R: PickupRepository> PickupService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, geofences, and persists one pickup submission.
    pub fn submit(&self, submission: PickupSubmission) -> SubmitResult<String> {
        submission.validate()?;
        ensure_in_region("pickup", submission.location)?;

        let pickup = Pickup::from_submission(submission, now_epoch_ms());
        self.repo.insert_pickup(&pickup)?;
        info!(
            "event=pickup_submit module=service status=ok id={}",
            pickup.id
        );
        Ok(pickup.id)
    }

    /// Lists all pickups in store iteration order.
    pub fn list(&self) -> RepoResult<Vec<Pickup>> {
        self.repo.list_pickups()
    }
}
