//! Listing submission use-case.
//!
//! # Responsibility
//! - Gate listing submissions behind validation and the geofence.
//! - Delegate persistence to the listing repository.

use crate::model::records::Listing;
use crate::model::submission::ListingSubmission;
use crate::repo::listing_repo::ListingRepository;
use crate::repo::RepoResult;
use crate::service::{ensure_in_region, now_epoch_ms, SubmitResult};
use log::info;

/// Use-case service for listing submission and retrieval.
pub struct ListingService<R: ListingRepository> {
    repo: R,
}

impl<R: ListingRepository> ListingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, geofences, and persists one listing submission.
    ///
    /// # Contract
    /// - Returns the assigned listing id.
    /// - On any rejection nothing is written.
    pub fn submit(&self, submission: ListingSubmission) -> SubmitResult<String> {
        submission.validate()?;
        ensure_in_region("listing", submission.location)?;

        let listing = Listing::from_submission(submission, now_epoch_ms());
        self.repo.insert_listing(&listing)?;
        info!(
            "event=listing_submit module=service status=ok id={}",
            listing.id
        );
        Ok(listing.id)
    }

    /// Lists all listings in store iteration order.
    pub fn list(&self) -> RepoResult<Vec<Listing>> {
        self.repo.list_listings()
    }
}
