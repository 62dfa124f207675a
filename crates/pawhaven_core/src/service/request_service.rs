//! Adoption request submission use-case.
//!
//! # Responsibility
//! - Gate adoption request submissions behind validation and the geofence.
//! - Surface the owner-alert dispatch outcome as log events only; a missing
//!   listing is not an error.

use crate::model::records::AdoptionRequest;
use crate::model::submission::AdoptionRequestSubmission;
use crate::repo::request_repo::{AdoptionRequestRepository, NotificationOutcome};
use crate::repo::RepoResult;
use crate::service::{ensure_in_region, now_epoch_ms, SubmitResult};
use log::info;

/// Use-case service for adoption request submission and retrieval.
pub struct AdoptionRequestService<R: AdoptionRequestRepository> {
    repo: R,
}

impl<R: AdoptionRequestRepository> AdoptionRequestService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, geofences, and persists one adoption request.
    ///
    /// # Contract
    /// - Returns the assigned request id.
    /// - When the referenced listing exists, exactly one unread alert to its
    ///   owner commits atomically with the request.
    /// - When the listing is missing, the request still persists and no
    ///   alert is produced.
    /// - On any rejection nothing is written, alert included.
    pub fn submit(&mut self, submission: AdoptionRequestSubmission) -> SubmitResult<String> {
        submission.validate()?;
        ensure_in_region("adoption_request", submission.location)?;

        let request = AdoptionRequest::from_submission(submission, now_epoch_ms());
        let outcome = self.repo.insert_request(&request)?;
        match outcome {
            NotificationOutcome::Enqueued { recipient } => info!(
                "event=notification_enqueued module=service request={} recipient={recipient}",
                request.id
            ),
            NotificationOutcome::ListingMissing => info!(
                "event=notification_skipped module=service request={} listing={} reason=listing_missing",
                request.id, request.listing_id
            ),
        }
        info!(
            "event=adoption_request_submit module=service status=ok id={}",
            request.id
        );
        Ok(request.id)
    }

    /// Lists all adoption requests in store iteration order.
    pub fn list(&self) -> RepoResult<Vec<AdoptionRequest>> {
        self.repo.list_requests()
    }
}
