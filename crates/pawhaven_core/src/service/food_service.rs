//! Food request use-case.
//!
//! # Responsibility
//! - Gate feeding-supplies submissions behind validation and the geofence.
//! - Delegate persistence to the food request repository.

use crate::model::records::FoodRequest;
use crate::model::submission::FoodRequestSubmission;
use crate::repo::food_repo::FoodRequestRepository;
use crate::repo::RepoResult;
use crate::service::{ensure_in_region, now_epoch_ms, SubmitResult};
use log::info;

/// Use-case service for food request submission and retrieval.
pub struct FoodRequestService<R: FoodRequestRepository> {
    repo: R,
}

impl<R: FoodRequestRepository> FoodRequestService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates, geofences, and persists one food request submission.
    pub fn submit(&self, submission: FoodRequestSubmission) -> SubmitResult<String> {
        submission.validate()?;
        ensure_in_region("food_request", submission.location)?;

        let food_request = FoodRequest::from_submission(submission, now_epoch_ms());
        self.repo.insert_food_request(&food_request)?;
        info!(
            "event=food_request_submit module=service status=ok id={}",
            food_request.id
        );
        Ok(food_request.id)
    }

    /// Lists all food requests in store iteration order.
    pub fn list(&self) -> RepoResult<Vec<FoodRequest>> {
        self.repo.list_food_requests()
    }
}
