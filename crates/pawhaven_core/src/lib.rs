//! Core domain logic for PawHaven, a location-gated community coordination
//! service for animal adoption, feeding requests, and pickup scheduling.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod geo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use geo::fence::{haversine_km, in_service_region, SERVICE_RADIUS_KM};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::point::GeoPoint;
pub use model::records::{AdoptionRequest, FoodRequest, Listing, Notification, Pickup};
pub use model::submission::{
    AdoptionRequestSubmission, FoodRequestSubmission, ListingSubmission, PickupSubmission,
    SubmissionValidationError,
};
pub use repo::food_repo::{FoodRequestRepository, SqliteFoodRequestRepository};
pub use repo::listing_repo::{ListingRepository, SqliteListingRepository};
pub use repo::notification_repo::{NotificationRepository, SqliteNotificationRepository};
pub use repo::pickup_repo::{PickupRepository, SqlitePickupRepository};
pub use repo::request_repo::{
    AdoptionRequestRepository, NotificationOutcome, SqliteRequestRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::food_service::FoodRequestService;
pub use service::listing_service::ListingService;
pub use service::notification_service::NotificationService;
pub use service::pickup_service::PickupService;
pub use service::request_service::AdoptionRequestService;
pub use service::{SubmitError, SubmitResult};

/// Human-readable service name.
pub const SERVICE_NAME: &str = "PawHaven Coordination API";

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// One-line service descriptor naming the record surfaces this core exposes.
pub fn service_banner() -> String {
    format!(
        "{SERVICE_NAME} v{} [listings requests pickups food_requests notifications]",
        core_version()
    )
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping, service_banner, SERVICE_NAME};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn banner_names_service_and_surfaces() {
        let banner = service_banner();
        assert!(banner.contains(SERVICE_NAME));
        assert!(banner.contains("notifications"));
    }
}
