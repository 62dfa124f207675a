//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft validation, the geofence check, id/timestamp
//!   assignment, and repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Validation failures and geofence rejections happen before any write.
//! - Services hold no shared mutable state; the store handle is the only
//!   shared resource.

use crate::geo::fence::{in_service_region, SERVICE_RADIUS_KM};
use crate::model::point::GeoPoint;
use crate::model::submission::SubmissionValidationError;
use crate::repo::RepoError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod food_service;
pub mod listing_service;
pub mod notification_service;
pub mod pickup_service;
pub mod request_service;

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Rejection or failure raised by a record submission.
#[derive(Debug)]
pub enum SubmitError {
    /// Required field missing or malformed; nothing was written.
    Validation(SubmissionValidationError),
    /// Coordinate outside the service region; nothing was written.
    OutsideServiceRegion { lat: f64, lng: f64 },
    /// Underlying persistence failure; the whole operation failed.
    Store(RepoError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::OutsideServiceRegion { lat, lng } => write!(
                f,
                "location ({lat}, {lng}) is outside the {SERVICE_RADIUS_KM} km service region"
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::OutsideServiceRegion { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SubmissionValidationError> for SubmitError {
    fn from(value: SubmissionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for SubmitError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Rejects coordinates outside the service region before any persistence.
pub(crate) fn ensure_in_region(
    record: &'static str,
    location: GeoPoint,
) -> Result<(), SubmitError> {
    if in_service_region(location.lat, location.lng) {
        return Ok(());
    }
    warn!(
        "event=submission_rejected module=service record={record} error_code=outside_region lat={} lng={}",
        location.lat, location.lng
    );
    Err(SubmitError::OutsideServiceRegion {
        lat: location.lat,
        lng: location.lng,
    })
}

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::{ensure_in_region, now_epoch_ms, SubmitError};
    use crate::model::point::GeoPoint;

    #[test]
    fn region_rejection_message_names_the_constraint() {
        let err = ensure_in_region("listing", GeoPoint::new(14.5995, 120.9842)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("outside"));
        assert!(message.contains("110 km"));
        assert!(matches!(err, SubmitError::OutsideServiceRegion { .. }));
    }

    #[test]
    fn in_region_coordinate_passes() {
        assert!(ensure_in_region("listing", GeoPoint::new(10.3157, 123.8854)).is_ok());
    }

    #[test]
    fn clock_is_past_twenty_twenty() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
