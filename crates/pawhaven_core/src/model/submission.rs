//! Submitted payload shapes and their validation.
//!
//! # Responsibility
//! - Mirror the logical wire payloads as typed drafts.
//! - Reject drafts with missing required fields before any geofence check or
//!   persistence.
//!
//! # Invariants
//! - A draft that passes `validate()` has every required field non-blank and
//!   a finite coordinate.
//! - Field names follow the wire schema (`type`, `listingId`, `requestId`).

use crate::model::point::GeoPoint;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised by draft validation, before any write.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionValidationError {
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    NonFiniteCoordinate {
        record: &'static str,
        lat: f64,
        lng: f64,
    },
}

impl Display for SubmissionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { record, field } => {
                write!(f, "{record} submission is missing required field `{field}`")
            }
            Self::NonFiniteCoordinate { record, lat, lng } => write!(
                f,
                "{record} submission has a non-numeric coordinate ({lat}, {lng})"
            ),
        }
    }
}

impl Error for SubmissionValidationError {}

/// Draft for a new [`crate::model::records::Listing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub img: Option<String>,
    pub contact: String,
    pub location: GeoPoint,
}

/// Draft for a new [`crate::model::records::AdoptionRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionRequestSubmission {
    pub id: Option<String>,
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub message: String,
    pub contact: String,
    pub location: GeoPoint,
}

/// Draft for a new [`crate::model::records::Pickup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupSubmission {
    pub id: Option<String>,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub date: String,
    pub time: String,
    pub contact: String,
    pub location: GeoPoint,
}

/// Draft for a new [`crate::model::records::FoodRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRequestSubmission {
    pub id: Option<String>,
    pub animal: String,
    pub kind: String,
    pub qty: String,
    pub contact: String,
    pub location: GeoPoint,
}

impl ListingSubmission {
    pub fn validate(&self) -> Result<(), SubmissionValidationError> {
        require("listing", "type", &self.kind)?;
        require("listing", "name", &self.name)?;
        require("listing", "contact", &self.contact)?;
        require_finite("listing", self.location)
    }
}

impl AdoptionRequestSubmission {
    pub fn validate(&self) -> Result<(), SubmissionValidationError> {
        require("adoption request", "listingId", &self.listing_id)?;
        require("adoption request", "message", &self.message)?;
        require("adoption request", "contact", &self.contact)?;
        require_finite("adoption request", self.location)
    }
}

impl PickupSubmission {
    pub fn validate(&self) -> Result<(), SubmissionValidationError> {
        require("pickup", "requestId", &self.request_id)?;
        require("pickup", "date", &self.date)?;
        require("pickup", "time", &self.time)?;
        require("pickup", "contact", &self.contact)?;
        require_finite("pickup", self.location)
    }
}

impl FoodRequestSubmission {
    pub fn validate(&self) -> Result<(), SubmissionValidationError> {
        require("food request", "animal", &self.animal)?;
        require("food request", "kind", &self.kind)?;
        require("food request", "qty", &self.qty)?;
        require("food request", "contact", &self.contact)?;
        require_finite("food request", self.location)
    }
}

fn require(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), SubmissionValidationError> {
    if value.trim().is_empty() {
        return Err(SubmissionValidationError::MissingField { record, field });
    }
    Ok(())
}

fn require_finite(
    record: &'static str,
    location: GeoPoint,
) -> Result<(), SubmissionValidationError> {
    if !location.is_finite() {
        return Err(SubmissionValidationError::NonFiniteCoordinate {
            record,
            lat: location.lat,
            lng: location.lng,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        AdoptionRequestSubmission, ListingSubmission, PickupSubmission,
        SubmissionValidationError,
    };
    use crate::model::point::GeoPoint;

    #[test]
    fn listing_payload_shape_deserializes() {
        let submission: ListingSubmission = serde_json::from_str(
            r#"{
                "type": "dog",
                "name": "Biscuit",
                "contact": "owner@x",
                "location": { "lat": 10.3157, "lng": 123.8854 }
            }"#,
        )
        .unwrap();

        assert!(submission.id.is_none());
        assert_eq!(submission.kind, "dog");
        assert_eq!(submission.desc, "");
        assert!(submission.img.is_none());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn adoption_request_payload_uses_camel_case_listing_id() {
        let submission: AdoptionRequestSubmission = serde_json::from_str(
            r#"{
                "id": "req-1",
                "listingId": "lst-1",
                "message": "I would love to adopt Biscuit",
                "contact": "adopter@y",
                "location": { "lat": 10.2, "lng": 123.8 }
            }"#,
        )
        .unwrap();

        assert_eq!(submission.id.as_deref(), Some("req-1"));
        assert_eq!(submission.listing_id, "lst-1");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn pickup_payload_uses_camel_case_request_id() {
        let submission: PickupSubmission = serde_json::from_str(
            r#"{
                "requestId": "req-1",
                "date": "2025-06-01",
                "time": "14:00",
                "contact": "adopter@y",
                "location": { "lat": 10.2, "lng": 123.8 }
            }"#,
        )
        .unwrap();

        assert_eq!(submission.request_id, "req-1");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let submission = AdoptionRequestSubmission {
            id: None,
            listing_id: "lst-1".to_string(),
            message: "   ".to_string(),
            contact: "adopter@y".to_string(),
            location: GeoPoint::new(10.2, 123.8),
        };

        let err = submission.validate().unwrap_err();
        assert_eq!(
            err,
            SubmissionValidationError::MissingField {
                record: "adoption request",
                field: "message",
            }
        );
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let submission = ListingSubmission {
            id: None,
            kind: "dog".to_string(),
            name: "Biscuit".to_string(),
            desc: String::new(),
            img: None,
            contact: "owner@x".to_string(),
            location: GeoPoint::new(f64::NAN, 123.8),
        };

        let err = submission.validate().unwrap_err();
        assert!(matches!(
            err,
            SubmissionValidationError::NonFiniteCoordinate { record: "listing", .. }
        ));
    }
}
