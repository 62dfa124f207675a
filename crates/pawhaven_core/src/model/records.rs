//! Persisted record types.
//!
//! # Responsibility
//! - Define the five stored record shapes as explicit typed structs.
//! - Own id assignment and the adoption-alert message composition.
//!
//! # Invariants
//! - `id` is an opaque unique string, stable for the record's lifetime.
//! - `created_at` is epoch milliseconds assigned by the workflow, never by
//!   the caller.
//! - Records are never mutated after creation, except `Notification::read`
//!   which flips to `true` exactly once.

use crate::model::point::GeoPoint;
use crate::model::submission::{
    AdoptionRequestSubmission, FoodRequestSubmission, ListingSubmission, PickupSubmission,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An offer record: an animal available for adoption, with an owner contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    /// Category tag (species/kind). Serialized as `type` to match the wire
    /// schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub desc: String,
    pub img: Option<String>,
    pub contact: String,
    pub location: GeoPoint,
    pub created_at: i64,
}

/// An expression of interest in a listing, from a requester.
///
/// `listing_id` is a soft reference: the listing may be created after the
/// request, or never.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionRequest {
    pub id: String,
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub message: String,
    pub contact: String,
    pub location: GeoPoint,
    pub created_at: i64,
}

/// A scheduled handover for an adoption request. `request_id` is unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub date: String,
    pub time: String,
    pub contact: String,
    pub location: GeoPoint,
    pub created_at: i64,
}

/// A feeding-supplies request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRequest {
    pub id: String,
    pub animal: String,
    pub kind: String,
    /// Free-form quantity descriptor.
    pub qty: String,
    pub contact: String,
    pub location: GeoPoint,
    pub created_at: i64,
}

/// A poll-delivered message to a contact, produced as a side effect of
/// adoption request creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_contact: String,
    pub message: String,
    pub created_at: i64,
    pub read: bool,
}

/// Generates a fresh opaque record id (hyphen-less UUIDv4 hex).
pub fn generate_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Resolves the id for a new record: a caller-supplied non-empty id wins,
/// anything else gets a generated one.
pub fn assign_record_id(supplied: Option<String>) -> String {
    match supplied {
        Some(id) if !id.is_empty() => id,
        _ => generate_record_id(),
    }
}

impl Listing {
    /// Builds the persisted record from a validated submission.
    pub fn from_submission(submission: ListingSubmission, created_at: i64) -> Self {
        Self {
            id: assign_record_id(submission.id),
            kind: submission.kind,
            name: submission.name,
            desc: submission.desc,
            img: submission.img,
            contact: submission.contact,
            location: submission.location,
            created_at,
        }
    }
}

impl AdoptionRequest {
    /// Builds the persisted record from a validated submission.
    pub fn from_submission(submission: AdoptionRequestSubmission, created_at: i64) -> Self {
        Self {
            id: assign_record_id(submission.id),
            listing_id: submission.listing_id,
            message: submission.message,
            contact: submission.contact,
            location: submission.location,
            created_at,
        }
    }
}

impl Pickup {
    /// Builds the persisted record from a validated submission.
    pub fn from_submission(submission: PickupSubmission, created_at: i64) -> Self {
        Self {
            id: assign_record_id(submission.id),
            request_id: submission.request_id,
            date: submission.date,
            time: submission.time,
            contact: submission.contact,
            location: submission.location,
            created_at,
        }
    }
}

impl FoodRequest {
    /// Builds the persisted record from a validated submission.
    pub fn from_submission(submission: FoodRequestSubmission, created_at: i64) -> Self {
        Self {
            id: assign_record_id(submission.id),
            animal: submission.animal,
            kind: submission.kind,
            qty: submission.qty,
            contact: submission.contact,
            location: submission.location,
            created_at,
        }
    }
}

impl Notification {
    /// Composes the unread alert sent to a listing owner when an adoption
    /// request targets their listing.
    pub fn adoption_alert(
        owner_contact: impl Into<String>,
        listing_kind: &str,
        listing_name: &str,
        requester_contact: &str,
        created_at: i64,
    ) -> Self {
        Self {
            id: generate_record_id(),
            user_contact: owner_contact.into(),
            message: format!(
                "New adoption request for {listing_kind} \u{2022} {listing_name} from {requester_contact}"
            ),
            created_at,
            read: false,
        }
    }
}
