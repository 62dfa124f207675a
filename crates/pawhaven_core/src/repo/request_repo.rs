//! Adoption request persistence and owner-alert dispatch.
//!
//! # Responsibility
//! - Insert adoption requests together with their conditional owner alert in
//!   one transaction.
//! - List adoption requests.
//!
//! # Invariants
//! - The request insert and the notification insert are atomic: either both
//!   land or neither does.
//! - A missing listing never fails the request; it only skips the alert.

use crate::model::point::GeoPoint;
use crate::model::records::{AdoptionRequest, Notification};
use crate::repo::notification_repo::insert_notification;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

const REQUEST_SELECT_SQL: &str = "SELECT
    id,
    listing_id,
    message,
    contact,
    lat,
    lng,
    created_at
FROM requests";

/// Outcome of the conditional alert write alongside a request insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The referenced listing exists; an unread alert to its owner was
    /// committed with the request.
    Enqueued { recipient: String },
    /// The referenced listing does not exist; the request persisted alone.
    ListingMissing,
}

/// Repository interface for adoption request persistence.
pub trait AdoptionRequestRepository {
    fn insert_request(&mut self, request: &AdoptionRequest) -> RepoResult<NotificationOutcome>;
    fn list_requests(&self) -> RepoResult<Vec<AdoptionRequest>>;
}

/// SQLite-backed adoption request repository.
///
/// Holds a mutable connection borrow: the dual write needs a transaction.
pub struct SqliteRequestRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteRequestRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "requests")?;
        ensure_connection_ready(conn, "notifications")?;
        Ok(Self { conn })
    }
}

impl AdoptionRequestRepository for SqliteRequestRepository<'_> {
    fn insert_request(&mut self, request: &AdoptionRequest) -> RepoResult<NotificationOutcome> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO requests (id, listing_id, message, contact, lat, lng, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                request.id.as_str(),
                request.listing_id.as_str(),
                request.message.as_str(),
                request.contact.as_str(),
                request.location.lat,
                request.location.lng,
                request.created_at,
            ],
        )?;

        let owner = tx
            .query_row(
                "SELECT contact, type, name FROM listings WHERE id = ?1;",
                [request.listing_id.as_str()],
                |row| {
                    Ok((
                        row.get::<_, String>("contact")?,
                        row.get::<_, String>("type")?,
                        row.get::<_, String>("name")?,
                    ))
                },
            )
            .optional()?;

        let outcome = match owner {
            Some((owner_contact, listing_kind, listing_name)) => {
                let alert = Notification::adoption_alert(
                    owner_contact,
                    &listing_kind,
                    &listing_name,
                    &request.contact,
                    request.created_at,
                );
                insert_notification(&tx, &alert)?;
                NotificationOutcome::Enqueued {
                    recipient: alert.user_contact,
                }
            }
            None => NotificationOutcome::ListingMissing,
        };

        tx.commit()?;
        Ok(outcome)
    }

    fn list_requests(&self) -> RepoResult<Vec<AdoptionRequest>> {
        let mut stmt = self.conn.prepare(&format!("{REQUEST_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut requests = Vec::new();
        while let Some(row) = rows.next()? {
            requests.push(parse_request_row(row)?);
        }
        Ok(requests)
    }
}

fn parse_request_row(row: &Row<'_>) -> RepoResult<AdoptionRequest> {
    Ok(AdoptionRequest {
        id: row.get("id")?,
        listing_id: row.get("listing_id")?,
        message: row.get("message")?,
        contact: row.get("contact")?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        created_at: row.get("created_at")?,
    })
}
