//! Food request persistence.
//!
//! # Responsibility
//! - Insert and list feeding-supplies requests.
//!
//! # Invariants
//! - Food requests are never updated or deleted once written.

use crate::model::point::GeoPoint;
use crate::model::records::FoodRequest;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

const FOOD_REQUEST_SELECT_SQL: &str = "SELECT
    id,
    animal,
    kind,
    qty,
    contact,
    lat,
    lng,
    created_at
FROM food_requests";

/// Repository interface for food request persistence.
pub trait FoodRequestRepository {
    fn insert_food_request(&self, food_request: &FoodRequest) -> RepoResult<()>;
    fn list_food_requests(&self) -> RepoResult<Vec<FoodRequest>>;
}

/// SQLite-backed food request repository.
pub struct SqliteFoodRequestRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFoodRequestRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "food_requests")?;
        Ok(Self { conn })
    }
}

impl FoodRequestRepository for SqliteFoodRequestRepository<'_> {
    fn insert_food_request(&self, food_request: &FoodRequest) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO food_requests (id, animal, kind, qty, contact, lat, lng, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                food_request.id.as_str(),
                food_request.animal.as_str(),
                food_request.kind.as_str(),
                food_request.qty.as_str(),
                food_request.contact.as_str(),
                food_request.location.lat,
                food_request.location.lng,
                food_request.created_at,
            ],
        )?;
        Ok(())
    }

    fn list_food_requests(&self) -> RepoResult<Vec<FoodRequest>> {
        let mut stmt = self.conn.prepare(&format!("{FOOD_REQUEST_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut food_requests = Vec::new();
        while let Some(row) = rows.next()? {
            food_requests.push(parse_food_request_row(row)?);
        }
        Ok(food_requests)
    }
}

fn parse_food_request_row(row: &Row<'_>) -> RepoResult<FoodRequest> {
    Ok(FoodRequest {
        id: row.get("id")?,
        animal: row.get("animal")?,
        kind: row.get("kind")?,
        qty: row.get("qty")?,
        contact: row.get("contact")?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        created_at: row.get("created_at")?,
    })
}
