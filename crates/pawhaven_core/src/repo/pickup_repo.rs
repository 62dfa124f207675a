//! Pickup persistence.
//!
//! # Responsibility
//! - Insert and list scheduled pickups.
//!
//! # Invariants
//! - Pickups are never updated or deleted once written.
//! - `request_id` is stored as given; it is not validated against `requests`.

use crate::model::point::GeoPoint;
use crate::model::records::Pickup;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

const PICKUP_SELECT_SQL: &str = "SELECT
    id,
    request_id,
    date,
    time,
    contact,
    lat,
    lng,
    created_at
FROM pickups";

/// Repository interface for pickup persistence.
pub trait PickupRepository {
    fn insert_pickup(&self, pickup: &Pickup) -> RepoResult<()>;
    fn list_pickups(&self) -> RepoResult<Vec<Pickup>>;
}

/// SQLite-backed pickup repository.
pub struct SqlitePickupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePickupRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "pickups")?;
        Ok(Self { conn })
    }
}

impl PickupRepository for SqlitePickupRepository<'_> {
    fn insert_pickup(&self, pickup: &Pickup) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO pickups (id, request_id, date, time, contact, lat, lng, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                pickup.id.as_str(),
                pickup.request_id.as_str(),
                pickup.date.as_str(),
                pickup.time.as_str(),
                pickup.contact.as_str(),
                pickup.location.lat,
                pickup.location.lng,
                pickup.created_at,
            ],
        )?;
        Ok(())
    }

    fn list_pickups(&self) -> RepoResult<Vec<Pickup>> {
        let mut stmt = self.conn.prepare(&format!("{PICKUP_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut pickups = Vec::new();
        while let Some(row) = rows.next()? {
            pickups.push(parse_pickup_row(row)?);
        }
        Ok(pickups)
    }
}

fn parse_pickup_row(row: &Row<'_>) -> RepoResult<Pickup> {
    Ok(Pickup {
        id: row.get("id")?,
        request_id: row.get("request_id")?,
        date: row.get("date")?,
        time: row.get("time")?,
        contact: row.get("contact")?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        created_at: row.get("created_at")?,
    })
}
