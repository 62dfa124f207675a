//! Listing persistence.
//!
//! # Responsibility
//! - Insert and list adoption listings.
//!
//! # Invariants
//! - Listings are never updated or deleted once written.

use crate::model::point::GeoPoint;
use crate::model::records::Listing;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

const LISTING_SELECT_SQL: &str = "SELECT
    id,
    type,
    name,
    \"desc\",
    img,
    contact,
    lat,
    lng,
    created_at
FROM listings";

/// Repository interface for listing persistence.
pub trait ListingRepository {
    fn insert_listing(&self, listing: &Listing) -> RepoResult<()>;
    fn list_listings(&self) -> RepoResult<Vec<Listing>>;
}

/// SQLite-backed listing repository.
pub struct SqliteListingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListingRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "listings")?;
        Ok(Self { conn })
    }
}

impl ListingRepository for SqliteListingRepository<'_> {
    fn insert_listing(&self, listing: &Listing) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO listings (id, type, name, \"desc\", img, contact, lat, lng, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                listing.id.as_str(),
                listing.kind.as_str(),
                listing.name.as_str(),
                listing.desc.as_str(),
                listing.img.as_deref(),
                listing.contact.as_str(),
                listing.location.lat,
                listing.location.lng,
                listing.created_at,
            ],
        )?;
        Ok(())
    }

    fn list_listings(&self) -> RepoResult<Vec<Listing>> {
        let mut stmt = self.conn.prepare(&format!("{LISTING_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut listings = Vec::new();
        while let Some(row) = rows.next()? {
            listings.push(parse_listing_row(row)?);
        }
        Ok(listings)
    }
}

fn parse_listing_row(row: &Row<'_>) -> RepoResult<Listing> {
    Ok(Listing {
        id: row.get("id")?,
        kind: row.get("type")?,
        name: row.get("name")?,
        desc: row.get("desc")?,
        img: row.get("img")?,
        contact: row.get("contact")?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        created_at: row.get("created_at")?,
    })
}
