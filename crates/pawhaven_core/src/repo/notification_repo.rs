//! Notification persistence and acknowledgment.
//!
//! # Responsibility
//! - Insert owner alerts (only ever inside the adoption request transaction).
//! - List notifications newest-first with an optional recipient filter.
//! - Flip acknowledged notifications to read.
//!
//! # Invariants
//! - Notifications are never deleted; `read` moves `0 -> 1` exactly once and
//!   re-acknowledging is a no-op.
//! - Acknowledgment reports the number of ids requested, not rows matched.

use crate::model::records::Notification;
use crate::repo::{bool_to_int, ensure_connection_ready, int_to_bool, RepoResult};
use rusqlite::{params, Connection, Row};

const NOTIFICATION_SELECT_SQL: &str = "SELECT
    id,
    user_contact,
    message,
    created_at,
    read
FROM notifications";

/// Repository interface for notification queries and acknowledgment.
pub trait NotificationRepository {
    fn list_notifications(&self, recipient: Option<&str>) -> RepoResult<Vec<Notification>>;
    fn mark_read(&self, ids: &[String]) -> RepoResult<usize>;
}

/// SQLite-backed notification repository.
pub struct SqliteNotificationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNotificationRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "notifications")?;
        Ok(Self { conn })
    }
}

impl NotificationRepository for SqliteNotificationRepository<'_> {
    fn list_notifications(&self, recipient: Option<&str>) -> RepoResult<Vec<Notification>> {
        // Ties on created_at break by id so ordering stays deterministic.
        let mut notifications = Vec::new();
        match recipient {
            Some(contact) => {
                let mut stmt = self.conn.prepare(&format!(
                    "{NOTIFICATION_SELECT_SQL}
                     WHERE user_contact = ?1
                     ORDER BY created_at DESC, id ASC;"
                ))?;
                let mut rows = stmt.query([contact])?;
                while let Some(row) = rows.next()? {
                    notifications.push(parse_notification_row(row)?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(&format!(
                    "{NOTIFICATION_SELECT_SQL}
                     ORDER BY created_at DESC, id ASC;"
                ))?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    notifications.push(parse_notification_row(row)?);
                }
            }
        }
        Ok(notifications)
    }

    fn mark_read(&self, ids: &[String]) -> RepoResult<usize> {
        for id in ids {
            self.conn.execute(
                "UPDATE notifications SET read = 1 WHERE id = ?1;",
                [id.as_str()],
            )?;
        }
        // Contract: the count of ids processed, unknown ids included.
        Ok(ids.len())
    }
}

/// Inserts one notification row. Callers are expected to run this inside the
/// adoption request transaction; notifications are never created elsewhere.
pub(crate) fn insert_notification(
    conn: &Connection,
    notification: &Notification,
) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO notifications (id, user_contact, message, created_at, read)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            notification.id.as_str(),
            notification.user_contact.as_str(),
            notification.message.as_str(),
            notification.created_at,
            bool_to_int(notification.read),
        ],
    )?;
    Ok(())
}

fn parse_notification_row(row: &Row<'_>) -> RepoResult<Notification> {
    let read = int_to_bool(row.get("read")?, "notifications.read")?;
    Ok(Notification {
        id: row.get("id")?,
        user_contact: row.get("user_contact")?,
        message: row.get("message")?,
        created_at: row.get("created_at")?,
        read,
    })
}
