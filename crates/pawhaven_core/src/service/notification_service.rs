//! Notification query and acknowledgment use-case.
//!
//! # Responsibility
//! - List owner alerts newest-first, optionally filtered to one recipient.
//! - Acknowledge a batch of alerts.
//!
//! # Invariants
//! - Listing is read-only and always succeeds (possibly empty).
//! - Acknowledgment reports the number of ids requested; unknown ids are
//!   silently ignored and re-acknowledging a read alert is a no-op.

use crate::model::records::Notification;
use crate::repo::notification_repo::NotificationRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service for notification delivery and acknowledgment.
pub struct NotificationService<R: NotificationRepository> {
    repo: R,
}

impl<R: NotificationRepository> NotificationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists notifications newest-first; `recipient` filters by exact
    /// `user_contact` match.
    pub fn list_for(&self, recipient: Option<&str>) -> RepoResult<Vec<Notification>> {
        self.repo.list_notifications(recipient)
    }

    /// Marks the given notification ids as read.
    ///
    /// # Contract
    /// - Returns the number of ids requested, whether or not each existed.
    pub fn acknowledge(&self, ids: &[String]) -> RepoResult<usize> {
        let requested = self.repo.mark_read(ids)?;
        info!("event=notifications_ack module=service status=ok requested={requested}");
        Ok(requested)
    }
}
