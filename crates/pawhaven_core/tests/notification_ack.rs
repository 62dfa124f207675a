use pawhaven_core::db::open_db_in_memory;
use pawhaven_core::{
    AdoptionRequestService, AdoptionRequestSubmission, GeoPoint, ListingService,
    ListingSubmission, Notification, NotificationService, SqliteListingRepository,
    SqliteNotificationRepository, SqliteRequestRepository,
};
use rusqlite::{params, Connection};

fn cebu_point() -> GeoPoint {
    GeoPoint::new(10.3157, 123.8854)
}

fn seed_listing(conn: &Connection, contact: &str, name: &str) -> String {
    let service = ListingService::new(SqliteListingRepository::try_new(conn).unwrap());
    service
        .submit(ListingSubmission {
            id: None,
            kind: "dog".to_string(),
            name: name.to_string(),
            desc: String::new(),
            img: None,
            contact: contact.to_string(),
            location: cebu_point(),
        })
        .unwrap()
}

fn seed_request(conn: &mut Connection, listing_id: &str, contact: &str) {
    let mut service =
        AdoptionRequestService::new(SqliteRequestRepository::try_new(conn).unwrap());
    service
        .submit(AdoptionRequestSubmission {
            id: None,
            listing_id: listing_id.to_string(),
            message: "interested".to_string(),
            contact: contact.to_string(),
            location: cebu_point(),
        })
        .unwrap();
}

fn list_notifications(conn: &Connection, recipient: Option<&str>) -> Vec<Notification> {
    let service =
        NotificationService::new(SqliteNotificationRepository::try_new(conn).unwrap());
    service.list_for(recipient).unwrap()
}

fn set_created_at(conn: &Connection, id: &str, created_at: i64) {
    conn.execute(
        "UPDATE notifications SET created_at = ?1 WHERE id = ?2;",
        params![created_at, id],
    )
    .unwrap();
}

#[test]
fn list_filters_by_recipient_exactly() {
    let mut conn = open_db_in_memory().unwrap();
    let first = seed_listing(&conn, "ana@x", "Biscuit");
    let second = seed_listing(&conn, "ben@x", "Mittens");
    seed_request(&mut conn, &first, "adopter@y");
    seed_request(&mut conn, &second, "adopter@y");

    let all = list_notifications(&conn, None);
    assert_eq!(all.len(), 2);

    let for_ana = list_notifications(&conn, Some("ana@x"));
    assert_eq!(for_ana.len(), 1);
    assert_eq!(for_ana[0].user_contact, "ana@x");

    // Exact match only; a prefix of a known contact matches nothing.
    assert!(list_notifications(&conn, Some("ana")).is_empty());
}

#[test]
fn list_orders_newest_first() {
    let mut conn = open_db_in_memory().unwrap();
    let listing_id = seed_listing(&conn, "ana@x", "Biscuit");
    seed_request(&mut conn, &listing_id, "first@y");
    seed_request(&mut conn, &listing_id, "second@y");
    seed_request(&mut conn, &listing_id, "third@y");

    for alert in list_notifications(&conn, None) {
        let stamp = if alert.message.contains("first@y") {
            1_000
        } else if alert.message.contains("second@y") {
            3_000
        } else {
            2_000
        };
        set_created_at(&conn, &alert.id, stamp);
    }

    let ordered = list_notifications(&conn, None);
    assert_eq!(ordered.len(), 3);
    assert!(ordered[0].message.contains("second@y"));
    assert!(ordered[1].message.contains("third@y"));
    assert!(ordered[2].message.contains("first@y"));

    let filtered = list_notifications(&conn, Some("ana@x"));
    assert_eq!(filtered.len(), 3);
    assert!(filtered[0].message.contains("second@y"));
}

#[test]
fn acknowledge_counts_requested_ids_not_matched_rows() {
    let mut conn = open_db_in_memory().unwrap();
    let listing_id = seed_listing(&conn, "ana@x", "Biscuit");
    seed_request(&mut conn, &listing_id, "first@y");
    seed_request(&mut conn, &listing_id, "second@y");

    let alerts = list_notifications(&conn, None);
    assert_eq!(alerts.len(), 2);
    let target = alerts[0].id.clone();
    let untouched = alerts[1].id.clone();

    let service =
        NotificationService::new(SqliteNotificationRepository::try_new(&conn).unwrap());
    let ids = vec![target.clone(), "no-such-id".to_string()];
    let requested = service.acknowledge(&ids).unwrap();
    // The count credits every requested id, unknown ones included.
    assert_eq!(requested, 2);

    let after = list_notifications(&conn, None);
    let read_state = |id: &str| after.iter().find(|alert| alert.id == id).unwrap().read;
    assert!(read_state(&target));
    assert!(!read_state(&untouched));
}

#[test]
fn acknowledging_an_already_read_notification_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();
    let listing_id = seed_listing(&conn, "ana@x", "Biscuit");
    seed_request(&mut conn, &listing_id, "adopter@y");

    let target = list_notifications(&conn, None)[0].id.clone();
    let service =
        NotificationService::new(SqliteNotificationRepository::try_new(&conn).unwrap());

    let ids = vec![target.clone()];
    assert_eq!(service.acknowledge(&ids).unwrap(), 1);
    assert_eq!(service.acknowledge(&ids).unwrap(), 1);

    let after = list_notifications(&conn, None);
    assert_eq!(after.len(), 1);
    assert!(after[0].read);
}

#[test]
fn acknowledge_with_no_ids_reports_zero() {
    let conn = open_db_in_memory().unwrap();
    let service =
        NotificationService::new(SqliteNotificationRepository::try_new(&conn).unwrap());
    assert_eq!(service.acknowledge(&[]).unwrap(), 0);
}
