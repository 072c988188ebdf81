mod common;

use common::{booking, d, engine_with_rooms};
use innkeep::domain::reservation::ReservationStatus;
use innkeep::error::BookingError;

#[tokio::test]
async fn test_booking_creates_active_reservation() {
    let engine = engine_with_rooms(&["r1"]).await;

    let reservation = engine
        .book_room(booking("res1", "r1", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();

    assert_eq!(reservation.status, ReservationStatus::Active);
    assert_eq!(reservation.start_date, d("2025-01-10"));

    // Read-after-write: getById returns the committed row unchanged.
    let fetched = engine.get_reservation("res1").await.unwrap().unwrap();
    assert_eq!(fetched, reservation);
}

#[tokio::test]
async fn test_booking_unknown_room_fails() {
    let engine = engine_with_rooms(&["r1"]).await;

    let result = engine
        .book_room(booking("res1", "ghost", "2025-01-10", "2025-01-15"))
        .await;
    assert!(matches!(result, Err(BookingError::RoomNotFound(_))));
    assert!(engine.get_reservation("res1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_booking_reversed_range_fails_regardless_of_room_state() {
    let engine = engine_with_rooms(&["r1"]).await;

    let result = engine
        .book_room(booking("res1", "r1", "2025-01-15", "2025-01-10"))
        .await;
    assert!(matches!(result, Err(BookingError::ValidationError(_))));

    // Same outcome when the room already holds a reservation.
    engine
        .book_room(booking("res2", "r1", "2025-02-01", "2025-02-05"))
        .await
        .unwrap();
    let result = engine
        .book_room(booking("res3", "r1", "2025-02-05", "2025-02-01"))
        .await;
    assert!(matches!(result, Err(BookingError::ValidationError(_))));
}

#[tokio::test]
async fn test_booking_empty_guest_email_fails() {
    let engine = engine_with_rooms(&["r1"]).await;

    let mut request = booking("res1", "r1", "2025-01-10", "2025-01-15");
    request.guest_email = String::new();

    let result = engine.book_room(request).await;
    assert!(matches!(result, Err(BookingError::ValidationError(_))));
}

#[tokio::test]
async fn test_booking_duplicate_id_fails() {
    let engine = engine_with_rooms(&["r1", "r2"]).await;

    engine
        .book_room(booking("res1", "r1", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();

    // Same id on a different room and range still collides.
    let result = engine
        .book_room(booking("res1", "r2", "2025-03-01", "2025-03-05"))
        .await;
    assert!(matches!(result, Err(BookingError::IdConflict(_))));
}

#[tokio::test]
async fn test_overlap_is_rejected_including_boundary_day() {
    let engine = engine_with_rooms(&["r1"]).await;

    engine
        .book_room(booking("res1", "r1", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();

    // Fully contained range.
    let contained = engine
        .book_room(booking("res2", "r1", "2025-01-11", "2025-01-13"))
        .await;
    assert!(matches!(contained, Err(BookingError::OverlapConflict(_))));

    // Shared boundary day: checkout day == checkin day blocks the booking.
    let boundary = engine
        .book_room(booking("res3", "r1", "2025-01-15", "2025-01-20"))
        .await;
    assert!(matches!(boundary, Err(BookingError::OverlapConflict(_))));

    // One day clear of the boundary is free.
    engine
        .book_room(booking("res4", "r1", "2025-01-16", "2025-01-20"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_overlap_is_scoped_to_the_room() {
    let engine = engine_with_rooms(&["r1", "r2"]).await;

    engine
        .book_room(booking("res1", "r1", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();

    // Identical range on another room books fine.
    engine
        .book_room(booking("res2", "r2", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_active_pair_ever_overlaps() {
    let engine = engine_with_rooms(&["r1"]).await;

    let attempts = [
        ("a", "2025-01-01", "2025-01-05"),
        ("b", "2025-01-05", "2025-01-08"),
        ("c", "2025-01-06", "2025-01-10"),
        ("d", "2025-01-11", "2025-01-12"),
        ("e", "2025-01-03", "2025-01-20"),
    ];
    for (id, start, end) in attempts {
        let _ = engine.book_room(booking(id, "r1", start, end)).await;
    }

    let reservations = engine.list_reservations().await.unwrap();
    let active: Vec<_> = reservations.iter().filter(|r| r.is_active()).collect();
    for (i, left) in active.iter().enumerate() {
        for right in &active[i + 1..] {
            assert!(
                !left.range().overlaps(&right.range()),
                "{} and {} overlap",
                left.id,
                right.id
            );
        }
    }
}
