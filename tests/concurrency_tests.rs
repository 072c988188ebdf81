mod common;

use common::{booking, engine_with_rooms};
use innkeep::domain::payment::PaymentRequest;
use innkeep::error::BookingError;
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_overlapping_bookings_single_winner() {
    let engine = Arc::new(engine_with_rooms(&["r1"]).await);

    // Mutually overlapping ranges: every pair shares at least one day, and
    // each request is individually valid.
    let ranges = [
        ("2025-03-01", "2025-03-10"),
        ("2025-03-05", "2025-03-12"),
        ("2025-03-08", "2025-03-15"),
        ("2025-03-02", "2025-03-09"),
        ("2025-03-07", "2025-03-08"),
        ("2025-03-06", "2025-03-20"),
        ("2025-03-03", "2025-03-11"),
        ("2025-03-08", "2025-03-08"),
    ];

    let mut handles = Vec::new();
    for (i, (start, end)) in ranges.into_iter().enumerate() {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            engine
                .book_room(booking(&format!("res-{i}"), "r1", start, end))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(BookingError::OverlapConflict(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1, "exactly one overlapping booking may win");

    // The surviving ledger state honors the invariant.
    let reservations = engine.list_reservations().await.unwrap();
    assert_eq!(reservations.iter().filter(|r| r.is_active()).count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_disjoint_bookings_all_win() {
    let engine = Arc::new(engine_with_rooms(&["r1"]).await);

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let engine = engine.clone();
        // Day-wide stays with a one-day gap between neighbors.
        let day = 1 + i * 2;
        handles.push(tokio::spawn(async move {
            let date = format!("2025-04-{day:02}");
            engine
                .book_room(booking(&format!("res-{i}"), "r1", &date, &date))
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    let reservations = engine.list_reservations().await.unwrap();
    assert_eq!(reservations.len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_payments_single_winner() {
    let engine = Arc::new(engine_with_rooms(&["r1"]).await);
    engine
        .book_room(booking("res1", "r1", "2025-01-10", "2025-01-15"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            engine
                .record_payment(PaymentRequest {
                    id: format!("pay-{i}"),
                    reservation_id: "res1".to_string(),
                    amount: dec!(400.00),
                })
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(BookingError::PaymentAlreadyExists(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(engine.list_payments().await.unwrap().len(), 1);
}
