use chrono::NaiveDate;
use innkeep::application::engine::BookingEngine;
use innkeep::domain::ports::RoomStore;
use innkeep::domain::reservation::BookingRequest;
use innkeep::domain::room::Room;
use innkeep::infrastructure::in_memory::{
    InMemoryPaymentStore, InMemoryReservationStore, InMemoryRoomStore,
};
use rust_decimal_macros::dec;

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn booking(id: &str, room_id: &str, start: &str, end: &str) -> BookingRequest {
    BookingRequest {
        id: id.to_string(),
        room_id: room_id.to_string(),
        guest_email: format!("{id}@example.com"),
        start_date: d(start),
        end_date: d(end),
    }
}

/// Engine over in-memory stores with one room per given id, priced 80.00.
pub async fn engine_with_rooms(room_ids: &[&str]) -> BookingEngine {
    let rooms = InMemoryRoomStore::new();
    for room_id in room_ids {
        rooms
            .insert(Room {
                id: room_id.to_string(),
                name: format!("{room_id}-standard"),
                price_per_night: dec!(80.00),
            })
            .await
            .unwrap();
    }
    BookingEngine::new(
        Box::new(rooms),
        Box::new(InMemoryReservationStore::new()),
        Box::new(InMemoryPaymentStore::new()),
    )
}
