use crate::domain::ports::RoomStore;
use crate::domain::room::Room;
use crate::error::Result;
use rust_decimal_macros::dec;
use tracing::debug;

/// The three rooms every fresh deployment starts with.
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "7c79f442-fde0-4ef2-9eeb-0dffe92b3a0e".to_string(),
            name: "room1".to_string(),
            price_per_night: dec!(80.0),
        },
        Room {
            id: "df2a67e2-cd30-42de-b3be-ee3d4fc24652".to_string(),
            name: "room2".to_string(),
            price_per_night: dec!(90.0),
        },
        Room {
            id: "e4ec572e-fc15-44a8-bde5-8e692acf9279".to_string(),
            name: "room3".to_string(),
            price_per_night: dec!(100.0),
        },
    ]
}

/// Inserts the seed rooms on first start. A registry that already holds
/// rooms is left untouched, so re-running against the same store is
/// idempotent.
pub async fn seed_initial_rooms(store: &dyn RoomStore) -> Result<()> {
    if !store.all().await?.is_empty() {
        return Ok(());
    }
    for room in seed_rooms() {
        debug!(id = %room.id, name = %room.name, "seeding room");
        store.insert(room).await?;
    }
    Ok(())
}
