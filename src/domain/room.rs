use crate::domain::reservation::StayRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable room.
///
/// Rooms are reference data: created by the seeding bootstrap and immutable
/// afterwards. The `name` is a unique display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub price_per_night: Decimal,
}

/// A room joined at read time with the date ranges of its active
/// reservations. Derived view, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAvailability {
    pub room: Room,
    /// Active reservation ranges, sorted by check-in date.
    pub booked: Vec<StayRange>,
}
