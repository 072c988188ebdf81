use crate::error::{BookingError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive check-in/check-out date range.
///
/// Both bounds occupy their day: a stay ending on a given date still holds
/// the room on that date, so another stay cannot check in on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BookingError::ValidationError(
                "start_date must be on or before end_date".to_string(),
            ))
        }
    }

    /// Inclusive intersection test: `s1 <= e2 && s2 <= e1`.
    ///
    /// Ranges touching on a single shared day count as overlapping.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

/// A stay booked for a room.
///
/// Created `Active` by the booking transaction; transitions to `Cancelled`
/// exactly once and never back. Reservations are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub room_id: String,
    pub guest_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn range(&self) -> StayRange {
        StayRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Caller-supplied draft for a new reservation. The id comes from the
/// caller and must be unique across the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub id: String,
    pub room_id: String,
    pub guest_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingRequest {
    /// Field-level validation. Returns the validated stay range.
    pub fn validate(&self) -> Result<StayRange> {
        if self.id.is_empty() {
            return Err(BookingError::ValidationError("id is required".to_string()));
        }
        if self.room_id.is_empty() {
            return Err(BookingError::ValidationError(
                "room_id is required".to_string(),
            ));
        }
        if self.guest_email.is_empty() {
            return Err(BookingError::ValidationError(
                "guest_email is required".to_string(),
            ));
        }
        StayRange::new(self.start_date, self.end_date)
    }

    pub fn into_reservation(self) -> Reservation {
        Reservation {
            id: self.id,
            room_id: self.room_id,
            guest_email: self.guest_email,
            start_date: self.start_date,
            end_date: self.end_date,
            status: ReservationStatus::Active,
        }
    }
}
