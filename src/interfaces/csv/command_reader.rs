use crate::domain::payment::PaymentRequest;
use crate::domain::reservation::BookingRequest;
use crate::error::{BookingError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Book,
    Cancel,
    Pay,
}

/// One line of the booking command stream.
///
/// Columns an action does not use are left empty: `book` fills the room and
/// stay columns, `cancel` only carries the reservation id in `id`, and `pay`
/// fills `reservation_id` and `amount`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub action: CommandKind,
    pub id: String,
    pub room_id: Option<String>,
    pub guest_email: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reservation_id: Option<String>,
    pub amount: Option<Decimal>,
}

impl Command {
    pub fn into_booking(self) -> Result<BookingRequest> {
        let start_date = self.start_date.ok_or_else(|| {
            BookingError::ValidationError("start_date is required".to_string())
        })?;
        let end_date = self
            .end_date
            .ok_or_else(|| BookingError::ValidationError("end_date is required".to_string()))?;
        Ok(BookingRequest {
            id: self.id,
            room_id: self.room_id.unwrap_or_default(),
            guest_email: self.guest_email.unwrap_or_default(),
            start_date,
            end_date,
        })
    }

    pub fn into_payment(self) -> Result<PaymentRequest> {
        let amount = self
            .amount
            .ok_or_else(|| BookingError::ValidationError("amount is required".to_string()))?;
        Ok(PaymentRequest {
            id: self.id,
            reservation_id: self.reservation_id.unwrap_or_default(),
            amount,
        })
    }
}

/// Reads booking commands from a CSV source.
///
/// Wraps `csv::Reader` and yields an iterator over `Result<Command>`,
/// trimming whitespace and tolerating records of flexible length so one
/// malformed line never aborts the stream.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BookingError::from))
    }
}
