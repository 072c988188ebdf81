use crate::error::{BookingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A positive monetary amount.
///
/// Wrapper around `rust_decimal::Decimal` so a recorded charge can never
/// carry a zero or negative value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BookingError::ValidationError(
                "amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BookingError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A charge recorded against a reservation.
///
/// Bookkeeping only: nothing is settled externally. At most one payment may
/// exist per reservation, and only while that reservation is active.
/// Immutable and never deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub reservation_id: String,
    pub amount: Amount,
}

/// Caller-supplied draft for a new payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub id: String,
    pub reservation_id: String,
    pub amount: Decimal,
}

impl PaymentRequest {
    /// Field-level validation. Returns the validated amount.
    pub fn validate(&self) -> Result<Amount> {
        if self.id.is_empty() {
            return Err(BookingError::ValidationError("id is required".to_string()));
        }
        if self.reservation_id.is_empty() {
            return Err(BookingError::ValidationError(
                "reservation_id is required".to_string(),
            ));
        }
        Amount::new(self.amount)
    }
}
