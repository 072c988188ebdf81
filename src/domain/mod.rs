//! Domain entities, value objects and the storage ports they persist through.

pub mod payment;
pub mod ports;
pub mod reservation;
pub mod room;
