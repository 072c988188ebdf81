//! Application layer containing the booking orchestration.
//!
//! This module defines the `BookingEngine`, the single entry point for
//! booking, cancelling and recording payments. It owns the storage ports
//! and the per-room locks that keep overlapping bookings out.

pub mod engine;
