use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStore, ReservationStore, RoomStore};
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::domain::room::Room;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory room registry.
///
/// Uses `Arc<RwLock<HashMap>>` to allow shared concurrent access. Ideal for
/// tests and single-process runs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryRoomStore {
    rooms: Arc<RwLock<HashMap<String, Room>>>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn insert(&self, room: Room) -> Result<()> {
        let mut rooms = self.rooms.write().await;
        rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn get(&self, room_id: &str) -> Result<Option<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(room_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.values().cloned().collect())
    }
}

/// A thread-safe in-memory reservation ledger.
///
/// Id uniqueness and the guarded status transition are enforced under the
/// map's write lock, giving the single-key atomicity the ledger operations
/// rely on.
#[derive(Default, Clone)]
pub struct InMemoryReservationStore {
    reservations: Arc<RwLock<HashMap<String, Reservation>>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn insert(&self, reservation: Reservation) -> Result<()> {
        let mut reservations = self.reservations.write().await;
        if reservations.contains_key(&reservation.id) {
            return Err(BookingError::IdConflict(reservation.id));
        }
        reservations.insert(reservation.id.clone(), reservation);
        Ok(())
    }

    async fn get(&self, reservation_id: &str) -> Result<Option<Reservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations.get(reservation_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Reservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations.values().cloned().collect())
    }

    async fn active_for_room(&self, room_id: &str) -> Result<Vec<Reservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations
            .values()
            .filter(|r| r.room_id == room_id && r.is_active())
            .cloned()
            .collect())
    }

    async fn cancel(&self, reservation_id: &str) -> Result<Reservation> {
        let mut reservations = self.reservations.write().await;
        let reservation = reservations
            .get_mut(reservation_id)
            .ok_or_else(|| BookingError::ReservationNotFound(reservation_id.to_string()))?;
        if !reservation.is_active() {
            return Err(BookingError::ReservationNotActive(
                reservation_id.to_string(),
            ));
        }
        reservation.status = ReservationStatus::Cancelled;
        Ok(reservation.clone())
    }
}

/// A thread-safe in-memory payment store.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        // Reservation uniqueness first: a duplicate charge reports
        // PaymentAlreadyExists even when the payment id is also reused.
        if payments
            .values()
            .any(|p| p.reservation_id == payment.reservation_id)
        {
            return Err(BookingError::PaymentAlreadyExists(payment.reservation_id));
        }
        if payments.contains_key(&payment.id) {
            return Err(BookingError::IdConflict(payment.id));
        }
        payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn get_by_reservation(&self, reservation_id: &str) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments
            .values()
            .find(|p| p.reservation_id == reservation_id)
            .cloned())
    }

    async fn all(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }
}
