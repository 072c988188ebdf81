use crate::domain::payment::{Payment, PaymentRequest};
use crate::domain::ports::{PaymentStoreBox, ReservationStoreBox, RoomStoreBox};
use crate::domain::reservation::{BookingRequest, Reservation};
use crate::domain::room::{Room, RoomAvailability};
use crate::error::{BookingError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Orchestrates the room registry, the reservation ledger and the payment
/// gate into the externally meaningful operations.
///
/// The engine holds no booking state of its own; all state lives behind the
/// storage ports. Its one piece of runtime state is the per-room lock map
/// that serializes the overlap-check-and-insert of concurrent bookings.
pub struct BookingEngine {
    room_store: RoomStoreBox,
    reservation_store: ReservationStoreBox,
    payment_store: PaymentStoreBox,
    room_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl BookingEngine {
    pub fn new(
        room_store: RoomStoreBox,
        reservation_store: ReservationStoreBox,
        payment_store: PaymentStoreBox,
    ) -> Self {
        Self {
            room_store,
            reservation_store,
            payment_store,
            room_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn room_lock(&self, room_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.room_locks.lock().await;
        locks.entry(room_id.to_string()).or_default().clone()
    }

    /// Books a room.
    ///
    /// Preconditions, checked in order: the room exists, the draft fields
    /// are valid, the reservation id is fresh, and no active reservation on
    /// the room overlaps the requested range. The overlap check and the
    /// insert run under the room's lock, so two racing bookings for the same
    /// room can never both observe a free range.
    pub async fn book_room(&self, request: BookingRequest) -> Result<Reservation> {
        if self.room_store.get(&request.room_id).await?.is_none() {
            return Err(BookingError::RoomNotFound(request.room_id.clone()));
        }
        let range = request.validate()?;

        let lock = self.room_lock(&request.room_id).await;
        let _guard = lock.lock().await;

        if self.reservation_store.get(&request.id).await?.is_some() {
            return Err(BookingError::IdConflict(request.id.clone()));
        }
        let active = self.reservation_store.active_for_room(&request.room_id).await?;
        if active.iter().any(|r| r.range().overlaps(&range)) {
            return Err(BookingError::OverlapConflict(request.room_id.clone()));
        }

        let reservation = request.into_reservation();
        self.reservation_store.insert(reservation.clone()).await?;
        debug!(id = %reservation.id, room = %reservation.room_id, "reservation booked");
        Ok(reservation)
    }

    /// Cancels a reservation.
    ///
    /// The guarded `active -> cancelled` transition happens atomically inside
    /// the store; re-cancelling fails with `ReservationNotActive`, never a
    /// silent success.
    pub async fn cancel_reservation(&self, reservation_id: &str) -> Result<Reservation> {
        if reservation_id.is_empty() {
            return Err(BookingError::ValidationError(
                "reservation_id is required".to_string(),
            ));
        }
        let reservation = self.reservation_store.cancel(reservation_id).await?;
        debug!(id = %reservation.id, "reservation cancelled");
        Ok(reservation)
    }

    /// Records a payment for a reservation.
    ///
    /// Preconditions, checked in order: the reservation exists, it is active
    /// at the moment of the check, and no payment was recorded for it yet.
    /// The store re-enforces uniqueness atomically with the insert, so a
    /// racing duplicate loses even when both requests passed the pre-check.
    pub async fn record_payment(&self, request: PaymentRequest) -> Result<Payment> {
        let amount = request.validate()?;
        let reservation = self
            .reservation_store
            .get(&request.reservation_id)
            .await?
            .ok_or_else(|| BookingError::ReservationNotFound(request.reservation_id.clone()))?;
        if !reservation.is_active() {
            return Err(BookingError::ReservationNotActive(
                request.reservation_id.clone(),
            ));
        }
        if self
            .payment_store
            .get_by_reservation(&request.reservation_id)
            .await?
            .is_some()
        {
            return Err(BookingError::PaymentAlreadyExists(
                request.reservation_id.clone(),
            ));
        }

        let payment = Payment {
            id: request.id,
            reservation_id: request.reservation_id,
            amount,
        };
        self.payment_store.insert(payment.clone()).await?;
        debug!(id = %payment.id, reservation = %payment.reservation_id, "payment recorded");
        Ok(payment)
    }

    /// All rooms, each enriched with its active reservation ranges.
    pub async fn list_rooms(&self) -> Result<Vec<RoomAvailability>> {
        let rooms = self.room_store.all().await?;
        let mut availabilities = Vec::with_capacity(rooms.len());
        for room in rooms {
            availabilities.push(self.availability(room).await?);
        }
        Ok(availabilities)
    }

    /// One room with its active reservation ranges. Absence is a normal
    /// outcome, not an error.
    pub async fn get_room(&self, room_id: &str) -> Result<Option<RoomAvailability>> {
        match self.room_store.get(room_id).await? {
            Some(room) => Ok(Some(self.availability(room).await?)),
            None => Ok(None),
        }
    }

    async fn availability(&self, room: Room) -> Result<RoomAvailability> {
        let mut booked: Vec<_> = self
            .reservation_store
            .active_for_room(&room.id)
            .await?
            .iter()
            .map(Reservation::range)
            .collect();
        booked.sort_by_key(|range| range.start);
        Ok(RoomAvailability { room, booked })
    }

    pub async fn get_reservation(&self, reservation_id: &str) -> Result<Option<Reservation>> {
        self.reservation_store.get(reservation_id).await
    }

    pub async fn list_reservations(&self) -> Result<Vec<Reservation>> {
        self.reservation_store.all().await
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>> {
        self.payment_store.all().await
    }

    pub async fn payment_for_reservation(&self, reservation_id: &str) -> Result<Option<Payment>> {
        self.payment_store.get_by_reservation(reservation_id).await
    }

    /// Consumes the engine and returns the final reservation ledger,
    /// sorted by id for stable output.
    pub async fn into_results(self) -> Result<Vec<Reservation>> {
        let mut reservations = self.reservation_store.all().await?;
        reservations.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(reservations)
    }
}
