use super::payment::Payment;
use super::reservation::Reservation;
use super::room::Room;
use crate::error::Result;
use async_trait::async_trait;

pub type RoomStoreBox = Box<dyn RoomStore>;
pub type ReservationStoreBox = Box<dyn ReservationStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;

#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn insert(&self, room: Room) -> Result<()>;
    async fn get(&self, room_id: &str) -> Result<Option<Room>>;
    async fn all(&self) -> Result<Vec<Room>>;
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Inserts a new reservation. Fails with `IdConflict` if the id is
    /// already taken; the check and the insert are atomic.
    async fn insert(&self, reservation: Reservation) -> Result<()>;
    async fn get(&self, reservation_id: &str) -> Result<Option<Reservation>>;
    async fn all(&self) -> Result<Vec<Reservation>>;
    /// Active reservations for one room; the input to the overlap check.
    async fn active_for_room(&self, room_id: &str) -> Result<Vec<Reservation>>;
    /// Atomic `active -> cancelled` transition. Fails with
    /// `ReservationNotFound` or `ReservationNotActive`.
    async fn cancel(&self, reservation_id: &str) -> Result<Reservation>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts a new payment. The one-payment-per-reservation rule and id
    /// uniqueness are enforced here, atomically with the insert.
    async fn insert(&self, payment: Payment) -> Result<()>;
    async fn get_by_reservation(&self, reservation_id: &str) -> Result<Option<Payment>>;
    async fn all(&self) -> Result<Vec<Payment>>;
}
