use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStore, ReservationStore, RoomStore};
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::domain::room::Room;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for rooms.
pub const CF_ROOMS: &str = "rooms";
/// Column Family for reservations.
pub const CF_RESERVATIONS: &str = "reservations";
/// Column Family for payments.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent store implementation using RocksDB.
///
/// Implements all three storage ports over one database, with a Column
/// Family per entity and JSON-encoded values. `Clone` shares the underlying
/// `Arc<DB>`, so the same instance can be boxed once per port.
///
/// RocksDB gives no multi-key transactions, so the read-modify-write
/// sequences (insert-if-absent, the cancel transition, the payment
/// uniqueness check) are serialized through an internal mutex.
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the three column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cfs = vec![
            ColumnFamilyDescriptor::new(CF_ROOMS, Options::default()),
            ColumnFamilyDescriptor::new(CF_RESERVATIONS, Options::default()),
            ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default()),
        ];
        let db = DB::open_cf_descriptors(&opts, path, cfs)?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            BookingError::StorageError(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }

    fn put<T: Serialize>(&self, cf_name: &str, key: &str, value: &T) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let bytes =
            serde_json::to_vec(value).map_err(|e| BookingError::StorageError(Box::new(e)))?;
        self.db.put_cf(cf, key.as_bytes(), bytes)?;
        Ok(())
    }

    fn fetch<T: DeserializeOwned>(&self, cf_name: &str, key: &str) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        match self.db.get_cf(cf, key.as_bytes())? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| BookingError::StorageError(Box::new(e)))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn scan<T: DeserializeOwned>(&self, cf_name: &str) -> Result<Vec<T>> {
        let cf = self.cf(cf_name)?;
        let mut values = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, bytes) = item?;
            let value = serde_json::from_slice(&bytes)
                .map_err(|e| BookingError::StorageError(Box::new(e)))?;
            values.push(value);
        }
        Ok(values)
    }
}

#[async_trait]
impl RoomStore for RocksDbStore {
    async fn insert(&self, room: Room) -> Result<()> {
        self.put(CF_ROOMS, &room.id, &room)
    }

    async fn get(&self, room_id: &str) -> Result<Option<Room>> {
        self.fetch(CF_ROOMS, room_id)
    }

    async fn all(&self) -> Result<Vec<Room>> {
        self.scan(CF_ROOMS)
    }
}

#[async_trait]
impl ReservationStore for RocksDbStore {
    async fn insert(&self, reservation: Reservation) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if self
            .fetch::<Reservation>(CF_RESERVATIONS, &reservation.id)?
            .is_some()
        {
            return Err(BookingError::IdConflict(reservation.id));
        }
        self.put(CF_RESERVATIONS, &reservation.id, &reservation)
    }

    async fn get(&self, reservation_id: &str) -> Result<Option<Reservation>> {
        self.fetch(CF_RESERVATIONS, reservation_id)
    }

    async fn all(&self) -> Result<Vec<Reservation>> {
        self.scan(CF_RESERVATIONS)
    }

    async fn active_for_room(&self, room_id: &str) -> Result<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self.scan(CF_RESERVATIONS)?;
        Ok(reservations
            .into_iter()
            .filter(|r| r.room_id == room_id && r.is_active())
            .collect())
    }

    async fn cancel(&self, reservation_id: &str) -> Result<Reservation> {
        let _guard = self.write_lock.lock().await;
        let mut reservation = self
            .fetch::<Reservation>(CF_RESERVATIONS, reservation_id)?
            .ok_or_else(|| BookingError::ReservationNotFound(reservation_id.to_string()))?;
        if !reservation.is_active() {
            return Err(BookingError::ReservationNotActive(
                reservation_id.to_string(),
            ));
        }
        reservation.status = ReservationStatus::Cancelled;
        self.put(CF_RESERVATIONS, reservation_id, &reservation)?;
        Ok(reservation)
    }
}

#[async_trait]
impl PaymentStore for RocksDbStore {
    async fn insert(&self, payment: Payment) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let payments: Vec<Payment> = self.scan(CF_PAYMENTS)?;
        if payments
            .iter()
            .any(|p| p.reservation_id == payment.reservation_id)
        {
            return Err(BookingError::PaymentAlreadyExists(payment.reservation_id));
        }
        if payments.iter().any(|p| p.id == payment.id) {
            return Err(BookingError::IdConflict(payment.id));
        }
        self.put(CF_PAYMENTS, &payment.id, &payment)
    }

    async fn get_by_reservation(&self, reservation_id: &str) -> Result<Option<Payment>> {
        let payments: Vec<Payment> = self.scan(CF_PAYMENTS)?;
        Ok(payments
            .into_iter()
            .find(|p| p.reservation_id == reservation_id))
    }

    async fn all(&self) -> Result<Vec<Payment>> {
        self.scan(CF_PAYMENTS)
    }
}
