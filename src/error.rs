use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("room not found: {0}")]
    RoomNotFound(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("reservation id already exists: {0}")]
    IdConflict(String),
    #[error("room {0} already has an active reservation overlapping the requested dates")]
    OverlapConflict(String),
    #[error("reservation not found: {0}")]
    ReservationNotFound(String),
    #[error("reservation {0} is not active")]
    ReservationNotActive(String),
    #[error("payment already exists for reservation {0}")]
    PaymentAlreadyExists(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("storage error: {0}")]
    StorageError(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for BookingError {
    fn from(e: rocksdb::Error) -> Self {
        Self::StorageError(Box::new(e))
    }
}
