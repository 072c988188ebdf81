use crate::domain::reservation::Reservation;
use crate::error::Result;
use std::io::Write;

/// Writes the final reservation ledger as CSV.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(sink),
        }
    }

    pub fn write_reservations(&mut self, reservations: Vec<Reservation>) -> Result<()> {
        for reservation in reservations {
            self.writer.serialize(reservation)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
