use clap::Parser;
use innkeep::application::engine::BookingEngine;
use innkeep::error::Result as BookingResult;
use innkeep::infrastructure::in_memory::{
    InMemoryPaymentStore, InMemoryReservationStore, InMemoryRoomStore,
};
#[cfg(feature = "storage-rocksdb")]
use innkeep::infrastructure::rocksdb::RocksDbStore;
use innkeep::infrastructure::seed::seed_initial_rooms;
use innkeep::interfaces::csv::command_reader::{Command as BookingCommand, CommandKind, CommandReader};
use innkeep::interfaces::csv::ledger_writer::LedgerWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input booking commands CSV file
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

async fn in_memory_engine() -> BookingResult<BookingEngine> {
    let rooms = InMemoryRoomStore::new();
    seed_initial_rooms(&rooms).await?;
    Ok(BookingEngine::new(
        Box::new(rooms),
        Box::new(InMemoryReservationStore::new()),
        Box::new(InMemoryPaymentStore::new()),
    ))
}

#[cfg(feature = "storage-rocksdb")]
async fn persistent_engine(db_path: PathBuf) -> BookingResult<BookingEngine> {
    let store = RocksDbStore::open(db_path)?;
    seed_initial_rooms(&store).await?;
    Ok(BookingEngine::new(
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store),
    ))
}

async fn apply(engine: &BookingEngine, command: BookingCommand) -> BookingResult<()> {
    match command.action {
        CommandKind::Book => {
            engine.book_room(command.into_booking()?).await?;
        }
        CommandKind::Cancel => {
            engine.cancel_reservation(&command.id).await?;
        }
        CommandKind::Pay => {
            engine.record_payment(command.into_payment()?).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    #[cfg(feature = "storage-rocksdb")]
    let engine = match cli.db_path {
        Some(db_path) => persistent_engine(db_path).await.into_diagnostic()?,
        None => in_memory_engine().await.into_diagnostic()?,
    };
    #[cfg(not(feature = "storage-rocksdb"))]
    let engine = in_memory_engine().await.into_diagnostic()?;

    // Process booking commands
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = apply(&engine, command).await {
                    eprintln!("Error processing command: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    // Output the final reservation ledger
    let reservations = engine.into_results().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = LedgerWriter::new(stdout.lock());
    writer.write_reservations(reservations).into_diagnostic()?;

    Ok(())
}
