//! CSV repositories.
//!
//! Loads the airport and flight datasets and loads/saves computed routes.
//! The file layout matches the original datasets: one header row, comma
//! separated, `departureTime` in `HH:MM`.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};
use tracing::{info, warn};

use crate::domain::{Airport, Flight, Route};

/// Error loading or saving a dataset.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The file could not be opened or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed into its record type
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn reader(path: &Path) -> Result<csv::Reader<File>, RepositoryError> {
    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(File::open(path)?))
}

/// Load airports from a CSV file.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>, RepositoryError> {
    let airports: Vec<Airport> = reader(path)?.deserialize().collect::<Result<_, _>>()?;
    info!(count = airports.len(), path = %path.display(), "loaded airports");
    Ok(airports)
}

/// Load flights from a CSV file.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, RepositoryError> {
    let flights: Vec<Flight> = reader(path)?.deserialize().collect::<Result<_, _>>()?;
    info!(count = flights.len(), path = %path.display(), "loaded flights");
    Ok(flights)
}

/// Load previously saved routes from a CSV file.
///
/// A missing file is treated as an empty route set, so a fresh data
/// directory works without a seed file.
pub fn load_routes(path: &Path) -> Result<Vec<Route>, RepositoryError> {
    if !path.exists() {
        warn!(path = %path.display(), "no routes file, starting empty");
        return Ok(Vec::new());
    }
    let routes: Vec<Route> = reader(path)?.deserialize().collect::<Result<_, _>>()?;
    info!(count = routes.len(), path = %path.display(), "loaded routes");
    Ok(routes)
}

/// Save routes to a CSV file, replacing its contents.
pub fn save_routes(path: &Path, routes: &[Route]) -> Result<(), RepositoryError> {
    let mut writer = Writer::from_writer(File::create(path)?);
    for route in routes {
        writer.serialize(route)?;
    }
    writer.flush()?;
    info!(count = routes.len(), path = %path.display(), "saved routes");
    Ok(())
}
