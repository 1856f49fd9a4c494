//! Airport records.

use serde::{Deserialize, Serialize};

use super::Iata;

/// An airport record as loaded from the dataset.
///
/// Airports are immutable once loaded; the graph only keeps their IATA
/// codes, the rest is carried for display and search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique numeric identifier.
    pub id: u32,

    /// Three-letter IATA code (e.g. VIE, JFK). The graph vertex key.
    pub iata: Iata,

    /// City the airport serves.
    pub city: String,

    /// Country of the airport.
    pub country: String,

    /// Geographic latitude.
    pub latitude: f64,

    /// Geographic longitude.
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_csv_row() {
        let data = "id,iata,city,country,latitude,longitude\n\
                    1,VIE,Vienna,Austria,48.1103,16.5697\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let airport: Airport = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(airport.id, 1);
        assert_eq!(airport.iata, Iata::parse("VIE").unwrap());
        assert_eq!(airport.city, "Vienna");
        assert_eq!(airport.country, "Austria");
        assert!((airport.latitude - 48.1103).abs() < 1e-9);
    }

    #[test]
    fn invalid_iata_fails_deserialization() {
        let data = "id,iata,city,country,latitude,longitude\n\
                    1,vienna,Vienna,Austria,48.1103,16.5697\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let result: Result<Airport, _> = reader.deserialize().next().unwrap();
        assert!(result.is_err());
    }
}
