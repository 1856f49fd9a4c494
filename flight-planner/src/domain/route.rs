//! Route records.

use serde::{Deserialize, Serialize};

/// A computed itinerary between two airports.
///
/// A route is composed of one or more flights, referenced by their ids
/// joined with hyphens (e.g. "1-47-18", in traversal order), together
/// with aggregate values for duration, price and stopover count.
///
/// # Invariants
///
/// - `stopovers` equals the number of flights minus one
/// - `total_duration` and `total_price` are exact sums over the flights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique numeric identifier.
    pub id: u32,

    /// Hyphen-separated flight ids in traversal order (e.g. "1-47-18").
    pub flights: String,

    /// Total duration of the route in minutes.
    #[serde(rename = "totalDuration")]
    pub total_duration: i64,

    /// Total price of the route in euros.
    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    /// Number of stopovers (intermediate landings).
    pub stopovers: u32,
}

impl Route {
    /// The flight ids of this route, in traversal order.
    ///
    /// Ids that fail to parse (a corrupted chain string) are skipped.
    pub fn flight_ids(&self) -> Vec<u32> {
        self.flights
            .split('-')
            .filter_map(|part| part.parse().ok())
            .collect()
    }
}
