//! Flight records.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Iata;

/// A scheduled flight between two airports.
///
/// Only the departure time-of-day is modeled; there is no calendar date.
/// The arrival time therefore wraps past midnight for late departures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique numeric identifier.
    pub id: u32,

    /// IATA code of the origin airport.
    pub origin: Iata,

    /// IATA code of the destination airport.
    pub destination: Iata,

    /// Name of the operating airline.
    pub airline: String,

    /// Airline flight number (e.g. OS35).
    #[serde(rename = "flightNumber")]
    pub flight_number: String,

    /// Flight duration in minutes.
    pub duration: i64,

    /// Ticket price in euros.
    pub price: f64,

    /// Scheduled departure time-of-day.
    #[serde(rename = "departureTime", with = "hhmm")]
    pub departure_time: NaiveTime,
}

impl Flight {
    /// The arrival time-of-day: departure plus duration, wrapping past
    /// midnight.
    pub fn arrival_time(&self) -> NaiveTime {
        self.departure_time + Duration::minutes(self.duration)
    }
}

/// Serde adapter for the `HH:MM` departure time format of the datasets.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(Error::custom)
    }
}
