//! Itinerary feasibility rules.
//!
//! A candidate edge sequence is a legal itinerary only if it stays within
//! the flight-count bound and every connection leaves enough ground time.
//! Both searches apply these rules to every incremental path extension, so
//! infeasible partial paths are pruned before they are expanded further.

use chrono::Timelike;
use tracing::trace;

use crate::graph::FlightEdge;

/// Maximum number of stopovers allowed on an itinerary.
pub const MAX_STOPOVERS: usize = 3;

/// Maximum number of flights allowed on an itinerary.
pub const MAX_FLIGHTS: usize = MAX_STOPOVERS + 1;

/// Minimum connection time between consecutive flights, in minutes.
pub const MIN_CONNECTION_MINS: i64 = 20;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Feasibility rules for candidate itineraries.
///
/// The defaults are the production limits; tests tighten or loosen them
/// to exercise specific scenarios.
#[derive(Debug, Clone)]
pub struct FeasibilityRules {
    /// Maximum number of flights on a single itinerary.
    pub max_flights: usize,

    /// Minimum connection time between consecutive flights, in minutes.
    pub min_connection_mins: i64,
}

impl Default for FeasibilityRules {
    fn default() -> Self {
        Self {
            max_flights: MAX_FLIGHTS,
            min_connection_mins: MIN_CONNECTION_MINS,
        }
    }
}

impl FeasibilityRules {
    /// Layover between two consecutive flights, in minutes.
    ///
    /// The layover runs from the arrival time-of-day of `prev` (departure
    /// plus duration, wrapping past midnight) to the departure time-of-day
    /// of `next`. If the next departure is at or before the arrival, the
    /// departure is taken to be on the following day: minutes until
    /// midnight plus minutes since midnight.
    pub fn connection_minutes(prev: &FlightEdge, next: &FlightEdge) -> i64 {
        let arrival = i64::from(prev.flight.arrival_time().num_seconds_from_midnight()) / 60;
        let departure = i64::from(next.flight.departure_time.num_seconds_from_midnight()) / 60;

        if departure <= arrival {
            (MINUTES_PER_DAY - arrival) + departure
        } else {
            departure - arrival
        }
    }

    /// Returns true if the connection between two consecutive flights
    /// leaves at least the minimum connection time.
    pub fn valid_connection(&self, prev: &FlightEdge, next: &FlightEdge) -> bool {
        Self::connection_minutes(prev, next) >= self.min_connection_mins
    }

    /// Returns true if the path stays within the flight-count bound.
    pub fn within_flight_limit(&self, path: &[FlightEdge]) -> bool {
        path.len() <= self.max_flights
    }

    /// Returns true if every consecutive pair of flights in the path has a
    /// valid connection. Empty and single-flight paths have no
    /// connections and pass trivially.
    pub fn connections_valid(&self, path: &[FlightEdge]) -> bool {
        for pair in path.windows(2) {
            if !self.valid_connection(&pair[0], &pair[1]) {
                trace!(
                    prev = pair[0].flight.id,
                    next = pair[1].flight.id,
                    layover = Self::connection_minutes(&pair[0], &pair[1]),
                    "connection below minimum"
                );
                return false;
            }
        }
        true
    }

    /// Returns true if the path satisfies both the flight-count bound and
    /// the connection-time rule.
    pub fn is_feasible(&self, path: &[FlightEdge]) -> bool {
        self.within_flight_limit(path) && self.connections_valid(path)
    }
}
