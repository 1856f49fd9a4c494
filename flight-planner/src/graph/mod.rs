//! Immutable flight graph.
//!
//! Airports are vertices, keyed by IATA code; each scheduled flight is a
//! directed edge. The graph is built once from the loaded datasets and is
//! never mutated afterwards, so it can be shared freely between queries.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Airport, Flight, Iata};

/// A directed edge of the flight graph, corresponding to a single flight.
///
/// The edge carries the values the searches weight on, plus a shared
/// reference to the underlying flight for schedule and id lookups.
#[derive(Debug, Clone)]
pub struct FlightEdge {
    /// Destination airport of this edge.
    pub to: Iata,

    /// Flight duration in minutes.
    pub duration: i64,

    /// Ticket price in euros.
    pub price: f64,

    /// The underlying flight.
    pub flight: Arc<Flight>,
}

/// Adjacency structure mapping each airport to its outgoing flights.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    nodes: HashMap<Iata, Vec<FlightEdge>>,
}

impl FlightGraph {
    /// Build the graph from airport and flight collections.
    ///
    /// Every airport becomes a vertex, even if no flight departs from it.
    /// Flights whose origin is not a known airport are dropped without an
    /// error; they cannot be attached to a vertex.
    pub fn new(airports: &[Airport], flights: Vec<Flight>) -> Self {
        let mut nodes: HashMap<Iata, Vec<FlightEdge>> = HashMap::new();
        for airport in airports {
            nodes.entry(airport.iata).or_default();
        }

        for flight in flights {
            match nodes.get_mut(&flight.origin) {
                Some(edges) => {
                    let edge = FlightEdge {
                        to: flight.destination,
                        duration: flight.duration,
                        price: flight.price,
                        flight: Arc::new(flight),
                    };
                    edges.push(edge);
                }
                None => {
                    debug!(
                        flight = flight.id,
                        origin = %flight.origin,
                        "dropping flight with unknown origin airport"
                    );
                }
            }
        }

        Self { nodes }
    }

    /// Returns true if the airport exists as a vertex.
    pub fn contains(&self, iata: &Iata) -> bool {
        self.nodes.contains_key(iata)
    }

    /// All flights departing from the given airport, in dataset order.
    ///
    /// Returns an empty slice for an unknown airport.
    pub fn outgoing(&self, iata: &Iata) -> &[FlightEdge] {
        self.nodes.get(iata).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of airports in the graph.
    pub fn airport_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of flight edges in the graph.
    pub fn flight_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn airport(id: u32, code: &str) -> Airport {
        Airport {
            id,
            iata: iata(code),
            city: code.to_string(),
            country: "Testland".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn flight(id: u32, origin: &str, destination: &str) -> Flight {
        Flight {
            id,
            origin: iata(origin),
            destination: iata(destination),
            airline: "Test Air".to_string(),
            flight_number: format!("TA{id}"),
            duration: 60,
            price: 100.0,
            departure_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn builds_vertices_for_all_airports() {
        let airports = vec![airport(1, "VIE"), airport(2, "JFK")];
        let graph = FlightGraph::new(&airports, vec![]);

        assert_eq!(graph.airport_count(), 2);
        assert!(graph.contains(&iata("VIE")));
        assert!(graph.contains(&iata("JFK")));
        assert!(!graph.contains(&iata("LHR")));
    }

    #[test]
    fn attaches_edges_to_origin() {
        let airports = vec![airport(1, "VIE"), airport(2, "JFK"), airport(3, "LHR")];
        let flights = vec![flight(1, "VIE", "JFK"), flight(2, "VIE", "LHR")];
        let graph = FlightGraph::new(&airports, flights);

        let outgoing = graph.outgoing(&iata("VIE"));
        assert_eq!(outgoing.len(), 2);
        assert_eq!(outgoing[0].flight.id, 1);
        assert_eq!(outgoing[0].to, iata("JFK"));
        assert_eq!(outgoing[1].flight.id, 2);
        assert!(graph.outgoing(&iata("JFK")).is_empty());
    }

    #[test]
    fn drops_flights_with_unknown_origin() {
        let airports = vec![airport(1, "VIE")];
        // LHR is not in the airport set, so the second flight has no vertex
        let flights = vec![flight(1, "VIE", "JFK"), flight(2, "LHR", "VIE")];
        let graph = FlightGraph::new(&airports, flights);

        assert_eq!(graph.flight_count(), 1);
        assert!(graph.outgoing(&iata("LHR")).is_empty());
    }

    #[test]
    fn keeps_flights_to_unknown_destination() {
        // The origin decides edge attachment; a dangling destination is the
        // loader's problem, not the graph's.
        let airports = vec![airport(1, "VIE")];
        let flights = vec![flight(1, "VIE", "JFK")];
        let graph = FlightGraph::new(&airports, flights);

        assert_eq!(graph.flight_count(), 1);
        assert_eq!(graph.outgoing(&iata("VIE"))[0].to, iata("JFK"));
    }

    #[test]
    fn outgoing_unknown_airport_is_empty() {
        let graph = FlightGraph::new(&[], vec![]);
        assert!(graph.outgoing(&iata("VIE")).is_empty());
    }
}
