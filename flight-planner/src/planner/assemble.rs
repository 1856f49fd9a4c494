//! Route assembly.
//!
//! Turns a validated edge sequence into a [`Route`] record: the flight-id
//! chain in traversal order, exact duration and price sums, and the
//! stopover count.

use tracing::{debug, warn};

use crate::domain::Route;
use crate::graph::FlightEdge;

/// Build a [`Route`] from an ordered edge sequence.
///
/// Returns `None` for an empty sequence rather than constructing a
/// degenerate record.
pub fn build_route(edges: &[FlightEdge], id: u32) -> Option<Route> {
    if edges.is_empty() {
        warn!("attempted to build a route from an empty edge list");
        return None;
    }

    let flights = edges
        .iter()
        .map(|edge| edge.flight.id.to_string())
        .collect::<Vec<_>>()
        .join("-");
    let total_duration = edges.iter().map(|edge| edge.duration).sum();
    let total_price = edges.iter().map(|edge| edge.price).sum();
    let stopovers = (edges.len() - 1) as u32;

    debug!(
        route = %flights,
        stopovers,
        duration = total_duration,
        price = total_price,
        "assembled route"
    );

    Some(Route {
        id,
        flights,
        total_duration,
        total_price,
        stopovers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::test_support::graph_from;

    #[test]
    fn empty_edge_list_yields_none() {
        assert!(build_route(&[], 1).is_none());
    }

    #[test]
    fn single_flight_route() {
        let graph = graph_from(&[(9, "VIE", "JFK", "06:00", 480, 450.0)]);
        let edges = graph.outgoing(&crate::planner::test_support::iata("VIE"));

        let route = build_route(edges, 7).unwrap();

        assert_eq!(route.id, 7);
        assert_eq!(route.flights, "9");
        assert_eq!(route.total_duration, 480);
        assert!((route.total_price - 450.0).abs() < 1e-9);
        assert_eq!(route.stopovers, 0);
    }

    #[test]
    fn multi_flight_route_sums_and_chains() {
        let graph = graph_from(&[
            (2, "VIE", "LHR", "08:00", 90, 120.0),
            (4, "LHR", "CDG", "10:00", 60, 80.0),
        ]);
        let vie = crate::planner::test_support::iata("VIE");
        let lhr = crate::planner::test_support::iata("LHR");

        let edges = vec![
            graph.outgoing(&vie)[0].clone(),
            graph.outgoing(&lhr)[0].clone(),
        ];

        let route = build_route(&edges, 1).unwrap();

        assert_eq!(route.flights, "2-4");
        assert_eq!(route.total_duration, 150);
        assert!((route.total_price - 200.0).abs() < 1e-9);
        assert_eq!(route.stopovers, 1);
    }
}
