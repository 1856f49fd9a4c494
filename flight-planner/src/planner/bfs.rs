//! Fewest-hops search.
//!
//! Level-order expansion over whole edge paths. Because expansion proceeds
//! one flight per level, the first feasible path to reach the destination
//! has the minimum number of flights. Queue entries are complete paths
//! from the origin rather than bare vertices: feasibility depends on the
//! full path, so a single-edge check would not be enough.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use crate::domain::Iata;
use crate::graph::{FlightEdge, FlightGraph};

use super::feasibility::FeasibilityRules;

/// Find a feasible path with the fewest flights between two airports.
///
/// Returns `None` when either endpoint is unknown, when origin and
/// destination coincide, or when no feasible path exists.
pub fn fewest_hops_path(
    graph: &FlightGraph,
    origin: Iata,
    destination: Iata,
    rules: &FeasibilityRules,
) -> Option<Vec<FlightEdge>> {
    if origin == destination {
        return None;
    }
    if !graph.contains(&origin) || !graph.contains(&destination) {
        warn!(%origin, %destination, "unknown endpoint, no route");
        return None;
    }

    let mut queue: VecDeque<Vec<FlightEdge>> = VecDeque::new();
    for edge in graph.outgoing(&origin) {
        let path = vec![edge.clone()];
        if rules.is_feasible(&path) {
            queue.push_back(path);
        }
    }

    // A vertex is marked visited the first time a feasible path reaches
    // it; later, longer paths to the same vertex cannot improve on hops.
    let mut visited: HashSet<Iata> = HashSet::new();
    visited.insert(origin);

    while let Some(path) = queue.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };
        let current = last.to;

        if current == destination {
            // Every enqueued path already passed the feasibility rules
            debug!(%origin, %destination, hops = path.len(), "hop search found a route");
            return Some(path);
        }

        if !visited.insert(current) {
            continue;
        }

        for next in graph.outgoing(&current) {
            if visited.contains(&next.to) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(next.clone());
            if rules.is_feasible(&extended) {
                queue.push_back(extended);
            }
        }
    }

    debug!(%origin, %destination, "hop search found no route");
    None
}
