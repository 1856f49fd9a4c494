//! Route planning.
//!
//! Answers "what is the best itinerary from A to B?" for a chosen
//! optimization criterion. The weighted search handles the cheapest,
//! fastest and slowest criteria via its weight function; the fewest-
//! stopovers criterion uses the hop-minimizing search. Both searches
//! apply the shared feasibility rules to every candidate extension.

mod assemble;
mod bfs;
mod dijkstra;
mod feasibility;

pub use assemble::build_route;
pub use bfs::fewest_hops_path;
pub use dijkstra::shortest_weighted_path;
pub use feasibility::{FeasibilityRules, MAX_FLIGHTS, MAX_STOPOVERS, MIN_CONNECTION_MINS};

use tracing::info;

use crate::domain::{Iata, Route};
use crate::graph::{FlightEdge, FlightGraph};

/// Optimization criterion for a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCriterion {
    /// Lowest total ticket price.
    Cheapest,

    /// Shortest total flight duration.
    Fastest,

    /// Fewest stopovers.
    FewestStopovers,

    /// Longest total flight duration.
    Slowest,
}

/// Entry point for route calculation.
///
/// Selects the search strategy for a criterion and assembles the result.
/// Route ids are allocated sequentially, starting at 1, so repeated runs
/// over the same data produce identical output.
#[derive(Debug, Clone)]
pub struct RouteFinder {
    rules: FeasibilityRules,
    next_id: u32,
}

impl Default for RouteFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteFinder {
    /// Create a finder with the default feasibility rules.
    pub fn new() -> Self {
        Self::with_rules(FeasibilityRules::default())
    }

    /// Create a finder with custom feasibility rules.
    pub fn with_rules(rules: FeasibilityRules) -> Self {
        Self { rules, next_id: 1 }
    }

    /// Create a finder that continues an existing id sequence, for
    /// sessions that load previously saved routes.
    pub fn starting_at(next_id: u32) -> Self {
        Self {
            rules: FeasibilityRules::default(),
            next_id,
        }
    }

    /// Find the optimal route for the given criterion.
    pub fn find_route(
        &mut self,
        graph: &FlightGraph,
        origin: Iata,
        destination: Iata,
        criterion: RouteCriterion,
    ) -> Option<Route> {
        info!(%origin, %destination, ?criterion, "calculating route");
        match criterion {
            RouteCriterion::Cheapest => {
                self.find_shortest_weighted(graph, origin, destination, |edge| edge.price)
            }
            RouteCriterion::Fastest => {
                self.find_shortest_weighted(graph, origin, destination, |edge| edge.duration as f64)
            }
            RouteCriterion::Slowest => {
                // Negating durations turns the shortest-path search into a
                // longest-path search; sound under the flight-count bound.
                self.find_shortest_weighted(graph, origin, destination, |edge| {
                    -(edge.duration as f64)
                })
            }
            RouteCriterion::FewestStopovers => self.find_fewest_hops(graph, origin, destination),
        }
    }

    /// Find the feasible route of minimum total weight under a caller-
    /// supplied edge-weight function.
    pub fn find_shortest_weighted<F>(
        &mut self,
        graph: &FlightGraph,
        origin: Iata,
        destination: Iata,
        weight: F,
    ) -> Option<Route>
    where
        F: Fn(&FlightEdge) -> f64,
    {
        let path = shortest_weighted_path(graph, origin, destination, weight, &self.rules)?;
        let id = self.allocate_id();
        build_route(&path, id)
    }

    /// Find a feasible route with the fewest flights.
    pub fn find_fewest_hops(
        &mut self,
        graph: &FlightGraph,
        origin: Iata,
        destination: Iata,
    ) -> Option<Route> {
        let path = fewest_hops_path(graph, origin, destination, &self.rules)?;
        let id = self.allocate_id();
        build_route(&path, id)
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
