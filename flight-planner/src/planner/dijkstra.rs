//! Generalized weighted search.
//!
//! A label-correcting variant of Dijkstra's algorithm, parameterized by an
//! edge-weight function. Each vertex label stores the whole edge path that
//! achieves its cost, not just a predecessor pointer: accepting a
//! relaxation requires re-validating the extended path against the
//! feasibility rules, and those rules (flight count, connection times) are
//! properties of the path as a whole.
//!
//! Negative weights are tolerated; they are used to find the slowest route
//! by negating durations. This is sound only because paths are bounded to
//! [`MAX_FLIGHTS`](super::feasibility::MAX_FLIGHTS) edges, so no negative
//! cycle can be traversed.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::Iata;
use crate::graph::{FlightEdge, FlightGraph};

use super::feasibility::FeasibilityRules;

/// Best known cost and the edge path achieving it, per vertex.
#[derive(Debug, Clone)]
struct Label {
    cost: f64,
    path: Vec<FlightEdge>,
}

/// Priority-queue entry, ordered by accumulated cost.
///
/// Hops and vertex code are secondary keys so that the pop order is
/// deterministic regardless of insertion order.
#[derive(Debug, Clone)]
struct QueueEntry {
    cost: f64,
    hops: usize,
    vertex: Iata,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.hops.cmp(&other.hops))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// When two feasible paths tie on cost, prefer the one with fewer hops,
/// then the lexicographically smaller flight-id chain. This makes the
/// search result independent of hash-map iteration order.
fn prefer(candidate: &[FlightEdge], incumbent: &[FlightEdge]) -> bool {
    match candidate.len().cmp(&incumbent.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => {
            let candidate_ids = candidate.iter().map(|e| e.flight.id);
            let incumbent_ids = incumbent.iter().map(|e| e.flight.id);
            candidate_ids.lt(incumbent_ids)
        }
    }
}

/// Find the feasible path of minimum total weight between two airports.
///
/// Returns `None` when either endpoint is unknown, when origin and
/// destination coincide, or when no feasible path exists. All of these
/// are expected outcomes, not errors.
pub fn shortest_weighted_path<F>(
    graph: &FlightGraph,
    origin: Iata,
    destination: Iata,
    weight: F,
    rules: &FeasibilityRules,
) -> Option<Vec<FlightEdge>>
where
    F: Fn(&FlightEdge) -> f64,
{
    if origin == destination {
        return None;
    }
    if !graph.contains(&origin) || !graph.contains(&destination) {
        warn!(%origin, %destination, "unknown endpoint, no route");
        return None;
    }

    let mut labels: HashMap<Iata, Label> = HashMap::new();
    labels.insert(
        origin,
        Label {
            cost: 0.0,
            path: Vec::new(),
        },
    );

    let mut finalized: HashSet<Iata> = HashSet::new();
    let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    queue.push(Reverse(QueueEntry {
        cost: 0.0,
        hops: 0,
        vertex: origin,
    }));

    while let Some(Reverse(entry)) = queue.pop() {
        let current = entry.vertex;
        if !finalized.insert(current) {
            continue; // Stale queue entry
        }
        if current == destination {
            break;
        }

        // Labels for other vertices may change inside the loop, so take a
        // snapshot of the one being expanded.
        let Some(label) = labels.get(&current).cloned() else {
            continue;
        };

        for edge in graph.outgoing(&current) {
            if finalized.contains(&edge.to) {
                continue;
            }

            let mut extended = label.path.clone();
            extended.push(edge.clone());
            if !rules.is_feasible(&extended) {
                continue;
            }

            let extended_cost = label.cost + weight(edge);
            let accept = match labels.get(&edge.to) {
                None => true,
                Some(best) => {
                    extended_cost < best.cost
                        || (extended_cost == best.cost && prefer(&extended, &best.path))
                }
            };

            if accept {
                queue.push(Reverse(QueueEntry {
                    cost: extended_cost,
                    hops: extended.len(),
                    vertex: edge.to,
                }));
                labels.insert(
                    edge.to,
                    Label {
                        cost: extended_cost,
                        path: extended,
                    },
                );
            }
        }
    }

    match labels.remove(&destination) {
        Some(label) if !label.path.is_empty() => {
            debug!(
                %origin,
                %destination,
                cost = label.cost,
                hops = label.path.len(),
                "weighted search found a route"
            );
            Some(label.path)
        }
        _ => {
            debug!(%origin, %destination, "weighted search found no route");
            None
        }
    }
}
