use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::cost::CostWeights;
use crate::graph::Graph;
use crate::network::{AirportId, AirportNetwork};

/// Result of a successful best-first search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Visited airports in start-to-goal order.
    pub steps: Vec<AirportId>,
    /// Sum of leg costs along `steps`.
    pub cost: f64,
    /// `cost` plus the heuristic from the goal to itself. The heuristic of a
    /// node to itself is zero, so this always equals `cost`; the field is
    /// kept because the reference behaviour reports both values.
    pub estimated_total: f64,
}

/// Run greedy best-first search between two airports.
///
/// The frontier is ordered by the great-circle heuristic to the goal alone,
/// ignoring accumulated cost. This is deliberately not A*: the returned path
/// is the one the heuristic bias selects, not necessarily the cheapest.
/// Returns `None` when the frontier empties without reaching the goal.
pub fn find_route_best_first(
    graph: &Graph,
    network: &AirportNetwork,
    weights: &CostWeights,
    start: AirportId,
    goal: AirportId,
) -> Option<SearchOutcome> {
    let mut cost_so_far: HashMap<AirportId, f64> = HashMap::new();
    let mut parents: HashMap<AirportId, Option<AirportId>> = HashMap::new();
    let mut visited: HashSet<AirportId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    cost_so_far.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, heuristic_distance(network, start, goal)));

    while let Some(entry) = queue.pop() {
        let current = entry.node;

        if current == goal {
            let cost = cost_so_far.get(&goal).copied().unwrap_or(0.0);
            let estimated_total = cost + heuristic_distance(network, goal, goal);
            return Some(SearchOutcome {
                steps: reconstruct_path(&parents, start, goal),
                cost,
                estimated_total,
            });
        }

        // Stale frontier entries for already-expanded airports are discarded.
        if !visited.insert(current) {
            continue;
        }

        let current_cost = cost_so_far.get(&current).copied().unwrap_or(0.0);
        for edge in graph.neighbours(current) {
            let next = edge.target;
            let attributes = network.attributes_between(current, next);
            let step_cost = weights.leg_cost(edge.distance_km, &attributes);
            let new_cost = current_cost + step_cost;

            if new_cost < *cost_so_far.get(&next).unwrap_or(&f64::INFINITY) {
                cost_so_far.insert(next, new_cost);
                parents.insert(next, Some(current));
                // Priority is the heuristic alone, never new_cost + heuristic.
                queue.push(QueueEntry::new(next, heuristic_distance(network, next, goal)));
            }
        }
    }

    None
}

/// Great-circle estimate between two airports' positions.
fn heuristic_distance(network: &AirportNetwork, from: AirportId, to: AirportId) -> f64 {
    let Some(from_position) = network.position(from) else {
        return 0.0;
    };
    let Some(to_position) = network.position(to) else {
        return 0.0;
    };
    from_position.great_circle_to(&to_position)
}

fn reconstruct_path(
    parents: &HashMap<AirportId, Option<AirportId>>,
    start: AirportId,
    goal: AirportId,
) -> Vec<AirportId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportId,
    priority: FloatOrd,
}

impl QueueEntry {
    fn new(node: AirportId, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_entry_orders_smallest_priority_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(1, 500.0));
        queue.push(QueueEntry::new(2, 10.0));
        queue.push(QueueEntry::new(3, 120.0));

        assert_eq!(queue.pop().map(|entry| entry.node), Some(2));
        assert_eq!(queue.pop().map(|entry| entry.node), Some(3));
        assert_eq!(queue.pop().map(|entry| entry.node), Some(1));
    }

    #[test]
    fn float_ord_total_ordering_handles_equal_values() {
        assert_eq!(FloatOrd(1.5).cmp(&FloatOrd(1.5)), Ordering::Equal);
        assert_eq!(FloatOrd(-1.0).cmp(&FloatOrd(2.0)), Ordering::Less);
    }
}
