//! Route planning orchestration.
//!
//! [`plan_route`] is the main entry point: it resolves airport codes,
//! validates the request, runs the greedy best-first search, and assembles a
//! [`RoutePlan`] with a per-leg cost breakdown for display and map export.

use serde::Serialize;
use tracing::debug;

use crate::cost::CostWeights;
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::network::{AirportId, AirportNetwork};
use crate::path::find_route_best_first;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub weights: CostWeights,
}

impl RouteRequest {
    /// Build a request with the default cost weights.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            weights: CostWeights::default(),
        }
    }
}

/// One leg of a planned route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteLeg {
    pub from: AirportId,
    pub to: AirportId,
    pub distance_km: f64,
    pub cost: f64,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: AirportId,
    pub goal: AirportId,
    pub steps: Vec<AirportId>,
    pub legs: Vec<RouteLeg>,
    /// Cumulative cost accrued along `steps`.
    pub total_cost: f64,
    /// Cumulative cost plus the goal's zero self-heuristic; always equal to
    /// `total_cost`, reported separately to match the reference behaviour.
    pub estimated_total: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve an airport code to its identifier, with fuzzy suggestions on miss.
fn resolve_airport(network: &AirportNetwork, code: &str) -> Result<AirportId> {
    network.airport_id_by_code(code).ok_or_else(|| {
        let suggestions = network.fuzzy_airport_matches(code, 3);
        Error::UnknownAirport {
            code: code.to_string(),
            suggestions,
        }
    })
}

/// Compute a route between two airports.
///
/// Start and destination must be distinct, known codes; a request between an
/// airport and itself is rejected before the search runs. An exhausted
/// frontier maps to [`Error::RouteNotFound`].
pub fn plan_route(network: &AirportNetwork, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_airport(network, &request.start)?;
    let goal_id = resolve_airport(network, &request.goal)?;

    if start_id == goal_id {
        return Err(Error::SameAirport {
            code: request.start.clone(),
        });
    }

    let graph = build_graph(network);
    let outcome = find_route_best_first(&graph, network, &request.weights, start_id, goal_id)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = outcome.steps.len().saturating_sub(1),
        cost = outcome.cost,
        "planned route"
    );

    let legs = outcome
        .steps
        .windows(2)
        .map(|pair| {
            let from = pair[0];
            let to = pair[1];
            let distance_km = network.leg_distance(from, to).unwrap_or_default();
            let cost = request
                .weights
                .leg_cost(distance_km, &network.attributes_between(from, to));
            RouteLeg {
                from,
                to,
                distance_km,
                cost,
            }
        })
        .collect();

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps: outcome.steps,
        legs,
        total_cost: outcome.cost,
        estimated_total: outcome.estimated_total,
    })
}
