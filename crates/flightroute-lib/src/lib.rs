//! Flight route planner library entry points.
//!
//! This crate exposes helpers to build an airport network from a spec, score
//! legs with the weighted cost model, run greedy best-first pathfinding, and
//! export routes as interactive maps. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod map;
pub mod network;
pub mod path;
pub mod routing;
mod sample;

pub use cost::CostWeights;
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph};
pub use map::write_route_map;
pub use network::{
    Airport, AirportId, AirportNetwork, AirportSpec, GeoPosition, LegAttributes, LegSpec,
    NetworkSpec, EARTH_RADIUS_KM,
};
pub use path::{find_route_best_first, SearchOutcome};
pub use routing::{plan_route, RouteLeg, RoutePlan, RouteRequest};
