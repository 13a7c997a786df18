use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for an airport, assigned when the network is built.
pub type AirportId = u32;

/// Mean Earth radius in kilometres, used by the great-circle heuristic.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minimum similarity for an airport code to count as a fuzzy match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Geographic position of an airport in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPosition {
    /// Great-circle distance to another position in kilometres, computed with
    /// the haversine formula.
    pub fn great_circle_to(&self, other: &Self) -> f64 {
        let dlat = (other.lat_deg - self.lat_deg).to_radians();
        let dlon = (other.lon_deg - self.lon_deg).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + self.lat_deg.to_radians().cos()
                * other.lat_deg.to_radians().cos()
                * (dlon / 2.0).sin().powi(2);
        EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Operational attributes recorded for a leg between two airports.
///
/// Attribute records are optional per leg; a missing record scores every
/// attribute as 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegAttributes {
    pub fuel: f64,
    pub time_hours: f64,
    pub capacity: f64,
    pub safety: f64,
}

impl Default for LegAttributes {
    fn default() -> Self {
        Self {
            fuel: 1.0,
            time_hours: 1.0,
            capacity: 1.0,
            safety: 1.0,
        }
    }
}

/// Representation of an airport with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: AirportId,
    pub code: String,
    pub position: GeoPosition,
}

/// In-memory representation of the airport network.
///
/// Built once from a [`NetworkSpec`] and immutable afterwards. Route planning
/// borrows the network and allocates its own search state, so concurrent
/// `plan_route` calls over a shared network are safe.
#[derive(Debug, Clone, Default)]
pub struct AirportNetwork {
    pub airports: HashMap<AirportId, Airport>,
    code_to_id: HashMap<String, AirportId>,
    adjacency: Arc<HashMap<AirportId, Vec<(AirportId, f64)>>>,
    attributes: HashMap<(AirportId, AirportId), LegAttributes>,
}

impl AirportNetwork {
    /// Lookup an airport identifier by its case-sensitive code.
    pub fn airport_id_by_code(&self, code: &str) -> Option<AirportId> {
        self.code_to_id.get(code).copied()
    }

    /// Lookup an airport code by identifier.
    pub fn airport_code(&self, id: AirportId) -> Option<&str> {
        self.airports.get(&id).map(|airport| airport.code.as_str())
    }

    /// Position of an airport, if the identifier is known.
    pub fn position(&self, id: AirportId) -> Option<GeoPosition> {
        self.airports.get(&id).map(|airport| airport.position)
    }

    /// Outgoing legs for an airport as `(target, distance_km)` pairs.
    ///
    /// Distances are stored per direction exactly as configured; the spec
    /// loader populates both directions of every leg.
    pub fn legs_from(&self, id: AirportId) -> &[(AirportId, f64)] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Configured distance of the leg `from -> to`, if one exists.
    pub fn leg_distance(&self, from: AirportId, to: AirportId) -> Option<f64> {
        self.legs_from(from)
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, distance)| *distance)
    }

    /// Attributes for the leg between two airports.
    ///
    /// The attribute table stores one record per unordered pair, so the
    /// lookup succeeds regardless of which endpoint is queried first. A pair
    /// with no record scores every attribute as 1.
    pub fn attributes_between(&self, a: AirportId, b: AirportId) -> LegAttributes {
        self.attributes
            .get(&(a, b))
            .or_else(|| self.attributes.get(&(b, a)))
            .copied()
            .unwrap_or_default()
    }

    /// Airport codes sorted alphabetically.
    pub fn airport_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .airports
            .values()
            .map(|airport| airport.code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Find airport codes similar to the given input, most similar first.
    ///
    /// Used to build "did you mean" suggestions for unknown codes.
    pub fn fuzzy_airport_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = code.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .map(|airport| {
                let score = strsim::jaro_winkler(&needle, &airport.code.to_ascii_uppercase());
                (score, airport.code.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    /// Build a validated network from a spec.
    ///
    /// A leg or attribute record referencing an airport without a registered
    /// position is a configuration error and fails the build.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self> {
        let mut airports = HashMap::new();
        let mut code_to_id = HashMap::new();

        for (index, airport) in spec.airports.iter().enumerate() {
            let id = index as AirportId;
            if code_to_id.insert(airport.code.clone(), id).is_some() {
                return Err(Error::DuplicateAirportCode {
                    code: airport.code.clone(),
                });
            }
            airports.insert(
                id,
                Airport {
                    id,
                    code: airport.code.clone(),
                    position: GeoPosition {
                        lat_deg: airport.lat_deg,
                        lon_deg: airport.lon_deg,
                    },
                },
            );
        }

        let mut adjacency: HashMap<AirportId, Vec<(AirportId, f64)>> = HashMap::new();
        for &id in airports.keys() {
            adjacency.entry(id).or_default();
        }

        let mut attributes = HashMap::new();
        for leg in &spec.legs {
            let from = resolve_endpoint(&code_to_id, &leg.from)?;
            let to = resolve_endpoint(&code_to_id, &leg.to)?;
            if from == to {
                return Err(Error::SelfLoopLeg {
                    code: leg.from.clone(),
                });
            }

            // Legs are declared once per unordered pair; the distance table
            // is populated symmetrically.
            adjacency.entry(from).or_default().push((to, leg.distance_km));
            adjacency.entry(to).or_default().push((from, leg.distance_km));

            if let Some(attrs) = leg.attributes {
                attributes.insert((from, to), attrs);
            }
        }

        debug!(
            airports = airports.len(),
            legs = spec.legs.len(),
            "built airport network"
        );

        Ok(Self {
            airports,
            code_to_id,
            adjacency: Arc::new(adjacency),
            attributes,
        })
    }

    /// Load and build a network from a JSON spec file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let spec: NetworkSpec = serde_json::from_str(&contents)?;
        Self::from_spec(&spec)
    }
}

fn resolve_endpoint(code_to_id: &HashMap<String, AirportId>, code: &str) -> Result<AirportId> {
    code_to_id
        .get(code)
        .copied()
        .ok_or_else(|| Error::LegEndpointUnknown {
            code: code.to_string(),
        })
}

/// Serializable description of an airport network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub airports: Vec<AirportSpec>,
    pub legs: Vec<LegSpec>,
}

/// One airport in a network spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportSpec {
    pub code: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// One undirected leg in a network spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegSpec {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    #[serde(default)]
    pub attributes: Option<LegAttributes>,
}
