//! Interactive map export.
//!
//! Renders an airport network and a planned route as a self-contained
//! Leaflet HTML file: one marker per airport, every leg drawn with its
//! computed cost in a popup, and the planned route highlighted. The caller
//! decides where the file goes; opening it is out of scope.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::cost::CostWeights;
use crate::error::Result;
use crate::network::AirportNetwork;
use crate::routing::RoutePlan;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Flight Route Planner</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const payload = __PAYLOAD__;
const map = L.map("map").setView(payload.center, 5);
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
for (const airport of payload.airports) {
  L.marker([airport.lat, airport.lon]).bindPopup(airport.code).addTo(map);
}
for (const leg of payload.legs) {
  L.polyline(leg.path, { color: "red", weight: 1.5, opacity: 0.6 }).addTo(map);
  const mid = [
    (leg.path[0][0] + leg.path[1][0]) / 2,
    (leg.path[0][1] + leg.path[1][1]) / 2
  ];
  L.circleMarker(mid, { radius: 5, color: "green" })
    .bindPopup(leg.from + " - " + leg.to + ": cost " + Math.round(leg.cost))
    .addTo(map);
}
L.polyline(payload.route, { color: "blue", weight: 2.5 }).addTo(map);
</script>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct MapAirport {
    code: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
struct MapLeg {
    from: String,
    to: String,
    cost: f64,
    path: [[f64; 2]; 2],
}

#[derive(Debug, Serialize)]
struct MapPayload {
    center: [f64; 2],
    airports: Vec<MapAirport>,
    legs: Vec<MapLeg>,
    route: Vec<[f64; 2]>,
    total_cost: f64,
}

/// Write a route map HTML file for the given plan.
pub fn write_route_map(
    network: &AirportNetwork,
    plan: &RoutePlan,
    weights: &CostWeights,
    path: &Path,
) -> Result<()> {
    let payload = build_payload(network, plan, weights);
    let json = serde_json::to_string(&payload)?;
    fs::write(path, TEMPLATE.replace("__PAYLOAD__", &json))?;
    debug!(path = %path.display(), "wrote route map");
    Ok(())
}

fn build_payload(network: &AirportNetwork, plan: &RoutePlan, weights: &CostWeights) -> MapPayload {
    let mut airports: Vec<MapAirport> = network
        .airports
        .values()
        .map(|airport| MapAirport {
            code: airport.code.clone(),
            lat: airport.position.lat_deg,
            lon: airport.position.lon_deg,
        })
        .collect();
    airports.sort_by(|a, b| a.code.cmp(&b.code));

    let mut legs = Vec::new();
    for airport in network.airports.values() {
        for &(target, distance_km) in network.legs_from(airport.id) {
            // Legs are stored in both directions; draw each pair once.
            if airport.id >= target {
                continue;
            }
            let Some(other) = network.airports.get(&target) else {
                continue;
            };
            let attributes = network.attributes_between(airport.id, target);
            legs.push(MapLeg {
                from: airport.code.clone(),
                to: other.code.clone(),
                cost: weights.leg_cost(distance_km, &attributes),
                path: [
                    [airport.position.lat_deg, airport.position.lon_deg],
                    [other.position.lat_deg, other.position.lon_deg],
                ],
            });
        }
    }
    legs.sort_by(|a, b| (a.from.as_str(), a.to.as_str()).cmp(&(b.from.as_str(), b.to.as_str())));

    let route: Vec<[f64; 2]> = plan
        .steps
        .iter()
        .filter_map(|&id| network.position(id))
        .map(|position| [position.lat_deg, position.lon_deg])
        .collect();

    let center = if airports.is_empty() {
        [0.0, 0.0]
    } else {
        let count = airports.len() as f64;
        [
            airports.iter().map(|a| a.lat).sum::<f64>() / count,
            airports.iter().map(|a| a.lon).sum::<f64>() / count,
        ]
    };

    MapPayload {
        center,
        airports,
        legs,
        route,
        total_cost: plan.total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkSpec;
    use crate::routing::{plan_route, RouteRequest};

    #[test]
    fn payload_draws_each_leg_once() {
        let network = AirportNetwork::from_spec(&NetworkSpec::sample()).expect("sample builds");
        let plan = plan_route(&network, &RouteRequest::new("DEL", "MAA")).expect("route exists");
        let payload = build_payload(&network, &plan, &CostWeights::default());

        assert_eq!(payload.airports.len(), 5);
        // Ten unordered pairs in the fully connected sample network.
        assert_eq!(payload.legs.len(), 10);
        assert_eq!(payload.route.first(), Some(&[28.61, 77.21]));
        assert_eq!(payload.route.last(), Some(&[13.01, 80.23]));
        assert!(payload.total_cost > 0.0);
    }
}
