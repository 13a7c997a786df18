//! Weighted composite cost model for traversing a leg.

use serde::Serialize;

use crate::network::LegAttributes;

/// Weights and scale factors of the composite leg cost.
///
/// The score combines base distance with fuel, time, capacity, and safety:
///
/// ```text
/// cost = 0.4 * distance_km
///      + 0.2 * fuel * 100
///      + 0.2 * time_hours * 60
///      + 0.1 * capacity * 50
///      + 0.1 * safety * 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostWeights {
    pub distance: f64,
    pub fuel: f64,
    pub time: f64,
    pub capacity: f64,
    pub safety: f64,
}

/// Scale factor applied to the fuel attribute.
const FUEL_SCALE: f64 = 100.0;
/// Scale factor applied to the time attribute (hours to a per-minute score).
const TIME_SCALE: f64 = 60.0;
/// Scale factor applied to the capacity class.
const CAPACITY_SCALE: f64 = 50.0;
/// Scale factor applied to the safety class.
const SAFETY_SCALE: f64 = 30.0;

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            distance: 0.4,
            fuel: 0.2,
            time: 0.2,
            capacity: 0.1,
            safety: 0.1,
        }
    }
}

impl CostWeights {
    /// Composite cost of one leg given its configured distance and attributes.
    pub fn leg_cost(&self, distance_km: f64, attributes: &LegAttributes) -> f64 {
        self.distance * distance_km
            + self.fuel * attributes.fuel * FUEL_SCALE
            + self.time * attributes.time_hours * TIME_SCALE
            + self.capacity * attributes.capacity * CAPACITY_SCALE
            + self.safety * attributes.safety * SAFETY_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attributes_cost() {
        let weights = CostWeights::default();
        let cost = weights.leg_cost(1000.0, &LegAttributes::default());
        // 0.4*1000 + 0.2*100 + 0.2*60 + 0.1*50 + 0.1*30
        assert!((cost - 440.0).abs() < 1e-9, "got {cost}");
    }

    #[test]
    fn reference_del_maa_cost() {
        let weights = CostWeights::default();
        let attrs = LegAttributes {
            fuel: 9.0,
            time_hours: 4.0,
            capacity: 3.0,
            safety: 1.0,
        };
        let cost = weights.leg_cost(2200.0, &attrs);
        assert!((cost - 1126.0).abs() < 1e-9, "got {cost}");
    }
}
