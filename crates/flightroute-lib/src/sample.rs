//! Built-in sample network: five Indian airports with fully connected legs.

use crate::network::{AirportSpec, LegAttributes, LegSpec, NetworkSpec};

impl NetworkSpec {
    /// The reference five-airport network (DEL, BOM, BLR, MAA, CCU).
    ///
    /// Legs are declared once per unordered pair; every pair carries an
    /// attribute record.
    pub fn sample() -> Self {
        Self {
            airports: vec![
                airport("DEL", 28.61, 77.21),
                airport("BOM", 19.09, 72.87),
                airport("BLR", 13.20, 77.71),
                airport("MAA", 13.01, 80.23),
                airport("CCU", 22.57, 88.36),
            ],
            legs: vec![
                leg("DEL", "BOM", 1400.0, 5.0, 2.0, 1.0, 1.0),
                leg("DEL", "BLR", 2150.0, 8.0, 3.5, 2.0, 2.0),
                leg("DEL", "MAA", 2200.0, 9.0, 4.0, 3.0, 1.0),
                leg("DEL", "CCU", 1500.0, 6.0, 2.5, 1.0, 1.0),
                leg("BOM", "BLR", 980.0, 3.0, 1.5, 1.0, 1.0),
                leg("BOM", "MAA", 1030.0, 4.0, 1.8, 2.0, 1.0),
                leg("BOM", "CCU", 1660.0, 7.0, 3.0, 2.0, 2.0),
                leg("BLR", "MAA", 290.0, 1.0, 0.8, 1.0, 1.0),
                leg("BLR", "CCU", 1870.0, 6.0, 3.2, 3.0, 2.0),
                leg("MAA", "CCU", 1670.0, 6.0, 3.0, 2.0, 1.0),
            ],
        }
    }
}

fn airport(code: &str, lat_deg: f64, lon_deg: f64) -> AirportSpec {
    AirportSpec {
        code: code.to_string(),
        lat_deg,
        lon_deg,
    }
}

fn leg(
    from: &str,
    to: &str,
    distance_km: f64,
    fuel: f64,
    time_hours: f64,
    capacity: f64,
    safety: f64,
) -> LegSpec {
    LegSpec {
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
        attributes: Some(LegAttributes {
            fuel,
            time_hours,
            capacity,
            safety,
        }),
    }
}
