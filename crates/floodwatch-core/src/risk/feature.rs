//! Feature identifiers and the static range/weight table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven model inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    RainfallMmLast24h,
    RiverLevelM,
    SoilMoisturePct,
    ElevationM,
    DistanceToRiverKm,
    PopulationDensityPerSqkm,
    HistoricalFloodEvents,
}

impl Feature {
    pub const COUNT: usize = 7;

    /// Canonical order; validation reports the first failing field in this order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::RainfallMmLast24h,
        Feature::RiverLevelM,
        Feature::SoilMoisturePct,
        Feature::ElevationM,
        Feature::DistanceToRiverKm,
        Feature::PopulationDensityPerSqkm,
        Feature::HistoricalFloodEvents,
    ];

    /// Wire name of the feature (case-sensitive JSON key)
    pub fn key(&self) -> &'static str {
        match self {
            Feature::RainfallMmLast24h => "rainfall_mm_last_24h",
            Feature::RiverLevelM => "river_level_m",
            Feature::SoilMoisturePct => "soil_moisture_pct",
            Feature::ElevationM => "elevation_m",
            Feature::DistanceToRiverKm => "distance_to_river_km",
            Feature::PopulationDensityPerSqkm => "population_density_per_sqkm",
            Feature::HistoricalFloodEvents => "historical_flood_events",
        }
    }

    /// Position in [`Feature::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Whether a larger raw value raises or lowers risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskDirection {
    Higher,
    Lower,
}

/// Declared range, direction and weight of one feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSpec {
    pub feature: Feature,
    pub min: f64,
    pub max: f64,
    pub risk_direction: RiskDirection,
    pub weight: f64,
}

impl FeatureSpec {
    /// Rescale to [0, 1], clamping out-of-range values to the boundary.
    /// Inverted when lower raw values mean higher risk.
    pub fn normalize(&self, value: f64) -> f64 {
        let n = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        match self.risk_direction {
            RiskDirection::Higher => n,
            RiskDirection::Lower => 1.0 - n,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Hand-tuned table derived from random-forest feature importances
pub const DEFAULT_FEATURE_SPECS: [FeatureSpec; Feature::COUNT] = [
    FeatureSpec {
        feature: Feature::RainfallMmLast24h,
        min: 0.0,
        max: 300.0,
        risk_direction: RiskDirection::Higher,
        weight: 0.22,
    },
    FeatureSpec {
        feature: Feature::RiverLevelM,
        min: 0.5,
        max: 8.0,
        risk_direction: RiskDirection::Higher,
        weight: 0.18,
    },
    FeatureSpec {
        feature: Feature::SoilMoisturePct,
        min: 10.0,
        max: 100.0,
        risk_direction: RiskDirection::Higher,
        weight: 0.14,
    },
    FeatureSpec {
        feature: Feature::ElevationM,
        min: 1.0,
        max: 500.0,
        risk_direction: RiskDirection::Lower,
        weight: 0.16,
    },
    FeatureSpec {
        feature: Feature::DistanceToRiverKm,
        min: 0.1,
        max: 20.0,
        risk_direction: RiskDirection::Lower,
        weight: 0.12,
    },
    FeatureSpec {
        feature: Feature::PopulationDensityPerSqkm,
        min: 50.0,
        max: 10000.0,
        risk_direction: RiskDirection::Higher,
        weight: 0.06,
    },
    FeatureSpec {
        feature: Feature::HistoricalFloodEvents,
        min: 0.0,
        max: 15.0,
        risk_direction: RiskDirection::Higher,
        weight: 0.12,
    },
];
