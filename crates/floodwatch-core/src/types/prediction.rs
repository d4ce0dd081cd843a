//! Prediction request and result types
//!
//! `PredictionInput` is built from an untyped JSON body so that validation can
//! report the first offending field by name instead of a generic serde error.

use super::coerce_number;
use crate::error::ValidationError;
use crate::risk::Feature;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The seven environmental measurements a prediction is made from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub rainfall_mm_last_24h: f64,
    pub river_level_m: f64,
    pub soil_moisture_pct: f64,
    pub elevation_m: f64,
    pub distance_to_river_km: f64,
    pub population_density_per_sqkm: f64,
    pub historical_flood_events: f64,
}

impl PredictionInput {
    /// Validate and coerce a JSON request body.
    ///
    /// Fields are checked in feature order and the first failure wins.
    /// A non-object body behaves like an empty object.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object();
        let mut values = [0.0_f64; Feature::COUNT];

        for (slot, feature) in values.iter_mut().zip(Feature::ALL) {
            let key = feature.key();
            let raw = match fields.and_then(|map| map.get(key)) {
                None | Some(Value::Null) => return Err(ValidationError::MissingField(key)),
                Some(raw) => raw,
            };
            *slot = coerce_number(raw).ok_or(ValidationError::InvalidNumber(key))?;
        }

        let [rainfall_mm_last_24h, river_level_m, soil_moisture_pct, elevation_m, distance_to_river_km, population_density_per_sqkm, historical_flood_events] =
            values;

        Ok(Self {
            rainfall_mm_last_24h,
            river_level_m,
            soil_moisture_pct,
            elevation_m,
            distance_to_river_km,
            population_density_per_sqkm,
            historical_flood_events,
        })
    }

    /// Raw value of one feature
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::RainfallMmLast24h => self.rainfall_mm_last_24h,
            Feature::RiverLevelM => self.river_level_m,
            Feature::SoilMoisturePct => self.soil_moisture_pct,
            Feature::ElevationM => self.elevation_m,
            Feature::DistanceToRiverKm => self.distance_to_river_km,
            Feature::PopulationDensityPerSqkm => self.population_density_per_sqkm,
            Feature::HistoricalFloodEvents => self.historical_flood_events,
        }
    }

    /// Copy with one feature replaced
    pub fn with_value(mut self, feature: Feature, value: f64) -> Self {
        let slot = match feature {
            Feature::RainfallMmLast24h => &mut self.rainfall_mm_last_24h,
            Feature::RiverLevelM => &mut self.river_level_m,
            Feature::SoilMoisturePct => &mut self.soil_moisture_pct,
            Feature::ElevationM => &mut self.elevation_m,
            Feature::DistanceToRiverKm => &mut self.distance_to_river_km,
            Feature::PopulationDensityPerSqkm => &mut self.population_density_per_sqkm,
            Feature::HistoricalFloodEvents => &mut self.historical_flood_events,
        };
        *slot = value;
        self
    }
}

/// Discrete flood-risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single prediction, computed fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk_label: RiskLabel,

    /// Weighted score in [0, 1], rounded to 2 decimals
    pub risk_score: f64,

    pub explanation: String,
}

/// Row appended to the prediction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(flatten)]
    pub input: PredictionInput,
    pub predicted_risk_label: RiskLabel,
    pub predicted_risk_score: f64,
}

impl PredictionRecord {
    pub fn new(input: PredictionInput, result: &PredictionResult) -> Self {
        Self {
            input,
            predicted_risk_label: result.risk_label,
            predicted_risk_score: result.risk_score,
        }
    }
}
