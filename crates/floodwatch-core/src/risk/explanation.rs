//! Human-readable rationale for a prediction
//!
//! Works on raw input values only. The weighted score is never consulted, so
//! the factors listed here can disagree with what actually drove the label.

use crate::types::{PredictionInput, RiskLabel};

const HEAVY_RAINFALL_MM: f64 = 150.0;
const HIGH_RIVER_LEVEL_M: f64 = 5.0;
const SATURATED_SOIL_PCT: f64 = 70.0;
const LOW_ELEVATION_M: f64 = 50.0;
const RIVER_PROXIMITY_KM: f64 = 2.0;
const FLOOD_PRONE_EVENTS: f64 = 5.0;

/// One phrase per alarm threshold crossed, in fixed order
pub fn alarm_factors(input: &PredictionInput) -> Vec<String> {
    let mut factors = Vec::new();

    if input.rainfall_mm_last_24h > HEAVY_RAINFALL_MM {
        factors.push(format!("heavy rainfall ({}mm)", input.rainfall_mm_last_24h));
    }
    if input.river_level_m > HIGH_RIVER_LEVEL_M {
        factors.push(format!("high river level ({}m)", input.river_level_m));
    }
    if input.soil_moisture_pct > SATURATED_SOIL_PCT {
        factors.push(format!("saturated soil ({}%)", input.soil_moisture_pct));
    }
    if input.elevation_m < LOW_ELEVATION_M {
        factors.push(format!("low elevation ({}m)", input.elevation_m));
    }
    if input.distance_to_river_km < RIVER_PROXIMITY_KM {
        factors.push(format!(
            "proximity to river ({}km)",
            input.distance_to_river_km
        ));
    }
    if input.historical_flood_events > FLOOD_PRONE_EVENTS {
        factors.push(format!(
            "flood-prone area ({} past events)",
            input.historical_flood_events
        ));
    }

    factors
}

/// Lead sentence keyed by label, followed by triggered factors.
///
/// Low always gets its generic sentence.
pub fn compose_explanation(input: &PredictionInput, label: RiskLabel) -> String {
    let factors = alarm_factors(input);

    match (label, factors.is_empty()) {
        (RiskLabel::High, false) => format!(
            "High flood risk due to: {}. Immediate precautions recommended.",
            factors.join(", ")
        ),
        (RiskLabel::High, true) => {
            "High flood risk based on combined environmental factors. Stay alert and prepared."
                .to_string()
        }
        (RiskLabel::Medium, false) => format!(
            "Moderate flood risk due to: {}. Monitor conditions closely.",
            factors.join(", ")
        ),
        (RiskLabel::Medium, true) => {
            "Moderate flood risk detected. Keep monitoring weather and river conditions."
                .to_string()
        }
        (RiskLabel::Low, _) => {
            "Low flood risk under current conditions. Continue monitoring for any changes."
                .to_string()
        }
    }
}
