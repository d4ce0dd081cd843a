//! Coordinates and shelter records

use crate::error::ValidationError;
use crate::geo::CompassDirection;
use serde::{Deserialize, Deserializer, Serialize};

/// A validated WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside [-90, 90] / [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

fn check_range(field: &'static str, value: f64, bound: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::CoordinateOutOfRange {
            field,
            value,
            min: -bound,
            max: bound,
        })
    }
}

/// Shelter row as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterRecord {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "lenient_f64")]
    pub latitude: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub longitude: f64,

    #[serde(default)]
    pub current_capacity: i64,

    pub max_capacity: i64,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ShelterRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Shelter annotated with distance and direction from the requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedShelter {
    #[serde(flatten)]
    pub shelter: ShelterRecord,

    /// Great-circle distance, rounded to 1 decimal
    pub distance_km: f64,

    pub direction: CompassDirection,
}

/// Datastore numeric columns may be serialized as strings.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid number '{}': {}", s, e))),
    }
}
