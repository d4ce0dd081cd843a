//! Nearby shelter service

use crate::error::Result;
use floodwatch_core::ranking::rank_shelters;
use floodwatch_core::{coerce_number, Coordinate, RankedShelter, ValidationError};
use floodwatch_repository::ShelterRepository;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of shelters returned
pub const DEFAULT_SHELTER_LIMIT: usize = 10;

/// Validated nearby-shelter request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub origin: Coordinate,
    pub limit: usize,
}

impl NearbyQuery {
    pub fn new(origin: Coordinate, limit: usize) -> std::result::Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::InvalidLimit);
        }
        Ok(Self { origin, limit })
    }

    /// Parse `{latitude, longitude, limit?}`.
    ///
    /// Absent or null coordinates are reported together; `0` is a valid
    /// coordinate. A missing `limit` falls back to `default_limit`.
    pub fn from_json(
        body: &Value,
        default_limit: usize,
    ) -> std::result::Result<Self, ValidationError> {
        let latitude = coordinate_field(body, "latitude")?;
        let longitude = coordinate_field(body, "longitude")?;

        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(ValidationError::MissingCoordinate),
        };

        let limit = match body.get("limit") {
            None | Some(Value::Null) => default_limit,
            Some(raw) => parse_limit(raw)?,
        };

        Self::new(Coordinate::new(latitude, longitude)?, limit)
    }
}

fn coordinate_field(
    body: &Value,
    key: &'static str,
) -> std::result::Result<Option<f64>, ValidationError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => coerce_number(raw)
            .map(Some)
            .ok_or(ValidationError::InvalidNumber(key)),
    }
}

fn parse_limit(raw: &Value) -> std::result::Result<usize, ValidationError> {
    raw.as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64)
        .map(|n| n as usize)
        .ok_or(ValidationError::InvalidLimit)
}

/// Fetches the shelter catalogue and ranks it by distance from the caller
#[derive(Clone)]
pub struct ShelterRankingService {
    repository: Arc<dyn ShelterRepository>,
    default_limit: NonZeroUsize,
}

impl ShelterRankingService {
    pub fn new(repository: Arc<dyn ShelterRepository>) -> Self {
        Self {
            repository,
            default_limit: NonZeroUsize::new(DEFAULT_SHELTER_LIMIT).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Override the limit used when a request omits one
    pub fn with_default_limit(mut self, limit: NonZeroUsize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit.get()
    }

    /// Validate an untyped request body and rank
    pub async fn nearby_json(&self, body: &Value) -> Result<Vec<RankedShelter>> {
        let query = NearbyQuery::from_json(body, self.default_limit.get())?;
        self.nearby(&query).await
    }

    /// Rank every stored shelter by distance from `query.origin`.
    ///
    /// Retrieval failures are returned as-is; nothing is retried.
    pub async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<RankedShelter>> {
        let shelters = self.repository.list_shelters().await?;
        let total = shelters.len();
        let ranked = rank_shelters(query.origin, shelters, query.limit);

        tracing::info!(
            "Ranked {} of {} shelters around ({}, {})",
            ranked.len(),
            total,
            query.origin.latitude,
            query.origin.longitude
        );

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodwatch_core::ShelterRecord;
    use floodwatch_repository::MemoryRepository;
    use serde_json::json;

    fn shelters(count: usize) -> Vec<ShelterRecord> {
        (0..count)
            .map(|i| ShelterRecord {
                id: i.to_string(),
                name: format!("Shelter {}", i),
                latitude: i as f64 * 0.01,
                longitude: 0.0,
                current_capacity: 0,
                max_capacity: 10,
                address: None,
                created_at: None,
                updated_at: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_service_default_limit_applies_without_limit() {
        let repo = Arc::new(MemoryRepository::with_shelters(shelters(12)));
        let service = ShelterRankingService::new(repo.clone());
        assert_eq!(service.default_limit(), DEFAULT_SHELTER_LIMIT);

        let three = NonZeroUsize::new(3).unwrap();
        let service = ShelterRankingService::new(repo).with_default_limit(three);
        let ranked = service
            .nearby_json(&json!({"latitude": 0, "longitude": 0}))
            .await
            .unwrap();
        assert_eq!(service.default_limit(), 3);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_from_json_defaults_limit() {
        let query = NearbyQuery::from_json(&json!({"latitude": 1.5, "longitude": 2.5}), 10).unwrap();
        assert_eq!(query.origin.latitude, 1.5);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_from_json_zero_coordinate_is_valid() {
        let query = NearbyQuery::from_json(&json!({"latitude": 0, "longitude": 0}), 10).unwrap();
        assert_eq!(query.origin.latitude, 0.0);
        assert_eq!(query.origin.longitude, 0.0);
    }

    #[test]
    fn test_from_json_missing_coordinate() {
        for body in [
            json!({"latitude": 10}),
            json!({"longitude": 10}),
            json!({"latitude": null, "longitude": 10}),
            json!({}),
        ] {
            assert_eq!(
                NearbyQuery::from_json(&body, 10).unwrap_err(),
                ValidationError::MissingCoordinate
            );
        }
    }

    #[test]
    fn test_from_json_numeric_string_coordinate() {
        let query =
            NearbyQuery::from_json(&json!({"latitude": "40.5", "longitude": -74}), 10).unwrap();
        assert_eq!(query.origin.latitude, 40.5);
    }

    #[test]
    fn test_from_json_non_numeric_coordinate() {
        let err = NearbyQuery::from_json(&json!({"latitude": "north", "longitude": 0}), 10)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("latitude"));
    }

    #[test]
    fn test_from_json_out_of_range() {
        let err =
            NearbyQuery::from_json(&json!({"latitude": 91, "longitude": 0}), 10).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CoordinateOutOfRange {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn test_from_json_limits() {
        let base = |limit: Value| json!({"latitude": 0, "longitude": 0, "limit": limit});

        assert_eq!(NearbyQuery::from_json(&base(json!(3)), 10).unwrap().limit, 3);
        assert_eq!(NearbyQuery::from_json(&base(json!(3.0)), 10).unwrap().limit, 3);
        assert_eq!(NearbyQuery::from_json(&base(Value::Null), 7).unwrap().limit, 7);

        for bad in [json!(0), json!(-2), json!(2.5), json!("5"), json!(true)] {
            assert_eq!(
                NearbyQuery::from_json(&base(bad), 10).unwrap_err(),
                ValidationError::InvalidLimit
            );
        }
    }
}
