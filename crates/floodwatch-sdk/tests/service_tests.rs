//! Integration tests for the Floodwatch services wired through the builder

use floodwatch_core::ShelterRecord;
use floodwatch_repository::MemoryRepository;
use floodwatch_sdk::{CompassDirection, FloodwatchBuilder, RiskLabel, SdkError, ValidationError};
use serde_json::json;
use std::sync::Arc;

fn shelter(id: &str, latitude: f64, longitude: f64) -> ShelterRecord {
    ShelterRecord {
        id: id.to_string(),
        name: format!("Shelter {}", id),
        latitude,
        longitude,
        current_capacity: 0,
        max_capacity: 100,
        address: None,
        created_at: None,
        updated_at: None,
    }
}

// ============================================================================
// Shelter ranking
// ============================================================================

#[tokio::test]
async fn test_nearby_orders_by_distance() {
    let repo = Arc::new(MemoryRepository::with_shelters(vec![
        shelter("far", 41.0, -74.0),
        shelter("east", 40.0, -73.0),
        shelter("near", 40.01, -74.0),
    ]));
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo)
        .build()
        .unwrap();

    let ranked = engine
        .shelters()
        .nearby_json(&json!({"latitude": 40.0, "longitude": -74.0}))
        .await
        .unwrap();

    let ids: Vec<&str> = ranked.iter().map(|r| r.shelter.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "east", "far"]);
    assert_eq!(ranked[0].direction, CompassDirection::North);
    assert_eq!(ranked[1].direction, CompassDirection::East);
    assert_eq!(ranked[1].distance_km, 85.2);
}

#[tokio::test]
async fn test_nearby_respects_limit_and_default() {
    let shelters = (0..15)
        .map(|i| shelter(&i.to_string(), 10.0 + i as f64 * 0.01, 20.0))
        .collect();
    let repo = Arc::new(MemoryRepository::with_shelters(shelters));
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo)
        .build()
        .unwrap();

    let defaulted = engine
        .shelters()
        .nearby_json(&json!({"latitude": 10.0, "longitude": 20.0}))
        .await
        .unwrap();
    assert_eq!(defaulted.len(), 10);

    let limited = engine
        .shelters()
        .nearby_json(&json!({"latitude": 10.0, "longitude": 20.0, "limit": 3}))
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);
    assert!(limited
        .windows(2)
        .all(|pair| pair[0].distance_km <= pair[1].distance_km));
}

#[tokio::test]
async fn test_equal_distances_keep_retrieval_order() {
    let repo = Arc::new(MemoryRepository::with_shelters(vec![
        shelter("b", 5.0, 5.0),
        shelter("a", 5.0, 5.0),
        shelter("c", 5.0, 5.0),
    ]));
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo)
        .build()
        .unwrap();

    let ranked = engine
        .shelters()
        .nearby_json(&json!({"latitude": 0, "longitude": 0}))
        .await
        .unwrap();
    let ids: Vec<&str> = ranked.iter().map(|r| r.shelter.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_empty_catalogue_returns_empty() {
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(Arc::new(MemoryRepository::new()))
        .build()
        .unwrap();

    let ranked = engine
        .shelters()
        .nearby_json(&json!({"latitude": 1, "longitude": 1}))
        .await
        .unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_repository_failure_propagates() {
    let repo = Arc::new(MemoryRepository::with_shelters(vec![shelter("x", 1.0, 1.0)]));
    repo.set_available(false);
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo)
        .build()
        .unwrap();

    let err = engine
        .shelters()
        .nearby_json(&json!({"latitude": 1, "longitude": 1}))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Repository(_)));
}

#[tokio::test]
async fn test_missing_coordinate_rejected_before_retrieval() {
    let repo = Arc::new(MemoryRepository::new());
    repo.set_available(false);
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo)
        .build()
        .unwrap();

    let err = engine
        .shelters()
        .nearby_json(&json!({"latitude": 1}))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Validation(ValidationError::MissingCoordinate)
    ));
}

// ============================================================================
// Prediction
// ============================================================================

#[tokio::test]
async fn test_prediction_logged_through_builder() {
    let repo = Arc::new(MemoryRepository::new());
    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(repo.clone())
        .with_prediction_log(repo.clone())
        .build()
        .unwrap();

    let result = engine
        .predictions()
        .predict_json(&json!({
            "rainfall_mm_last_24h": 200,
            "river_level_m": 6.0,
            "soil_moisture_pct": 80,
            "elevation_m": 20,
            "distance_to_river_km": 1.0,
            "population_density_per_sqkm": 5000,
            "historical_flood_events": 8
        }))
        .unwrap();
    assert_eq!(result.risk_label, RiskLabel::High);

    // The write happens on a background task.
    let mut logged = Vec::new();
    for _ in 0..100 {
        logged = repo.predictions().await;
        if !logged.is_empty() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].predicted_risk_score, 0.75);
}

#[tokio::test]
async fn test_model_loaded_from_file() -> anyhow::Result<()> {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{
            "feature_columns": ["rainfall_mm_last_24h", "river_level_m", "soil_moisture_pct",
                "elevation_m", "distance_to_river_km", "population_density_per_sqkm",
                "historical_flood_events"],
            "feature_weights": [1.0, 0, 0, 0, 0, 0, 0],
            "feature_ranges": {{
                "rainfall_mm_last_24h": {{"min": 0, "max": 100, "risk_direction": "higher"}},
                "river_level_m": {{"min": 0, "max": 10, "risk_direction": "higher"}},
                "soil_moisture_pct": {{"min": 0, "max": 100, "risk_direction": "higher"}},
                "elevation_m": {{"min": 0, "max": 100, "risk_direction": "lower"}},
                "distance_to_river_km": {{"min": 0, "max": 10, "risk_direction": "lower"}},
                "population_density_per_sqkm": {{"min": 0, "max": 100, "risk_direction": "higher"}},
                "historical_flood_events": {{"min": 0, "max": 10, "risk_direction": "higher"}}
            }}
        }}"#
    )?;

    let engine = FloodwatchBuilder::new()
        .with_shelter_repository(Arc::new(MemoryRepository::new()))
        .with_model_path(file.path())
        .build()?;

    let result = engine.predictions().predict_json(&json!({
        "rainfall_mm_last_24h": 50,
        "river_level_m": 9,
        "soil_moisture_pct": 99,
        "elevation_m": 0,
        "distance_to_river_km": 0,
        "population_density_per_sqkm": 99,
        "historical_flood_events": 9
    }))?;
    assert_eq!(result.risk_score, 0.5);
    assert_eq!(result.risk_label, RiskLabel::Medium);
    Ok(())
}
