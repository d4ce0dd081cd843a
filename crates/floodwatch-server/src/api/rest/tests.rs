//! Tests for REST API components

#![cfg(test)]

use super::router::CORS_ALLOWED_HEADERS;
use super::types::*;
use axum::http::HeaderName;
use serde_json::json;

#[test]
fn test_health_response_serialization() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"status": "healthy", "version": "0.1.0"}));
}

#[test]
fn test_shelters_response_empty() {
    let response = SheltersResponse {
        shelters: Vec::new(),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"shelters": []}));
}

#[test]
fn test_shelters_response_flattens_record() {
    let body = json!({
        "shelters": [{
            "id": "s1",
            "name": "Civic Hall",
            "latitude": 1.0,
            "longitude": 2.0,
            "current_capacity": 3,
            "max_capacity": 50,
            "address": null,
            "distance_km": 4.2,
            "direction": "SW"
        }]
    });

    let response: SheltersResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(response.shelters[0].shelter.name, "Civic Hall");
    assert_eq!(serde_json::to_value(&response).unwrap(), body);
}

#[test]
fn test_cors_headers_are_valid_header_names() {
    for name in CORS_ALLOWED_HEADERS {
        assert_eq!(HeaderName::from_static(name).as_str(), name);
    }
}
