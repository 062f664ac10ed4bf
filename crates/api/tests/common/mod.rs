//! Common test utilities for integration tests.
//!
//! Builds the router from in-memory configuration and provides fixtures for
//! consultation bed records in the upstream JSON shape.

// Not every integration test uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use bed_timeline_api::{app::create_app, config::Config};
use fake::{faker::lorem::en::Word, Fake};
use serde_json::{json, Value};
use uuid::Uuid;

/// Test configuration with optional overrides on top of embedded defaults.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_with_overrides(overrides).expect("Failed to build test config")
}

/// Create a test application router.
pub fn create_test_app(config: Config) -> Router {
    create_app(config)
}

/// Build a JSON POST request.
pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Bed reference in upstream shape.
#[derive(Debug, Clone)]
pub struct TestBed {
    pub id: String,
    pub name: String,
    pub bed_type: String,
    pub location: String,
}

impl TestBed {
    pub fn new() -> Self {
        let suffix: String = Word().fake();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("Bed {}", suffix),
            bed_type: "ICU".to_string(),
            location: "Ward A".to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "bed_type": self.bed_type,
            "location_object": { "name": self.location }
        })
    }
}

/// Asset in upstream shape.
pub fn test_asset(name: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "name": name,
        "asset_class": "HL7MONITOR"
    })
}

/// Consultation bed record in upstream shape.
pub fn consultation_bed(
    bed: &TestBed,
    start: &str,
    end: Option<&str>,
    assets: Vec<Value>,
) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "bed_object": bed.to_json(),
        "start_date": start,
        "end_date": end,
        "assets_objects": assets
    })
}
