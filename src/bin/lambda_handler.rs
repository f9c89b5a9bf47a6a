//! AWS Lambda handler exposing the projection engine over HTTP
//!
//! Accepts the projection request as JSON and returns the three scenario
//! summaries plus the chart series. Supports Lambda Function URLs for direct
//! HTTP access.

use investment_projector::{ProjectionEngine, ProjectionRequest, ProjectionResult};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

/// Output from the projection
#[derive(Debug, Serialize)]
struct ProjectionResponse {
    result: ProjectionResult,
    point_count: usize,
    execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    // Both validation and rate errors are client errors: the computation is
    // deterministic, so retrying the same request cannot succeed.
    let engine = ProjectionEngine::default();
    let result = match engine.project_request(&request) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let response = ProjectionResponse {
        point_count: result.series.len(),
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
