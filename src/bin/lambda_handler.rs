//! AWS Lambda handler for CMA projections
//!
//! Accepts the projection input record as a JSON body through API Gateway or
//! a function URL and returns the full report bundle with summary figures.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use aws_lambda_events::http::{HeaderMap, HeaderValue, Method};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use cma_engine::{CmaInput, CmaReport, ProjectionConfig, ProjectionEngine, ProjectionSummary};

/// Request body: the input record plus optional engine overrides
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: CmaInput,

    #[serde(default)]
    pub config: ProjectionConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub report: CmaReport,
    pub summary: ProjectionSummary,
    pub execution_time_ms: u64,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert("Access-Control-Allow-Methods", HeaderValue::from_static("POST, OPTIONS"));
    headers.insert("Access-Control-Allow-Headers", HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status: i64, body: Option<String>) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: status,
        headers: cors_headers(),
        body: body.map(Body::Text),
        ..Default::default()
    }
}

fn error_response(status: i64, message: &str) -> ApiGatewayProxyResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    response(status, Some(body))
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.http_method == Method::OPTIONS {
        return Ok(response(200, None));
    }

    let body = request.body.as_deref().unwrap_or("{}");
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let engine = ProjectionEngine::new(request.config);
    let projection = match engine.run(&request.input) {
        Ok(p) => p,
        Err(e) => {
            warn!("Rejected projection input: {}", e);
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let payload = ProjectionResponse {
        report: projection.report(),
        summary: projection.summary(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Projected {} years in {} ms",
        payload.summary.projected_years,
        payload.execution_time_ms
    );

    Ok(response(200, Some(serde_json::to_string(&payload)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
