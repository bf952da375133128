// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! REST API server implementation using axum.
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/version` - Get server version
//! - `POST /api/v1/budget` - Error budget + robustness for posted parameters
//! - `POST /api/v1/robustness` - Robustness only
//! - `GET /api/v1/configs` - List saved configurations
//! - `GET|PUT|DELETE /api/v1/configs/{name}` - Manage a saved configuration
//! - `GET /api/v1/configs/{name}/budget[?strict=false]` - Error budget for a saved configuration

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ServerState;
use crate::analysis::{analyze, CalibrationAnalysis};
use crate::budget::{
    estimate_robustness, render_budget, render_robustness, ErrorBudget, HardwareParams,
    RobustnessEstimate,
};
use crate::config::{CorsConfig, ServerConfig};
use crate::error::{Error, Result};
use crate::validation::validate_hardware_params;

/// REST server for the calibration service.
pub struct RestServer {
    state: Arc<ServerState>,
}

impl RestServer {
    /// Create a new REST server.
    pub fn new(state: Arc<ServerState>) -> Self {
        Self { state }
    }

    /// Build the router with all routes and layers.
    pub fn router(&self, cors: &CorsConfig) -> Router {
        Router::new()
            .route("/api/v1/health", get(health_check))
            .route("/api/v1/version", get(get_version))
            .route("/api/v1/budget", post(budget))
            .route("/api/v1/robustness", post(robustness))
            .route("/api/v1/configs", get(list_configs))
            .route(
                "/api/v1/configs/:name",
                get(get_config).put(save_config).delete(delete_config),
            )
            .route("/api/v1/configs/:name/budget", get(config_budget))
            .layer(cors_layer(cors))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the REST server.
    pub async fn serve(self, config: &ServerConfig) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid REST address: {}", e)))?;

        info!(address = %addr, "Starting REST server");

        let app = self.router(&config.cors);
        let mut shutdown_rx = self.state.shutdown_receiver();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Server(format!("Failed to bind REST server: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
                info!("REST server shutting down");
            })
            .await
            .map_err(|e| Error::Server(format!("REST server error: {}", e)))?;

        Ok(())
    }
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allow_all {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// Request/Response types
// =============================================================================

/// Budget or robustness request: hardware parameters plus an optional
/// validation mode override.
#[derive(Debug, Deserialize)]
struct BudgetRequest {
    #[serde(flatten)]
    params: HardwareParams,
    strict: Option<bool>,
}

/// Validation mode override for routes without a request body.
#[derive(Debug, Default, Deserialize)]
struct StrictQuery {
    strict: Option<bool>,
}

/// Full analysis response.
#[derive(Debug, Serialize)]
struct AnalysisResponse {
    request_id: String,
    budget: ErrorBudget,
    robustness: [RobustnessEstimate; 3],
    warnings: Vec<String>,
    report: String,
}

impl AnalysisResponse {
    fn new(analysis: CalibrationAnalysis) -> Self {
        let report = format!(
            "{}\n\n{}",
            render_budget(&analysis.budget),
            render_robustness(&analysis.robustness)
        );
        Self {
            request_id: Uuid::new_v4().to_string(),
            warnings: analysis.warning_messages(),
            budget: analysis.budget,
            robustness: analysis.robustness,
            report,
        }
    }
}

/// Robustness-only response.
#[derive(Debug, Serialize)]
struct RobustnessResponse {
    request_id: String,
    robustness: [RobustnessEstimate; 3],
    warnings: Vec<String>,
    report: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    saved_configs: usize,
}

/// Saved configuration list.
#[derive(Debug, Serialize)]
struct ConfigsResponse {
    configs: Vec<String>,
}

/// A single saved configuration.
#[derive(Debug, Serialize)]
struct ConfigResponse {
    name: String,
    params: HardwareParams,
}

/// Result of saving a configuration.
#[derive(Debug, Serialize)]
struct SaveResponse {
    name: String,
    replaced: bool,
    warnings: Vec<String>,
}

/// Version response.
#[derive(Debug, Serialize)]
struct VersionResponse {
    version: String,
    name: String,
}

/// Error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

type ApiResult<T> = std::result::Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = e.status_code();
    if status.is_server_error() {
        tracing::error!(error = %e, "Request failed");
    } else {
        debug!(error = %e, "Request rejected");
    }
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
            code: e.code().to_string(),
        }),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_check(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        saved_configs: state.store.len(),
    })
}

/// Error budget endpoint.
async fn budget(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<BudgetRequest>,
) -> ApiResult<AnalysisResponse> {
    let strict = req.strict.unwrap_or(state.strict);
    debug!(params = ?req.params, strict, "REST budget request");

    let analysis = analyze(&req.params, strict).map_err(error_response)?;
    Ok(Json(AnalysisResponse::new(analysis)))
}

/// Robustness endpoint.
async fn robustness(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<BudgetRequest>,
) -> ApiResult<RobustnessResponse> {
    let strict = req.strict.unwrap_or(state.strict);
    let warnings = validate_hardware_params(&req.params, strict).map_err(error_response)?;
    let robustness = estimate_robustness(&req.params);

    Ok(Json(RobustnessResponse {
        request_id: Uuid::new_v4().to_string(),
        robustness,
        warnings: warnings.iter().map(ToString::to_string).collect(),
        report: render_robustness(&robustness),
    }))
}

/// List saved configurations.
async fn list_configs(State(state): State<Arc<ServerState>>) -> Json<ConfigsResponse> {
    Json(ConfigsResponse {
        configs: state.store.list(),
    })
}

/// Get a saved configuration.
async fn get_config(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> ApiResult<ConfigResponse> {
    let params = state.store.get(&name).map_err(error_response)?;
    Ok(Json(ConfigResponse { name, params }))
}

/// Save (create or replace) a configuration.
async fn save_config(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
    Json(params): Json<HardwareParams>,
) -> ApiResult<SaveResponse> {
    let saved = state.store.save(&name, params).map_err(error_response)?;

    Ok(Json(SaveResponse {
        name,
        replaced: saved.previous.is_some(),
        warnings: saved.warnings.iter().map(ToString::to_string).collect(),
    }))
}

/// Delete a saved configuration.
async fn delete_config(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> ApiResult<ConfigResponse> {
    let params = state.store.remove(&name).map_err(error_response)?;
    Ok(Json(ConfigResponse { name, params }))
}

/// Error budget for a saved configuration.
async fn config_budget(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
    Query(query): Query<StrictQuery>,
) -> ApiResult<AnalysisResponse> {
    let params = state.store.get(&name).map_err(error_response)?;
    let strict = query.strict.unwrap_or(state.strict);
    let analysis = analyze(&params, strict).map_err(error_response)?;
    Ok(Json(AnalysisResponse::new(analysis)))
}

/// Get version endpoint.
async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: "QubitOS Calibration".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Regime;
    use crate::test_utils::{params, reference_params, server_state};

    fn request(params: HardwareParams, strict: Option<bool>) -> Json<BudgetRequest> {
        Json(BudgetRequest { params, strict })
    }

    #[tokio::test]
    async fn test_router_builds() {
        let server = RestServer::new(server_state());
        let _ = server.router(&CorsConfig::default());
        let mut cors = CorsConfig::default();
        cors.allow_all = true;
        let _ = server.router(&cors);
    }

    #[test]
    fn test_budget_request_flattened() {
        let body = r#"{
            "anharmonicity_mhz": -200,
            "t1_us": 37,
            "t2_us": 9.6,
            "gate_time_ns": 20,
            "strict": false
        }"#;
        let req: BudgetRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.params, reference_params());
        assert_eq!(req.strict, Some(false));
    }

    #[tokio::test]
    async fn test_health() {
        let Json(resp) = health_check(State(server_state())).await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.saved_configs, 1);
    }

    #[tokio::test]
    async fn test_budget_ok() {
        let Json(resp) = budget(State(server_state()), request(reference_params(), None))
            .await
            .unwrap();
        assert_eq!(resp.budget.regime, Regime::DragSufficient);
        assert_eq!(resp.robustness.len(), 3);
        assert!(resp.warnings.is_empty());
        assert!(resp.report.contains("Decoherence floor:"));
        assert!(resp.report.contains("Robustness"));
        assert!(Uuid::parse_str(&resp.request_id).is_ok());
    }

    #[tokio::test]
    async fn test_budget_validation_error() {
        let (status, Json(err)) = budget(
            State(server_state()),
            request(params(-200.0, 37.0, 9.6, 0.0), None),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(err.error.contains("gate_time_ns"));
    }

    #[tokio::test]
    async fn test_budget_strict_override() {
        let unphysical = params(-200.0, 10.0, 25.0, 20.0);

        // Server default is strict
        let result = budget(State(server_state()), request(unphysical, None)).await;
        assert!(result.is_err());

        let Json(resp) = budget(State(server_state()), request(unphysical, Some(false)))
            .await
            .unwrap();
        assert_eq!(resp.warnings.len(), 1);
        assert_eq!(resp.budget.decoherence_floor.t2_contribution, 0.0);
    }

    #[tokio::test]
    async fn test_robustness_endpoint() {
        let Json(resp) = robustness(State(server_state()), request(reference_params(), None))
            .await
            .unwrap();
        assert_eq!(resp.robustness, estimate_robustness(&reference_params()));
        assert!(resp.report.contains("GRAPE"));
    }

    #[tokio::test]
    async fn test_config_crud() {
        let state = server_state();

        let Json(list) = list_configs(State(state.clone())).await;
        assert_eq!(list.configs, vec!["reference"]);

        let Json(saved) = save_config(
            State(state.clone()),
            Path("q1".to_string()),
            Json(reference_params().with_gate_time(40.0)),
        )
        .await
        .unwrap();
        assert!(!saved.replaced);

        let Json(got) = get_config(State(state.clone()), Path("q1".to_string()))
            .await
            .unwrap();
        assert_eq!(got.params.gate_time_ns, 40.0);

        let Json(deleted) = delete_config(State(state.clone()), Path("q1".to_string()))
            .await
            .unwrap();
        assert_eq!(deleted.name, "q1");

        let (status, _) = get_config(State(state), Path("q1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_config_reports_warnings() {
        let Json(saved) = save_config(
            State(server_state()),
            Path("odd".to_string()),
            Json(params(200.0, 37.0, 9.6, 20.0)),
        )
        .await
        .unwrap();
        assert_eq!(saved.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_config_budget() {
        let Json(resp) = config_budget(
            State(server_state()),
            Path("reference".to_string()),
            Query(StrictQuery::default()),
        )
        .await
        .unwrap();
        assert_eq!(resp.budget.hardware, reference_params());

        let (status, Json(err)) = config_budget(
            State(server_state()),
            Path("missing".to_string()),
            Query(StrictQuery::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_config_budget_accepts_lenient_override() {
        let state = server_state();
        let unphysical = params(-200.0, 10.0, 25.0, 20.0);

        let Json(saved) = save_config(
            State(state.clone()),
            Path("odd".to_string()),
            Json(unphysical),
        )
        .await
        .unwrap();
        assert_eq!(saved.warnings.len(), 1);

        // Server default is strict
        let (status, _) = config_budget(
            State(state.clone()),
            Path("odd".to_string()),
            Query(StrictQuery::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let Json(resp) = config_budget(
            State(state),
            Path("odd".to_string()),
            Query(StrictQuery {
                strict: Some(false),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.warnings.len(), 1);
        assert_eq!(resp.budget.decoherence_floor.t2_contribution, 0.0);
    }

    #[test]
    fn test_strict_query_parses() {
        let uri: axum::http::Uri = "/api/v1/configs/odd/budget?strict=false".parse().unwrap();
        let Query(query) = Query::<StrictQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.strict, Some(false));

        let uri: axum::http::Uri = "/api/v1/configs/odd/budget".parse().unwrap();
        let Query(query) = Query::<StrictQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.strict, None);
    }

    #[tokio::test]
    async fn test_budget_overflow_rejected() {
        let (status, Json(err)) = budget(
            State(server_state()),
            request(params(-1e-160, 37.0, 9.6, 20.0), None),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.error.contains("not finite"));
    }

    #[tokio::test]
    async fn test_version() {
        let Json(resp) = get_version().await;
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }
}
