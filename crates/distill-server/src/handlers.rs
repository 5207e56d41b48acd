//! HTTP Handlers

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use distill_core::{Aggressiveness, CompressionRequest, CompressionResponse};
use distill_report::{
    AccuracyResult, CaseStudy, ContextMultiplier, CostModel, HistogramBin, LatencyPoint, MetricRow,
    MonthlySavings, NeedleResult, ScalingPoint, ScatterPoint, cost::DEFAULT_MONTHLY_MILLIONS, data,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub compressor: String,
    pub compressor_available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub comparison: Vec<MetricRow>,
    pub accuracy: Vec<AccuracyResult>,
    pub distill_scatter: Vec<ScatterPoint>,
    pub bear1_scatter: Vec<ScatterPoint>,
    pub latency: Vec<LatencyPoint>,
    pub scaling: Vec<ScalingPoint>,
    pub histogram: Vec<HistogramBin>,
    pub needle_in_haystack: Vec<NeedleResult>,
    pub context_multiplier: ContextMultiplier,
    pub case_study: CaseStudy,
    pub cost_model: CostModel,
}

#[derive(Debug, Deserialize)]
pub struct SavingsQuery {
    #[serde(default)]
    pub volume: Option<u32>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Routes
// ============================================================================

/// API routes, without middleware or static files
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/compress_prompt", post(compress_prompt))
        .route("/api/report", get(report))
        .route("/api/savings", get(savings))
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        compressor: state.compressor.name().to_string(),
        compressor_available: state.compressor.health_check().await,
    })
}

/// Compress a prompt
pub async fn compress_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CompressionRequest>,
) -> Result<Json<CompressionResponse>, ApiError> {
    let aggressiveness = Aggressiveness::from_rate(payload.rate).map_err(|e| {
        api_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_RATE", e.to_string())
    })?;

    if !payload.use_token_level_filter {
        tracing::debug!("Token-level filter disabled by client; heuristic always filters words");
    }

    let outcome = state
        .compressor
        .compress(&payload.context, aggressiveness)
        .await
        .map_err(|e| {
            tracing::error!("Compression error: {}", e);
            let status = if e.is_transport() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            api_error(status, "COMPRESSION_ERROR", e.user_message())
        })?;

    tracing::info!(
        "Compressed {} -> {} tokens at {}",
        outcome.input_tokens,
        outcome.output_tokens,
        aggressiveness
    );

    Ok(Json(outcome.into()))
}

/// Every benchmark series on the landing page
pub async fn report(State(state): State<AppState>) -> Json<ReportResponse> {
    Json(ReportResponse {
        comparison: data::comparison(),
        accuracy: data::accuracy(),
        distill_scatter: data::distill_scatter(),
        bear1_scatter: data::bear1_scatter(),
        latency: data::latency(),
        scaling: data::scaling(),
        histogram: data::histogram(),
        needle_in_haystack: data::needle_in_haystack(),
        context_multiplier: data::context_multiplier(),
        case_study: data::case_study(),
        cost_model: state.cost_model.as_ref().clone(),
    })
}

/// Monthly savings estimate, `?volume=` in millions of tokens
pub async fn savings(
    State(state): State<AppState>,
    Query(query): Query<SavingsQuery>,
) -> Result<Json<MonthlySavings>, ApiError> {
    let volume = query.volume.unwrap_or(DEFAULT_MONTHLY_MILLIONS);
    state
        .cost_model
        .monthly(volume)
        .map(Json)
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VOLUME", e.to_string()))
}
