//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::ClassifierError;
use crate::spam::{ModelStats, Prediction, SpamManager};

/// Shared application state
pub struct AppState {
    pub spam_manager: SpamManager,
}

/// Classify request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: String,
}

/// Classify response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub result: Prediction,
    pub text: String,
}

/// Train request body
#[derive(Debug, Deserialize)]
pub struct TrainRequest {
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub labels: Vec<i64>,
}

/// Train response
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub success: bool,
    /// Fit on the submitted samples themselves, not held-out accuracy
    pub accuracy: f64,
    pub message: String,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Error returned from a handler, rendered as `{error}` with a status code
#[derive(Debug)]
pub struct HandlerError {
    status: StatusCode,
    message: String,
}

impl HandlerError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ClassifierError> for HandlerError {
    fn from(err: ClassifierError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Internal classifier error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiError::new(&self.message))).into_response()
    }
}

/// POST /classify - Classify a message
pub async fn classify(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, HandlerError> {
    let Json(req) = payload?;

    if req.text.trim().is_empty() {
        return Err(HandlerError::bad_request("Please provide some text to classify"));
    }

    let result = state.spam_manager.predict(&req.text).await?;

    Ok(Json(ClassifyResponse {
        success: true,
        result,
        text: req.text,
    }))
}

/// POST /train - Retrain the model with caller-supplied data
pub async fn train(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TrainRequest>, JsonRejection>,
) -> Result<Json<TrainResponse>, HandlerError> {
    let Json(req) = payload?;

    info!("Training request with {} samples", req.texts.len());
    let report = state.spam_manager.train_texts(&req.texts, &req.labels).await?;

    Ok(Json(TrainResponse {
        success: true,
        accuracy: report.accuracy,
        message: format!(
            "Model trained successfully with {} samples (training-set accuracy)",
            report.samples
        ),
    }))
}

/// GET /stats - Model metadata
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<ModelStats> {
    Json(state.spam_manager.stats().await)
}

/// GET /health - Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "classifier-rs",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
