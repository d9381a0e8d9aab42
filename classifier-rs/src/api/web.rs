use askama_axum::Template;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::api::handlers::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    is_trained: bool,
    model_type: String,
    vectorizer: String,
    features: usize,
    vocabulary_size: usize,
    version: String,
}

// Single-page UI (GET /)
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.spam_manager.stats().await;

    IndexTemplate {
        is_trained: stats.is_trained,
        model_type: stats.model_type.to_string(),
        vectorizer: stats.vectorizer.to_string(),
        features: stats.features,
        vocabulary_size: stats.vocabulary_size,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
