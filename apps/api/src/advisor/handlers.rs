//! Axum route handlers for the Advisor API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::career::{AnalysisResult, Profile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}

/// POST /api/v1/analyze
///
/// Normalises the submitted lists and returns career recommendations.
/// Model failures never surface here: the advisor substitutes its fallback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let profile = Profile::new(request.interests, request.skills);
    if !profile.is_complete() {
        return Err(AppError::Validation(
            "add at least one interest and one skill".to_string(),
        ));
    }

    let credential = state.credentials.get().await;
    let result = state.advisor.analyze(&profile, credential.as_ref()).await;

    Ok(Json(result))
}
