use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::credentials::CredentialSource;
use crate::errors::AppError;
use crate::models::credential::Credential;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct CredentialStatus {
    pub configured: bool,
    pub source: CredentialSource,
}

/// GET /api/v1/credential
/// Reports whether a key is available. The key itself is never returned.
pub async fn handle_credential_status(State(state): State<AppState>) -> Json<CredentialStatus> {
    let source = state
        .credentials
        .source(state.advisor.has_default_credential())
        .await;
    Json(CredentialStatus {
        configured: source != CredentialSource::None,
        source,
    })
}

/// PUT /api/v1/credential
pub async fn handle_set_credential(
    State(state): State<AppState>,
    Json(request): Json<SetCredentialRequest>,
) -> Result<StatusCode, AppError> {
    let credential = Credential::new(&request.api_key)
        .ok_or_else(|| AppError::Validation("api_key cannot be empty".to_string()))?;
    state.credentials.set(credential).await;
    info!("Session credential updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/credential
pub async fn handle_clear_credential(State(state): State<AppState>) -> StatusCode {
    state.credentials.clear().await;
    info!("Session credential cleared");
    StatusCode::NO_CONTENT
}
