pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::chat::handlers as chat;
use crate::credentials::handlers as credentials;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Credential
        .route(
            "/api/v1/credential",
            get(credentials::handle_credential_status)
                .put(credentials::handle_set_credential)
                .delete(credentials::handle_clear_credential),
        )
        // Advisor
        .route("/api/v1/analyze", post(advisor::handle_analyze))
        // Chat
        .route("/api/v1/chats", post(chat::handle_open_chat))
        .route(
            "/api/v1/chats/:id",
            get(chat::handle_get_chat).delete(chat::handle_close_chat),
        )
        .route("/api/v1/chats/:id/messages", post(chat::handle_ask))
        .with_state(state)
}
