use crate::advisor::CareerAdvisor;
use crate::chat::ChatStore;
use crate::credentials::CredentialStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from `Config`; handlers never construct their own.
    pub advisor: CareerAdvisor,
    pub credentials: CredentialStore,
    pub chats: ChatStore,
}

impl AppState {
    pub fn new(advisor: CareerAdvisor) -> Self {
        Self {
            advisor,
            credentials: CredentialStore::default(),
            chats: ChatStore::default(),
        }
    }
}
