//! Session-scoped credential held in memory. The advisor only ever reads it.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::credential::Credential;

pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Supplied by the user through the credential form.
    Session,
    /// `GEMINI_API_KEY` from the environment.
    Default,
    None,
}

#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<Credential>>>,
}

impl CredentialStore {
    pub async fn get(&self) -> Option<Credential> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, credential: Credential) {
        *self.inner.write().await = Some(credential);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// Where the credential used for the next call would come from.
    pub async fn source(&self, has_default: bool) -> CredentialSource {
        if self.inner.read().await.is_some() {
            CredentialSource::Session
        } else if has_default {
            CredentialSource::Default
        } else {
            CredentialSource::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_set_get_clear() {
        let store = CredentialStore::default();
        assert!(store.get().await.is_none());

        store.set(Credential::new("abc").unwrap()).await;
        assert_eq!(store.get().await.unwrap().expose(), "abc");

        store.clear().await;
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_source_prefers_session_over_default() {
        let store = CredentialStore::default();
        assert_eq!(store.source(false).await, CredentialSource::None);
        assert_eq!(store.source(true).await, CredentialSource::Default);

        store.set(Credential::new("abc").unwrap()).await;
        assert_eq!(store.source(true).await, CredentialSource::Session);
    }
}
