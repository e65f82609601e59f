//! Career chat sessions — one append-only transcript per career topic.
//!
//! Sessions live in memory only and are dropped when the user navigates back,
//! or once they sit idle longer than the store's idle limit.
//! A session accepts one outstanding question at a time.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::chat::ChatMessage;

pub mod handlers;

/// Sessions untouched for this long are pruned when a new chat is opened.
pub const DEFAULT_IDLE_MINUTES: i64 = 120;

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What tests or exams are required?",
    "What subjects should I focus on?",
    "What is the typical salary range?",
    "How long does it take to qualify?",
    "What skills do I need to develop?",
];

pub fn greeting(career_title: &str) -> String {
    format!(
        "Hi! I'm here to answer any questions you have about becoming a {career_title}. Feel free \
         to ask about required tests, educational qualifications, subjects to focus on, salary \
         expectations, or anything else!"
    )
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub career_title: String,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
    last_activity: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(career_title: impl Into<String>) -> Self {
        let career_title = career_title.into();
        let opening = ChatMessage::assistant(greeting(&career_title));
        Self {
            id: Uuid::new_v4(),
            career_title,
            last_activity: opening.timestamp,
            messages: vec![opening],
            awaiting_reply: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Appends the user's question and locks the session until the answer lands.
    fn push_question(&mut self, question: &str) -> Result<ChatMessage, AppError> {
        if self.awaiting_reply {
            return Err(AppError::Conflict(
                "a question is already awaiting an answer".to_string(),
            ));
        }
        let message = ChatMessage::user(question);
        self.last_activity = message.timestamp;
        self.messages.push(message.clone());
        self.awaiting_reply = true;
        Ok(message)
    }

    fn push_answer(&mut self, answer: String) -> ChatMessage {
        let message = ChatMessage::assistant(answer);
        self.last_activity = message.timestamp;
        self.messages.push(message.clone());
        self.awaiting_reply = false;
        message
    }

    /// Unlocks the session without an answer. The question stays in the transcript.
    fn abandon_question(&mut self) {
        self.awaiting_reply = false;
        self.last_activity = Utc::now();
    }

    fn is_idle(&self, now: DateTime<Utc>, idle_limit: Duration) -> bool {
        !self.awaiting_reply && now - self.last_activity > idle_limit
    }

    /// Suggestions are offered until the user asks the first question.
    pub fn view(&self) -> ChatSessionView {
        let suggested_questions = if self.messages.len() == 1 {
            SUGGESTED_QUESTIONS.to_vec()
        } else {
            Vec::new()
        };
        ChatSessionView {
            id: self.id,
            career_title: self.career_title.clone(),
            messages: self.messages().to_vec(),
            suggested_questions,
            awaiting_reply: self.awaiting_reply(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSessionView {
    pub id: Uuid,
    pub career_title: String,
    pub messages: Vec<ChatMessage>,
    pub suggested_questions: Vec<&'static str>,
    pub awaiting_reply: bool,
}

/// In-memory chat sessions. No lock is held while an answer is generated.
#[derive(Clone)]
pub struct ChatStore {
    sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
    idle_limit: Duration,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::with_idle_limit(Duration::minutes(DEFAULT_IDLE_MINUTES))
    }
}

impl ChatStore {
    pub fn with_idle_limit(idle_limit: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_limit,
        }
    }

    /// Opens a new chat, pruning sessions the client walked away from.
    pub async fn open(&self, career_title: &str) -> ChatSessionView {
        let session = ChatSession::new(career_title);
        let view = session.view();

        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, self.idle_limit));
        if sessions.len() < before {
            debug!("Pruned {} idle chat session(s)", before - sessions.len());
        }
        sessions.insert(session.id, session);

        view
    }

    pub async fn view(&self, id: Uuid) -> Option<ChatSessionView> {
        self.sessions.read().await.get(&id).map(ChatSession::view)
    }

    /// Discards the transcript. Returns false if the session did not exist.
    pub async fn close(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Records a question and locks the session.
    ///
    /// The returned guard unlocks the session again if it is dropped before
    /// `PendingQuestion::finish` completes, e.g. when the client disconnects.
    pub async fn begin_question(&self, id: Uuid, question: &str) -> Result<PendingQuestion, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Chat {id} not found")))?;
        let message = session.push_question(question)?;

        Ok(PendingQuestion {
            question: message,
            career_title: session.career_title.clone(),
            store: self.clone(),
            id,
            armed: true,
        })
    }

    /// Records the answer. `None` if the session was closed in the meantime.
    async fn finish_question(&self, id: Uuid, answer: String) -> Option<ChatMessage> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(|session| session.push_answer(answer))
    }

    async fn abandon_question(&self, id: Uuid) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.abandon_question();
        }
    }
}

/// A question that has been recorded but not yet answered.
pub struct PendingQuestion {
    pub question: ChatMessage,
    pub career_title: String,
    store: ChatStore,
    id: Uuid,
    armed: bool,
}

impl PendingQuestion {
    /// Records the answer and releases the session.
    pub async fn finish(mut self, answer: String) -> Option<ChatMessage> {
        let message = self.store.finish_question(self.id, answer).await;
        self.armed = false;
        message
    }
}

impl Drop for PendingQuestion {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let store = self.store.clone();
        let id = self.id;
        match Handle::try_current() {
            Ok(handle) => {
                debug!("Question on chat {id} abandoned before its answer");
                handle.spawn(async move { store.abandon_question(id).await });
            }
            Err(_) => warn!("Chat {id} left locked: no runtime to release it"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatRole;

    #[test]
    fn test_new_session_starts_with_greeting() {
        let session = ChatSession::new("Gemologist");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Assistant);
        assert!(session.messages()[0]
            .content
            .starts_with("Hi! I'm here to answer any questions you have about becoming a Gemologist."));
    }

    #[test]
    fn test_suggestions_only_before_first_question() {
        let mut session = ChatSession::new("Gemologist");
        assert_eq!(session.view().suggested_questions.len(), 5);

        session.push_question("Salary?").unwrap();
        assert!(session.view().suggested_questions.is_empty());
    }

    #[test]
    fn test_second_question_while_pending_is_rejected() {
        let mut session = ChatSession::new("Gemologist");
        session.push_question("First?").unwrap();
        assert!(matches!(
            session.push_question("Second?"),
            Err(AppError::Conflict(_))
        ));

        session.push_answer("Answer".to_string());
        assert!(session.push_question("Second?").is_ok());
    }

    #[test]
    fn test_transcript_is_ordered() {
        let mut session = ChatSession::new("Colorist");
        session.push_question("Q1").unwrap();
        session.push_answer("A1".to_string());
        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(&contents[1..], &["Q1", "A1"]);
        assert!(!session.awaiting_reply());
    }

    #[tokio::test]
    async fn test_store_round_trip_and_close() {
        let store = ChatStore::default();
        let view = store.open("Colorist").await;

        let pending = store.begin_question(view.id, "Tools?").await.unwrap();
        assert_eq!(pending.career_title, "Colorist");
        assert_eq!(pending.question.content, "Tools?");
        assert!(store.view(view.id).await.unwrap().awaiting_reply);

        let answer = pending.finish("DaVinci Resolve".to_string()).await;
        assert!(answer.is_some());
        let chat = store.view(view.id).await.unwrap();
        assert_eq!(chat.messages.len(), 3);
        assert!(!chat.awaiting_reply);

        assert!(store.close(view.id).await);
        assert!(!store.close(view.id).await);
        assert!(store.view(view.id).await.is_none());
    }

    #[tokio::test]
    async fn test_answer_for_closed_session_is_dropped() {
        let store = ChatStore::default();
        let view = store.open("Colorist").await;
        let pending = store.begin_question(view.id, "Tools?").await.unwrap();
        store.close(view.id).await;

        assert!(pending.finish("late".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_pending_question_unlocks_session() {
        let store = ChatStore::default();
        let view = store.open("Colorist").await;

        let pending = store.begin_question(view.id, "Tools?").await.unwrap();
        drop(pending);
        // The release runs on a spawned task.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let chat = store.view(view.id).await.unwrap();
        assert!(!chat.awaiting_reply);
        assert_eq!(chat.messages.len(), 2);
        assert!(store.begin_question(view.id, "Again?").await.is_ok());
    }

    #[tokio::test]
    async fn test_open_prunes_idle_sessions() {
        let store = ChatStore::default();
        let stale = store.open("Colorist").await;
        let fresh = store.open("Foley Artist").await;

        store
            .sessions
            .write()
            .await
            .get_mut(&stale.id)
            .unwrap()
            .last_activity -= Duration::minutes(DEFAULT_IDLE_MINUTES + 1);

        store.open("Gemologist").await;

        assert!(store.view(stale.id).await.is_none());
        assert!(store.view(fresh.id).await.is_some());
    }

    #[tokio::test]
    async fn test_open_keeps_idle_session_awaiting_reply() {
        let store = ChatStore::default();
        let view = store.open("Colorist").await;
        let _pending = store.begin_question(view.id, "Tools?").await.unwrap();

        store
            .sessions
            .write()
            .await
            .get_mut(&view.id)
            .unwrap()
            .last_activity -= Duration::minutes(DEFAULT_IDLE_MINUTES + 1);

        store.open("Gemologist").await;

        assert!(store.view(view.id).await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = ChatStore::default();
        assert!(matches!(
            store.begin_question(Uuid::new_v4(), "Q").await,
            Err(AppError::NotFound(_))
        ));
    }
}
