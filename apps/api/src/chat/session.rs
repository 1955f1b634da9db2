//! Conversation state: an append-only message log plus the small counters
//! that survive across turns within one session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One log entry. Immutable once created; appended, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Per-session state. Lives only as long as the process.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationState {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub chat_count: u32,
    pub valid_resume: bool,
    pub resume_skills: Vec<String>,
}

impl ConversationState {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            messages: Vec::new(),
            chat_count: 0,
            valid_resume: false,
            resume_skills: Vec::new(),
        }
    }
}

/// In-memory session registry. All mutation happens under the lock, so the
/// two appends of a turn land adjacently even if turns race on one session
/// (multiple tabs).
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, ConversationState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        sessions.insert(id, ConversationState::new(id));
        id
    }

    /// Clones the current state of a session, if it exists.
    pub fn snapshot(&self, id: Uuid) -> Option<ConversationState> {
        let sessions = self.inner.lock().expect("session lock poisoned");
        sessions.get(&id).cloned()
    }

    /// Appends the messages of one completed turn and stores the updated
    /// casual-chat counter. `user_content` is `None` for resume uploads,
    /// which log only the assistant reply.
    pub fn record_turn(
        &self,
        id: Uuid,
        user_content: Option<String>,
        assistant_content: String,
        chat_count: u32,
    ) -> bool {
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        let Some(session) = sessions.get_mut(&id) else {
            return false;
        };
        if let Some(content) = user_content {
            session.messages.push(ChatMessage::new(Role::User, content));
        }
        session
            .messages
            .push(ChatMessage::new(Role::Assistant, assistant_content));
        session.chat_count = chat_count;
        true
    }

    /// Overwrites the resume fields wholesale, as each upload replaces the
    /// previous one.
    pub fn set_resume(&self, id: Uuid, valid_resume: bool, resume_skills: Vec<String>) -> bool {
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        let Some(session) = sessions.get_mut(&id) else {
            return false;
        };
        session.valid_resume = valid_resume;
        session.resume_skills = resume_skills;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_empty() {
        let store = SessionStore::new();
        let id = store.create();
        let state = store.snapshot(id).unwrap();
        assert!(state.messages.is_empty());
        assert_eq!(state.chat_count, 0);
        assert!(!state.valid_resume);
    }

    #[test]
    fn test_record_turn_appends_in_order() {
        let store = SessionStore::new();
        let id = store.create();
        store.record_turn(id, Some("hi".to_string()), "hello!".to_string(), 1);
        store.record_turn(id, Some("jobs?".to_string()), "here".to_string(), 0);

        let state = store.snapshot(id).unwrap();
        let contents: Vec<_> = state.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "hello!", "jobs?", "here"]);
        assert_eq!(state.messages[0].role, Role::User);
        assert_eq!(state.messages[1].role, Role::Assistant);
        assert_eq!(state.chat_count, 0);
    }

    #[test]
    fn test_resume_turn_logs_assistant_only() {
        let store = SessionStore::new();
        let id = store.create();
        store.record_turn(id, None, "skills found".to_string(), 0);
        let state = store.snapshot(id).unwrap();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, Role::Assistant);
    }

    #[test]
    fn test_set_resume_overwrites_wholesale() {
        let store = SessionStore::new();
        let id = store.create();
        store.set_resume(id, true, vec!["Rust".to_string(), "SQL".to_string()]);
        store.set_resume(id, false, vec![]);
        let state = store.snapshot(id).unwrap();
        assert!(!state.valid_resume);
        assert!(state.resume_skills.is_empty());
    }

    #[test]
    fn test_unknown_session_is_rejected() {
        let store = SessionStore::new();
        assert!(store.snapshot(Uuid::new_v4()).is_none());
        assert!(!store.record_turn(Uuid::new_v4(), None, "x".to_string(), 0));
    }
}
