//! Per-agent conversation histories and turn sequencing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::agents::Registry;
use crate::types::{ChatMessage, ThreadId};

/// The provider-side context handle, guarded by the session's turn lock.
#[derive(Debug, Default)]
pub struct ThreadSlot {
    pub thread: Option<ThreadId>,
}

/// One agent's conversation.
///
/// History is append-only and never interleaves with another session's
/// messages. The turn lock serializes sends: at most one run is outstanding
/// per session, and the reply for turn N is appended before turn N+1 starts
/// executing. Sends queue in arrival order rather than being rejected.
pub struct Session {
    agent_id: String,
    turn: tokio::sync::Mutex<ThreadSlot>,
    messages: Mutex<Vec<ChatMessage>>,
}

impl Session {
    fn new(agent_id: &str) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            turn: tokio::sync::Mutex::new(ThreadSlot::default()),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Acquire the turn lock; held for the whole turn.
    pub async fn begin_turn(&self) -> tokio::sync::MutexGuard<'_, ThreadSlot> {
        self.turn.lock().await
    }

    pub fn append(&self, message: ChatMessage) {
        self.messages.lock().unwrap().push(message);
    }

    /// Snapshot of the history in append order.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_at(&self, index: usize) -> Option<ChatMessage> {
        self.messages.lock().unwrap().get(index).cloned()
    }
}

/// All sessions, one per configured agent.
///
/// Created at process start, never grown or shrunk afterwards.
pub struct SessionStore {
    sessions: HashMap<String, Arc<Session>>,
}

impl SessionStore {
    pub fn for_registry(registry: &Registry) -> Self {
        let sessions = registry
            .agents()
            .iter()
            .map(|agent| (agent.id.clone(), Arc::new(Session::new(&agent.id))))
            .collect();
        Self { sessions }
    }

    pub fn get(&self, agent_id: &str) -> Option<Arc<Session>> {
        self.sessions.get(agent_id).cloned()
    }
}
