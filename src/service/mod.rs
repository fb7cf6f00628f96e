//! The orchestration façade.
//!
//! Every user-visible operation goes through `ChatService`: it validates
//! input before any remote call, sequences turns per session, and owns the
//! image and notepad state the classifier drives.

use std::sync::Mutex;

use tracing::{error, info};

use crate::agents::Registry;
use crate::error::{Error, Result};
use crate::intent::IntentClassifier;
use crate::orchestrator::RunOrchestrator;
use crate::state::{ImageSnapshot, ImageState, Notepad, SessionStore};
use crate::types::{ChatMessage, Intent, NotepadEntry, Role};

pub struct ChatService {
    registry: Registry,
    sessions: SessionStore,
    orchestrator: RunOrchestrator,
    classifier: IntentClassifier,
    image: Mutex<ImageState>,
    notepad: Mutex<Notepad>,
}

impl ChatService {
    /// Wire up the service; sessions are created here, one per agent, and
    /// live for the process lifetime.
    pub fn new(
        registry: Registry,
        orchestrator: RunOrchestrator,
        classifier: IntentClassifier,
    ) -> Self {
        let sessions = SessionStore::for_registry(&registry);
        Self {
            registry,
            sessions,
            orchestrator,
            classifier,
            image: Mutex::new(ImageState::new()),
            notepad: Mutex::new(Notepad::new()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run one conversation turn and return the agent's reply.
    ///
    /// Sends to the same agent queue behind that session's turn lock; sends
    /// to different agents proceed independently. The user message is
    /// recorded as soon as the turn starts executing; on failure it stays in
    /// history, no assistant message is appended, and the session remains
    /// usable.
    pub async fn send(&self, agent_id: &str, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::validation("message must not be empty"));
        }
        let session = self
            .sessions
            .get(agent_id)
            .ok_or_else(|| Error::validation(format!("unknown agent: {agent_id}")))?;
        let agent = self
            .registry
            .get(agent_id)
            .ok_or_else(|| Error::validation(format!("unknown agent: {agent_id}")))?;

        let mut slot = session.begin_turn().await;
        session.append(ChatMessage::user(text));

        match self
            .orchestrator
            .submit_turn(agent, &mut slot.thread, text)
            .await
        {
            Ok(reply) => {
                session.append(ChatMessage::assistant(reply.clone()));
                info!(agent = %agent_id, "turn completed");
                Ok(reply)
            }
            Err(err) => {
                error!(agent = %agent_id, error = %err, "turn failed");
                Err(err)
            }
        }
    }

    /// Classify an utterance and apply any image transition it implies.
    pub async fn detect(&self, text: &str) -> Intent {
        let intent = self.classifier.classify(&self.registry, text).await;
        self.image.lock().unwrap().apply(&intent, &self.registry);
        intent
    }

    /// The agent's history, in display order.
    pub fn history(&self, agent_id: &str) -> Result<Vec<ChatMessage>> {
        let session = self
            .sessions
            .get(agent_id)
            .ok_or_else(|| Error::validation(format!("unknown agent: {agent_id}")))?;
        Ok(session.history())
    }

    /// File the reply at `index` of the agent's history into its notepad
    /// category. Only assistant-authored messages can be saved.
    pub fn save_reply(&self, agent_id: &str, index: usize) -> Result<NotepadEntry> {
        let session = self
            .sessions
            .get(agent_id)
            .ok_or_else(|| Error::validation(format!("unknown agent: {agent_id}")))?;
        let category = self
            .registry
            .category_for(agent_id)
            .ok_or_else(|| Error::validation(format!("unknown agent: {agent_id}")))?;
        let message = session
            .message_at(index)
            .ok_or_else(|| Error::validation(format!("no message at index {index}")))?;
        if message.role != Role::Assistant {
            return Err(Error::validation("only assistant replies can be saved"));
        }
        Ok(self.notepad.lock().unwrap().save(category, &message.content))
    }

    /// Snapshot of one notepad category.
    pub fn notepad_entries(&self, category: &str) -> Vec<NotepadEntry> {
        self.notepad.lock().unwrap().entries(category)
    }

    /// Snapshot of the image display state.
    pub fn image(&self) -> ImageSnapshot {
        self.image.lock().unwrap().snapshot()
    }
}
