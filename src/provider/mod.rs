//! Remote provider seam: trait definitions and the OpenAI implementation.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Run, RunId, ThreadId};

/// The assistants-style conversation surface: threads, messages, runs.
///
/// This is the seam the orchestrator calls through; tests substitute a mock.
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    /// Create a fresh conversation context.
    async fn create_thread(&self) -> Result<ThreadId>;

    /// Post a user message into a thread.
    async fn add_user_message(&self, thread: &ThreadId, text: &str) -> Result<()>;

    /// Start a run of the given assistant against a thread.
    async fn create_run(&self, thread: &ThreadId, assistant_id: &str) -> Result<Run>;

    /// Fetch the current state of a run.
    async fn retrieve_run(&self, thread: &ThreadId, run: &RunId) -> Result<Run>;

    /// Primary text content of the newest message in a thread.
    async fn latest_message_text(&self, thread: &ThreadId) -> Result<String>;
}

/// Single-shot chat completion, used by the intent classifier.
#[async_trait]
pub trait CompletionsApi: Send + Sync {
    /// Run `input` under `instruction` and return the raw answer text.
    async fn complete(&self, model: &str, instruction: &str, input: &str) -> Result<String>;
}
