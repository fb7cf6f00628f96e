//! Drives a single agent turn against the remote provider.

use std::sync::Arc;

use tracing::debug;

use crate::agents::Agent;
use crate::provider::AssistantsApi;
use crate::types::ThreadId;
use crate::util::PollPolicy;

/// Runs one turn end to end: thread, message, run, poll, reply.
///
/// Holds no conversation state of its own; the session's context handle is
/// passed in by the caller and written back when a thread is first created.
pub struct RunOrchestrator {
    api: Arc<dyn AssistantsApi>,
    poll: PollPolicy,
}

impl RunOrchestrator {
    pub fn new(api: Arc<dyn AssistantsApi>, poll: PollPolicy) -> Self {
        Self { api, poll }
    }

    /// Obtain the agent's reply to `text`.
    ///
    /// Reuses the thread in `thread_slot` when one exists, creating and
    /// storing one otherwise, so the provider keeps the conversation's
    /// context across turns. The run is polled to a terminal status under
    /// the configured bound; `failed`, `cancelled` and `expired` surface as
    /// service errors without further polling. On completion the newest
    /// message's text is returned; the caller appends it to history.
    pub async fn submit_turn(
        &self,
        agent: &Agent,
        thread_slot: &mut Option<ThreadId>,
        text: &str,
    ) -> crate::error::Result<String> {
        let thread = match thread_slot {
            Some(thread) => thread.clone(),
            None => {
                let thread = self.api.create_thread().await?;
                debug!(agent = %agent.id, thread = %thread, "created conversation thread");
                *thread_slot = Some(thread.clone());
                thread
            }
        };

        self.api.add_user_message(&thread, text).await?;
        let run = self.api.create_run(&thread, &agent.assistant_id).await?;
        debug!(agent = %agent.id, thread = %thread, run = %run.id, "run started");

        let api = Arc::clone(&self.api);
        let poll_thread = thread.clone();
        let run_id = run.id.clone();
        self.poll
            .wait_until_completed(move || {
                let api = Arc::clone(&api);
                let thread = poll_thread.clone();
                let run_id = run_id.clone();
                async move { Ok(api.retrieve_run(&thread, &run_id).await?.status) }
            })
            .await?;

        self.api.latest_message_text(&thread).await
    }
}
