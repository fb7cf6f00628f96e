//! Shared test helpers and mock provider backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use parlor::agents::Registry;
use parlor::error::{Error, Result};
use parlor::intent::IntentClassifier;
use parlor::orchestrator::RunOrchestrator;
use parlor::provider::{AssistantsApi, CompletionsApi};
use parlor::service::ChatService;
use parlor::types::{Run, RunId, RunStatus, ThreadId};
use parlor::util::PollPolicy;

/// Canned classifier outcome.
pub enum Completion {
    Answer(String),
    Fail,
}

/// A mock backend with queued run statuses, replies and classifier answers,
/// plus call counters for asserting interaction patterns.
///
/// `retrieve_run` consumes one queued status per call and reports
/// `completed` once the queue is empty; `latest_message_text` consumes one
/// queued reply.
#[derive(Default)]
pub struct MockBackend {
    statuses: Mutex<VecDeque<RunStatus>>,
    replies: Mutex<VecDeque<String>>,
    completions: Mutex<VecDeque<Completion>>,
    posted: Mutex<Vec<(ThreadId, String)>>,
    threads_created: AtomicUsize,
    runs_created: AtomicUsize,
    polls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the statuses the next polls will observe, in order.
    pub fn queue_statuses(&self, statuses: &[RunStatus]) {
        self.statuses.lock().unwrap().extend(statuses.iter().copied());
    }

    /// Queue a reply for a completed turn.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(text.to_string());
    }

    /// Queue a classifier outcome.
    pub fn queue_completion(&self, completion: Completion) {
        self.completions.lock().unwrap().push_back(completion);
    }

    pub fn threads_created(&self) -> usize {
        self.threads_created.load(Ordering::SeqCst)
    }

    pub fn runs_created(&self) -> usize {
        self.runs_created.load(Ordering::SeqCst)
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    /// Messages posted to the provider, as `(thread, text)` pairs.
    pub fn posted_messages(&self) -> Vec<(ThreadId, String)> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantsApi for MockBackend {
    async fn create_thread(&self) -> Result<ThreadId> {
        let n = self.threads_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ThreadId(format!("thread_{n}")))
    }

    async fn add_user_message(&self, thread: &ThreadId, text: &str) -> Result<()> {
        self.posted
            .lock()
            .unwrap()
            .push((thread.clone(), text.to_string()));
        Ok(())
    }

    async fn create_run(&self, _thread: &ThreadId, _assistant_id: &str) -> Result<Run> {
        let n = self.runs_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Run {
            id: RunId(format!("run_{n}")),
            status: RunStatus::Queued,
        })
    }

    async fn retrieve_run(&self, _thread: &ThreadId, run: &RunId) -> Result<Run> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RunStatus::Completed);
        Ok(Run {
            id: run.clone(),
            status,
        })
    }

    async fn latest_message_text(&self, _thread: &ThreadId) -> Result<String> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "ok".to_string()))
    }
}

#[async_trait]
impl CompletionsApi for MockBackend {
    async fn complete(&self, _model: &str, _instruction: &str, _input: &str) -> Result<String> {
        match self.completions.lock().unwrap().pop_front() {
            Some(Completion::Answer(text)) => Ok(text),
            Some(Completion::Fail) => Err(Error::service("classifier backend down")),
            None => Err(Error::service("no completion queued")),
        }
    }
}

/// Fast polling policy for tests.
pub fn fast_poll() -> PollPolicy {
    PollPolicy {
        max_attempts: 8,
        initial_interval: Duration::from_millis(1),
        max_interval: Duration::from_millis(10),
        multiplier: 1.0,
    }
}

/// A `ChatService` over the default agent pair and the given backend.
pub fn service_with(backend: Arc<MockBackend>) -> ChatService {
    ChatService::new(
        Registry::default_pair(),
        RunOrchestrator::new(backend.clone(), fast_poll()),
        IntentClassifier::new(backend, "test-model".to_string()),
    )
}
