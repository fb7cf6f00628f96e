//! OpenAI implementation of the provider traits.
//!
//! Threads, thread messages and runs go through the assistants endpoints;
//! the classifier goes through chat completions. Every payload is
//! deserialized into an explicit shape at this boundary, so an unexpected
//! response surfaces as a parse error instead of leaking upstream.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Run, RunId, ThreadId};

use super::http::{assistants_headers, bearer_headers, shared_client, status_to_error};
use super::{AssistantsApi, CompletionsApi};

pub struct OpenAiClient {
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| crate::config::DEFAULT_BASE_URL.to_string()),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), Some(config.base_url.clone()))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let resp = shared_client()
            .post(&url)
            .headers(assistants_headers(&self.api_key))
            .json(body)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let resp = shared_client()
            .get(&url)
            .headers(assistants_headers(&self.api_key))
            .send()
            .await?;
        read_json(resp).await
    }
}

/// Check the status, then deserialize through text so a shape mismatch is a
/// parse error rather than a network error.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_to_error(status, &body));
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl AssistantsApi for OpenAiClient {
    async fn create_thread(&self) -> Result<ThreadId> {
        debug!("creating thread");
        let thread: ThreadObject = self.post_json("/threads", &serde_json::json!({})).await?;
        Ok(ThreadId(thread.id))
    }

    async fn add_user_message(&self, thread: &ThreadId, text: &str) -> Result<()> {
        let created: MessageObject = self
            .post_json(
                &format!("/threads/{thread}/messages"),
                &serde_json::json!({ "role": "user", "content": text }),
            )
            .await?;
        debug!(thread = %thread, message = %created.id, "user message posted");
        Ok(())
    }

    async fn create_run(&self, thread: &ThreadId, assistant_id: &str) -> Result<Run> {
        debug!(thread = %thread, assistant = assistant_id, "starting run");
        self.post_json(
            &format!("/threads/{thread}/runs"),
            &serde_json::json!({ "assistant_id": assistant_id }),
        )
        .await
    }

    async fn retrieve_run(&self, thread: &ThreadId, run: &RunId) -> Result<Run> {
        self.get_json(&format!("/threads/{thread}/runs/{run}")).await
    }

    async fn latest_message_text(&self, thread: &ThreadId) -> Result<String> {
        let list: MessageListResponse = self
            .get_json(&format!("/threads/{thread}/messages?limit=1&order=desc"))
            .await?;
        let message = list
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Error::parse("thread has no messages"))?;
        message
            .content
            .into_iter()
            .find_map(|part| match part {
                MessageContent::Text { text } => Some(text.value),
                MessageContent::Other => None,
            })
            .ok_or_else(|| Error::parse("newest message has no text content"))
    }
}

#[async_trait]
impl CompletionsApi for OpenAiClient {
    async fn complete(&self, model: &str, instruction: &str, input: &str) -> Result<String> {
        debug!(model, "chat completion");
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": model,
            "messages": [
                { "role": "system", "content": instruction },
                { "role": "user", "content": input },
            ],
        });
        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;
        let data: ChatResponse = read_json(resp).await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::parse("no choices in completion response"))?;
        choice
            .message
            .content
            .ok_or_else(|| Error::parse("completion message has no content"))
    }
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct ThreadObject {
    id: String,
}

#[derive(Deserialize)]
struct MessageObject {
    id: String,
}

#[derive(Deserialize)]
struct MessageListResponse {
    data: Vec<ThreadMessage>,
}

#[derive(Deserialize)]
struct ThreadMessage {
    content: Vec<MessageContent>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MessageContent {
    Text { text: MessageText },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct MessageText {
    value: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
