//! Parlor — conversational agent orchestration.
//!
//! Runs named conversational agents against an assistants-style remote
//! provider, classifies utterances into a closed set of control intents, and
//! keeps the auxiliary UI state those intents drive: which image is shown
//! and which notepad saved replies are filed into.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use parlor::prelude::*;
//! use parlor::provider::openai::OpenAiClient;
//!
//! # async fn example() -> parlor::error::Result<()> {
//! let config = parlor::config::Config::from_env()?;
//! let client = Arc::new(OpenAiClient::from_config(&config));
//! let service = ChatService::new(
//!     Registry::default_pair(),
//!     RunOrchestrator::new(client.clone(), config.poll.clone()),
//!     IntentClassifier::new(client, config.classifier_model.clone()),
//! );
//! let reply = service.send("zenbot", "how do I find calm?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod intent;
pub mod orchestrator;
pub mod prelude;
pub mod provider;
pub mod server;
pub mod service;
pub mod state;
pub mod types;
pub mod util;
