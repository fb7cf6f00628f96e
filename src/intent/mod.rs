//! Utterance classification into the closed control-intent set.

use std::sync::Arc;

use tracing::warn;

use crate::agents::Registry;
use crate::provider::CompletionsApi;
use crate::types::{show_image_label, Intent, GO_BACK_LABEL};

/// Classifies free text into a control intent.
///
/// Classification is advisory: it drives UI side-effects only, so this never
/// returns an error. Remote failures and answers outside the vocabulary both
/// degrade to `Intent::Unknown`.
pub struct IntentClassifier {
    api: Arc<dyn CompletionsApi>,
    model: String,
}

impl IntentClassifier {
    pub fn new(api: Arc<dyn CompletionsApi>, model: String) -> Self {
        Self { api, model }
    }

    /// Classify `text` against the registry's vocabulary.
    pub async fn classify(&self, registry: &Registry, text: &str) -> Intent {
        let instruction = instruction_for(registry);
        match self.api.complete(&self.model, &instruction, text).await {
            Ok(raw) => {
                let intent = registry.parse_intent(&raw);
                if intent == Intent::Unknown {
                    warn!(answer = raw.trim(), "classifier answered outside the vocabulary");
                }
                intent
            }
            Err(error) => {
                warn!(error = %error, "intent classification failed, treating as unknown");
                Intent::Unknown
            }
        }
    }
}

/// Instruction constraining the model to answer with exactly one label.
fn instruction_for(registry: &Registry) -> String {
    let mut lines =
        vec!["You are an assistant that detects user intent. Available intents are:".to_string()];
    for (index, agent) in registry.agents().iter().enumerate() {
        lines.push(format!(
            "{}. \"{}\" for requests related to {} images.",
            index + 1,
            show_image_label(&agent.id),
            agent.display_name
        ));
    }
    lines.push(format!(
        "{}. \"{}\" to revert to the last displayed image.",
        registry.agents().len() + 1,
        GO_BACK_LABEL
    ));
    lines.push("Respond only with the intent label.".to_string());
    lines.join("\n")
}
