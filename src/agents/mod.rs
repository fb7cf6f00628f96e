//! Agent registry: which conversational personas exist and what they map to.
//!
//! The registry is fixed at startup. Every agent carries the provider-side
//! assistant id its runs execute against, the image its show-intent displays,
//! and the notepad category its saved replies are filed under.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{show_image_label, Intent, GO_BACK_LABEL};

/// A configured conversational persona.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Agent {
    /// Stable identifier; lowercase, also embedded in the intent vocabulary.
    pub id: String,
    pub display_name: String,
    /// Provider-side assistant id runs are started against.
    pub assistant_id: String,
    /// Image shown when the agent's show-intent fires.
    pub image_url: String,
    /// Notepad bucket for this agent's saved replies.
    pub notepad_category: String,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(rename = "agent")]
    agents: Vec<Agent>,
}

/// The fixed set of agents for this process.
#[derive(Debug, Clone)]
pub struct Registry {
    agents: Vec<Agent>,
}

impl Registry {
    /// Build a registry, rejecting empty sets, duplicate ids and ids that
    /// would not survive the case-folded label match.
    pub fn new(agents: Vec<Agent>) -> Result<Self> {
        if agents.is_empty() {
            return Err(Error::Configuration(
                "at least one agent must be configured".into(),
            ));
        }
        for agent in &agents {
            if agent.id.is_empty()
                || !agent
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            {
                return Err(Error::Configuration(format!(
                    "agent id '{}' must be lowercase ascii, digits or underscores",
                    agent.id
                )));
            }
            if agents.iter().filter(|a| a.id == agent.id).count() > 1 {
                return Err(Error::Configuration(format!(
                    "duplicate agent id '{}'",
                    agent.id
                )));
            }
        }
        Ok(Self { agents })
    }

    /// The built-in default pair.
    pub fn default_pair() -> Self {
        Self {
            agents: vec![
                Agent {
                    id: "zenbot".into(),
                    display_name: "Zenbot".into(),
                    assistant_id: "asst_1adywEubGRTDXE2j9vq4OcDM".into(),
                    image_url: "zenbot.jpg".into(),
                    notepad_category: "zenbot-notes".into(),
                },
                Agent {
                    id: "sadbot".into(),
                    display_name: "Sadbot".into(),
                    assistant_id: "asst_fV1fdSuQipHMoPYAHCpHlw8p".into(),
                    image_url: "sadbot.jpg".into(),
                    notepad_category: "sadbot-notes".into(),
                },
            ],
        }
    }

    /// Parse a registry from TOML (`[[agent]]` tables).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("invalid agents file: {e}")))?;
        Self::new(file.agents)
    }

    /// Read and parse a registry file.
    pub fn from_toml_path(path: &std::path::Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    pub fn image_url(&self, agent_id: &str) -> Option<&str> {
        self.get(agent_id).map(|a| a.image_url.as_str())
    }

    pub fn category_for(&self, agent_id: &str) -> Option<&str> {
        self.get(agent_id).map(|a| a.notepad_category.as_str())
    }

    /// The full closed vocabulary: one show label per agent plus go-back.
    pub fn intent_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .agents
            .iter()
            .map(|a| show_image_label(&a.id))
            .collect();
        labels.push(GO_BACK_LABEL.to_string());
        labels
    }

    /// Normalize a raw classifier answer and match it against the vocabulary.
    ///
    /// Anything that is not an exact label after trimming and case-folding
    /// becomes `Intent::Unknown`.
    pub fn parse_intent(&self, raw: &str) -> Intent {
        let normalized = raw.trim().to_lowercase();
        if normalized == GO_BACK_LABEL {
            return Intent::GoBack;
        }
        for agent in &self.agents {
            if normalized == show_image_label(&agent.id) {
                return Intent::ShowImage {
                    agent_id: agent.id.clone(),
                };
            }
        }
        Intent::Unknown
    }
}
