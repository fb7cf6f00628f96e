//! The closed set of control intents.

/// Label the classifier must answer with to revert the displayed image.
pub const GO_BACK_LABEL: &str = "go_back_to_last_image";

/// Label reported for anything outside the vocabulary.
pub const UNKNOWN_LABEL: &str = "unknown";

/// The show-image label for one configured agent.
pub fn show_image_label(agent_id: &str) -> String {
    format!("show_{agent_id}_image")
}

/// A classified control intent.
///
/// Closed set: classifier output that matches nothing in the vocabulary maps
/// to `Unknown`, never to a free-form value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the image belonging to the named agent.
    ShowImage { agent_id: String },
    /// Revert to the previously displayed image.
    GoBack,
    /// No recognized intent; drives no transition.
    Unknown,
}

impl Intent {
    /// The vocabulary label for this intent.
    pub fn label(&self) -> String {
        match self {
            Self::ShowImage { agent_id } => show_image_label(agent_id),
            Self::GoBack => GO_BACK_LABEL.to_string(),
            Self::Unknown => UNKNOWN_LABEL.to_string(),
        }
    }
}
