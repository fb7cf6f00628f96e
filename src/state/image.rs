//! Auxiliary image display state.

use serde::Serialize;
use tracing::debug;

use crate::agents::Registry;
use crate::types::Intent;

/// Which image the UI shows, plus a single-slot history.
///
/// `last` is one recorded slot, not an undo stack: it always holds whatever
/// `current` was immediately before the most recent show transition, and
/// only a show transition writes it. The slot distinguishes "never recorded"
/// (no show has happened; go-back does nothing) from "recorded empty" (a
/// show happened while nothing was displayed; go-back reverts to showing
/// nothing). A second consecutive go-back is a no-op either way, because the
/// slot itself never changes on go-back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    current: Option<String>,
    last: Option<Option<String>>,
}

/// Read-only view handed to callers and serialized by the endpoint layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageSnapshot {
    pub current: Option<String>,
    pub last: Option<String>,
}

impl ImageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a classified intent.
    ///
    /// Unknown intents and show-intents for unregistered agents leave the
    /// state untouched.
    pub fn apply(&mut self, intent: &Intent, registry: &Registry) {
        match intent {
            Intent::ShowImage { agent_id } => {
                let Some(url) = registry.image_url(agent_id) else {
                    debug!(agent = %agent_id, "show intent for unregistered agent ignored");
                    return;
                };
                self.last = Some(self.current.take());
                self.current = Some(url.to_string());
            }
            Intent::GoBack => {
                if let Some(recorded) = &self.last {
                    self.current = recorded.clone();
                }
            }
            Intent::Unknown => {
                debug!("unknown intent, image state unchanged");
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn snapshot(&self) -> ImageSnapshot {
        ImageSnapshot {
            current: self.current.clone(),
            last: self.last.clone().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(agent_id: &str) -> Intent {
        Intent::ShowImage {
            agent_id: agent_id.to_string(),
        }
    }

    #[test]
    fn first_show_records_the_empty_display() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();

        state.apply(&show("sadbot"), &registry);

        let snap = state.snapshot();
        assert_eq!(snap.current.as_deref(), Some("sadbot.jpg"));
        assert_eq!(snap.last, None);
    }

    #[test]
    fn go_back_after_first_show_reverts_to_nothing() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();
        state.apply(&show("sadbot"), &registry);

        state.apply(&Intent::GoBack, &registry);

        let snap = state.snapshot();
        assert_eq!(snap.current, None);
        assert_eq!(snap.last, None);
    }

    #[test]
    fn show_shifts_current_into_the_slot() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();
        state.apply(&show("zenbot"), &registry);
        state.apply(&show("sadbot"), &registry);

        state.apply(&show("zenbot"), &registry);

        let snap = state.snapshot();
        assert_eq!(snap.current.as_deref(), Some("zenbot.jpg"));
        assert_eq!(snap.last.as_deref(), Some("sadbot.jpg"));
    }

    #[test]
    fn consecutive_go_backs_are_idempotent() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();
        state.apply(&show("zenbot"), &registry);
        state.apply(&show("sadbot"), &registry);

        state.apply(&Intent::GoBack, &registry);
        let once = state.snapshot();
        state.apply(&Intent::GoBack, &registry);
        let twice = state.snapshot();

        assert_eq!(once.current.as_deref(), Some("zenbot.jpg"));
        assert_eq!(once, twice);
    }

    #[test]
    fn go_back_before_any_show_is_a_no_op() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();

        state.apply(&Intent::GoBack, &registry);

        assert_eq!(state, ImageState::new());
    }

    #[test]
    fn unknown_intent_changes_nothing() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();
        state.apply(&show("zenbot"), &registry);
        let before = state.clone();

        state.apply(&Intent::Unknown, &registry);

        assert_eq!(state, before);
    }

    #[test]
    fn show_for_unregistered_agent_changes_nothing() {
        let registry = Registry::default_pair();
        let mut state = ImageState::new();
        state.apply(&show("zenbot"), &registry);
        let before = state.clone();

        state.apply(&show("madbot"), &registry);

        assert_eq!(state, before);
    }
}
