//! Core data types shared across the crate.

pub mod intent;
pub mod message;
pub mod run;

pub use intent::{show_image_label, Intent, GO_BACK_LABEL, UNKNOWN_LABEL};
pub use message::{ChatMessage, NotepadEntry, Role};
pub use run::{Run, RunId, RunStatus, ThreadId};
