//! Common imports.

pub use crate::agents::{Agent, Registry};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::intent::IntentClassifier;
pub use crate::orchestrator::RunOrchestrator;
pub use crate::service::ChatService;
pub use crate::state::{ImageSnapshot, ImageState};
pub use crate::types::{ChatMessage, Intent, NotepadEntry, Role, Run, RunStatus, ThreadId};
pub use crate::util::PollPolicy;
