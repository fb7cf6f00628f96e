//! Remote conversation context and run types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque provider-side identifier for a conversation context.
///
/// Owned by the session it was created for and reused across that session's
/// turns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ThreadId(pub String);

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque provider-side identifier for one asynchronous run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RunId(pub String);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One asynchronous execution of an agent against a thread.
///
/// Created per turn, polled until a terminal status, then discarded.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Run {
    pub id: RunId,
    pub status: RunStatus,
}

/// Run lifecycle status as reported by the provider.
///
/// Any wire value outside the known set maps to `Unknown`, which the polling
/// loop rejects instead of waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Expired,
    Unknown,
}

impl RunStatus {
    /// Map a wire value onto the known set.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            _ => Self::Unknown,
        }
    }

    /// Whether the run has stopped progressing.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Queued | Self::InProgress)
    }
}

impl<'de> Deserialize<'de> for RunStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
