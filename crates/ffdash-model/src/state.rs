use std::fmt;

use serde::{Deserialize, Serialize};

/// Commanded state of a configuration.
///
/// This is what the dashboard asks for. Whether the transcoder actually
/// reached it is reported separately through [`CoreState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// The configuration should be transcoding.
    Active,
    /// The configuration should be idle.
    Inactive,
}

impl State {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observed runtime state of a server or a configuration's process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreState {
    Stopped,
    Waiting,
    Running,
    Error,
}

impl CoreState {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Waiting => "Waiting",
            Self::Running => "Running",
            Self::Error => "Error",
        }
    }

    /// Returns `true` when the process is up or about to be.
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Waiting | Self::Running)
    }
}

impl fmt::Display for CoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
