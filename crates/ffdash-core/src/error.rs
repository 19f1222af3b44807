//! Orchestration errors.

use std::fmt;

use thiserror::Error;

use ffdash_client::ClientError;

use crate::validate::PathRejection;

/// The mutation a [`SyncError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Remove,
    SetState,
    RemoveServer,
}

impl Operation {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Create => "create configuration",
            Self::Update => "update configuration",
            Self::Remove => "remove configuration",
            Self::SetState => "change configuration state",
            Self::RemoveServer => "remove server",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a mutation-then-refresh sequence.
///
/// The variant tells the caller where the sequence stopped:
/// `Validation` before any network call, `MutationFailed` with the service
/// unchanged, `RefreshFailed` with the service changed but the store stale.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] PathRejection),

    #[error("failed to {operation}")]
    MutationFailed {
        operation: Operation,
        #[source]
        source: ClientError,
    },

    #[error("{operation} succeeded for {target} but refreshing the dashboard failed")]
    RefreshFailed {
        operation: Operation,
        target: String,
        #[source]
        source: ClientError,
    },
}

impl SyncError {
    /// Returns `true` if the service accepted the mutation.
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::RefreshFailed { .. })
    }

    /// Uid of the record the mutation applied to, when it was applied.
    pub fn applied_target(&self) -> Option<&str> {
        match self {
            Self::RefreshFailed { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Returns a user-friendly message suitable for an alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(rejection) => rejection.user_message(),
            Self::MutationFailed { operation, source } => {
                format!("Could not {operation}: {}", source.user_message())
            }
            Self::RefreshFailed { operation, .. } => format!(
                "The request to {operation} was applied, but the dashboard could not reload. \
                 Refresh to see the current state."
            ),
        }
    }
}

/// Result type for orchestrated mutations.
pub type Result<T> = std::result::Result<T, SyncError>;
