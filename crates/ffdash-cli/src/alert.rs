//! User-facing error text.

use ffdash_client::ClientError;
use ffdash_core::SyncError;

/// Lines to show the user for a failed command, most important first.
///
/// Known orchestration and transport errors get their friendly message; a
/// change that was applied but could not be reloaded also gets a hint so the
/// user retries the reload rather than the change.
pub fn alert_lines(error: &anyhow::Error) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(sync_error) = error.downcast_ref::<SyncError>() {
        lines.push(sync_error.user_message());
        if let Some(target) = sync_error.applied_target() {
            lines.push(format!(
                "hint: the change to {target} was applied; run `ffdash configs` to reload instead of repeating it"
            ));
        }
    } else if let Some(client_error) = error.downcast_ref::<ClientError>() {
        lines.push(client_error.user_message().to_string());
        if client_error.is_retryable() {
            lines.push("hint: the request can be retried".to_string());
        }
    }
    lines.push(format!("error: {error:#}"));
    lines
}
