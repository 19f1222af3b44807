//! Alert text shown for failed commands.

use ffdash_cli::alert::alert_lines;
use ffdash_client::ClientError;
use ffdash_core::{Operation, PathRejection, SyncError};

#[test]
fn refresh_failure_alert() {
    let error = anyhow::Error::new(SyncError::RefreshFailed {
        operation: Operation::SetState,
        target: "cfg-1".to_string(),
        source: ClientError::Network("connection reset".to_string()),
    });
    insta::assert_snapshot!(alert_lines(&error).join("\n"), @r"
    The request to change configuration state was applied, but the dashboard could not reload. Refresh to see the current state.
    hint: the change to cfg-1 was applied; run `ffdash configs` to reload instead of repeating it
    error: change configuration state succeeded for cfg-1 but refreshing the dashboard failed: network error: connection reset
    ");
}

#[test]
fn validation_alert() {
    let error = anyhow::Error::new(SyncError::from(PathRejection::Traversal(
        "/a/../b".to_string(),
    )));
    insta::assert_snapshot!(alert_lines(&error).join("\n"), @r"
    The output path cannot contain '..'.
    error: output path `/a/../b` contains a parent-directory segment
    ");
}

#[test]
fn unreachable_service_alert() {
    let error = anyhow::Error::new(ClientError::Network("connection refused".to_string()));
    insta::assert_snapshot!(alert_lines(&error).join("\n"), @r"
    Could not reach the dashboard service. Please check that it is running.
    hint: the request can be retried
    error: network error: connection refused
    ");
}
