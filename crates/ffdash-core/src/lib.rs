//! Client-side control plane for the transcoder dashboard.
//!
//! The architecture separates concerns into:
//!
//! - **Store**: four observable containers (servers, server statuses,
//!   configurations, configuration statuses), replaced wholesale on refresh
//! - **Validation**: pure output-path checks run against the latest snapshot
//! - **Synchronizer**: mutation followed by refresh, so a resolved call always
//!   leaves the store reflecting the service
//! - **Views**: read-only projections such as playback URLs
//!
//! Data flows one way: intent, validation, mutation, refresh, views.

pub mod error;
pub mod store;
pub mod sync;
pub mod validate;
pub mod views;

pub use error::{Operation, Result, SyncError};
pub use store::{Container, Snapshot, Store};
pub use sync::Synchronizer;
pub use validate::{
    PathRejection, ReservedPath, check_output_path, is_output_path_valid, normalize_output,
};
pub use views::{FALLBACK_BASE_URL, ManifestKind, playback_url};
