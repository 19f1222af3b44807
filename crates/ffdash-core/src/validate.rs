//! Output-path validation.
//!
//! Decides whether a configuration may publish to a given output path on a
//! given server. All checks are pure; callers pass the configuration snapshot
//! to check against, and the synchronizer re-runs them on the latest snapshot
//! right before submitting a mutation.

use std::fmt;

use thiserror::Error;

use ffdash_model::FfConfig;

use crate::store::Store;

/// Paths served by the dashboard itself, which outputs must not shadow.
///
/// Every entry, the static files included, also rejects paths beneath it:
/// `/index.html/live` is refused along with `/index.html`, and `//x` falls
/// under [`ReservedPath::Root`]. This is stricter than refusing exact static
/// file names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedPath {
    Root,
    Api,
    Monitor,
    Config,
    Nuxt,
    IndexHtml,
    Favicon,
    NotFoundPage,
    FallbackPage,
}

impl ReservedPath {
    /// All reserved paths.
    pub const ALL: [Self; 9] = [
        Self::Root,
        Self::Api,
        Self::Monitor,
        Self::Config,
        Self::Nuxt,
        Self::IndexHtml,
        Self::Favicon,
        Self::NotFoundPage,
        Self::FallbackPage,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Api => "/api",
            Self::Monitor => "/monitor",
            Self::Config => "/config",
            Self::Nuxt => "/_nuxt",
            Self::IndexHtml => "/index.html",
            Self::Favicon => "/favicon.ico",
            Self::NotFoundPage => "/404.html",
            Self::FallbackPage => "/200.html",
        }
    }

    /// Returns `true` if `path` equals this reserved path or lies beneath it.
    pub fn covers(&self, path: &str) -> bool {
        let reserved = self.path();
        path == reserved
            || path
                .strip_prefix(reserved)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// The reserved path covering `path`, if any.
    pub fn find(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reserved| reserved.covers(path))
    }
}

impl fmt::Display for ReservedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Why an output path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathRejection {
    #[error("output path `{0}` is not absolute")]
    NotAbsolute(String),

    #[error("output path `{path}` collides with reserved path `{reserved}`")]
    Reserved { path: String, reserved: ReservedPath },

    #[error("output path `{0}` contains a parent-directory segment")]
    Traversal(String),

    #[error("output path `{path}` is already used by configuration {config_uid}")]
    Duplicate { path: String, config_uid: String },
}

impl PathRejection {
    /// Short stable name of the violated rule.
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::NotAbsolute(_) => "not-absolute",
            Self::Reserved { .. } => "reserved-prefix",
            Self::Traversal(_) => "traversal",
            Self::Duplicate { .. } => "duplicate-path",
        }
    }

    /// Returns a user-friendly message suitable for an alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAbsolute(_) => "The output path must start with '/'.".to_string(),
            Self::Reserved { reserved, .. } => {
                format!("The output path cannot use '{reserved}', it is reserved by the dashboard.")
            }
            Self::Traversal(_) => "The output path cannot contain '..'.".to_string(),
            Self::Duplicate { .. } => {
                "Another configuration on this server already publishes to this path.".to_string()
            }
        }
    }
}

/// Strip a single trailing slash.
pub fn normalize_output(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Check `candidate` as the output of a configuration on `server_uid`.
///
/// `excluding_config_uid` is the configuration being edited, whose own current
/// output never counts as a duplicate. Pass `None` when creating.
pub fn check_output_path(
    candidate: &str,
    server_uid: &str,
    excluding_config_uid: Option<&str>,
    configs: &[FfConfig],
) -> Result<(), PathRejection> {
    let path = normalize_output(candidate);

    if path.is_empty() {
        // Only "/" normalizes to nothing and still looked absolute.
        return Err(if candidate == "/" {
            PathRejection::Reserved {
                path: candidate.to_string(),
                reserved: ReservedPath::Root,
            }
        } else {
            PathRejection::NotAbsolute(candidate.to_string())
        });
    }

    if !path.starts_with('/') {
        return Err(PathRejection::NotAbsolute(candidate.to_string()));
    }

    if let Some(reserved) = ReservedPath::find(path) {
        return Err(PathRejection::Reserved {
            path: candidate.to_string(),
            reserved,
        });
    }

    if path.contains("..") {
        return Err(PathRejection::Traversal(candidate.to_string()));
    }

    let duplicate = configs
        .iter()
        .filter(|config| config.server_uid == server_uid)
        .filter(|config| Some(config.uid.as_str()) != excluding_config_uid)
        .find(|config| normalize_output(&config.output) == path);

    if let Some(config) = duplicate {
        return Err(PathRejection::Duplicate {
            path: candidate.to_string(),
            config_uid: config.uid.clone(),
        });
    }

    Ok(())
}

/// Boolean form of [`check_output_path`].
pub fn is_output_path_valid(
    candidate: &str,
    server_uid: &str,
    excluding_config_uid: Option<&str>,
    configs: &[FfConfig],
) -> bool {
    check_output_path(candidate, server_uid, excluding_config_uid, configs).is_ok()
}

impl Store {
    /// Check an output path against the current configuration snapshot.
    pub fn check_output_path(
        &self,
        candidate: &str,
        server_uid: &str,
        excluding_config_uid: Option<&str>,
    ) -> Result<(), PathRejection> {
        let configs = self.configs().snapshot();
        check_output_path(candidate, server_uid, excluding_config_uid, &configs)
    }

    /// Boolean form of [`Store::check_output_path`].
    pub fn is_output_path_valid(
        &self,
        candidate: &str,
        server_uid: &str,
        excluding_config_uid: Option<&str>,
    ) -> bool {
        self.check_output_path(candidate, server_uid, excluding_config_uid)
            .is_ok()
    }
}
