//! Read-only projections over the store.

use ffdash_model::{FfConfig, FfStatusValue, Server, ServerStatus};

use crate::store::Store;
use crate::validate::normalize_output;

/// Base URL used when a configuration's server is not (or no longer) known.
pub const FALLBACK_BASE_URL: &str = "http://localhost";

/// Streaming manifest flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Dash,
    Hls,
}

impl ManifestKind {
    pub const ALL: [Self; 2] = [Self::Dash, Self::Hls];

    /// File name of the manifest within the output directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Dash => "manifest.mpd",
            Self::Hls => "playlist.m3u8",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dash => "DASH",
            Self::Hls => "HLS",
        }
    }
}

/// Public playback URL for `config`.
///
/// Uses the base URL of the configuration's server when it is in `servers`,
/// otherwise [`FALLBACK_BASE_URL`]. Never fails.
pub fn playback_url(config: &FfConfig, servers: &[Server], kind: ManifestKind) -> String {
    let base = servers
        .iter()
        .find(|server| server.uid == config.server_uid)
        .map_or(FALLBACK_BASE_URL, |server| server.base_url.as_str());

    let mut url = base.strip_suffix('/').unwrap_or(base).to_string();
    let output = normalize_output(&config.output);
    if !output.starts_with('/') {
        url.push('/');
    }
    url.push_str(output);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(kind.file_name());
    url
}

impl Store {
    /// Playback URL for `config` against the current server snapshot.
    pub fn playback_url(&self, config: &FfConfig, kind: ManifestKind) -> String {
        playback_url(config, &self.servers().snapshot(), kind)
    }

    pub fn dash_url(&self, config: &FfConfig) -> String {
        self.playback_url(config, ManifestKind::Dash)
    }

    pub fn hls_url(&self, config: &FfConfig) -> String {
        self.playback_url(config, ManifestKind::Hls)
    }

    pub fn find_config(&self, config_uid: &str) -> Option<FfConfig> {
        self.configs()
            .snapshot()
            .iter()
            .find(|config| config.uid == config_uid)
            .cloned()
    }

    pub fn find_config_status(&self, config_uid: &str) -> Option<FfStatusValue> {
        self.config_status()
            .snapshot()
            .iter()
            .find(|status| status.config_uid == config_uid)
            .cloned()
    }

    pub fn find_server(&self, server_uid: &str) -> Option<Server> {
        self.servers()
            .snapshot()
            .iter()
            .find(|server| server.uid == server_uid)
            .cloned()
    }

    pub fn find_server_status(&self, server_uid: &str) -> Option<ServerStatus> {
        self.server_status()
            .snapshot()
            .iter()
            .find(|status| status.server_uid == server_uid)
            .cloned()
    }

    /// Configurations belonging to `server_uid`, in store order.
    pub fn configs_for_server(&self, server_uid: &str) -> Vec<FfConfig> {
        self.configs()
            .snapshot()
            .iter()
            .filter(|config| config.server_uid == server_uid)
            .cloned()
            .collect()
    }
}
