use serde::{Deserialize, Serialize};

use crate::config::Acceleration;

/// A GPU (or the software fallback) a server can encode with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpu {
    pub acceleration: Acceleration,
    pub index: u32,
    pub uid: String,
    pub name: String,
}

/// Role a server process was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerCapability {
    Transcode,
    UserInterface,
}

/// A transcoding server registered with the remote service.
///
/// Created by the service; the dashboard only mirrors it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Stable unique identifier.
    pub uid: String,
    /// Display name.
    pub name: String,
    /// Public base URL the server publishes outputs under.
    pub base_url: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
    #[serde(default)]
    pub capabilities: Vec<ServerCapability>,
}

impl Server {
    /// Look up a GPU by uid.
    pub fn gpu(&self, gpu_uid: &str) -> Option<&Gpu> {
        self.gpus.iter().find(|gpu| gpu.uid == gpu_uid)
    }

    /// Returns `true` if the server runs the transcoder module.
    pub fn can_transcode(&self) -> bool {
        self.capabilities.contains(&ServerCapability::Transcode)
    }
}
