//! Request and response envelopes used by the remote service endpoints.

use serde::{Deserialize, Serialize};

use crate::config::FfConfig;
use crate::logs::Log;
use crate::server::Server;
use crate::state::State;
use crate::status::{FfStatusValue, ServerStatus};

/// Addresses one configuration on one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigId {
    pub server_uid: String,
    pub config_uid: String,
}

impl ConfigId {
    pub fn new(server_uid: impl Into<String>, config_uid: impl Into<String>) -> Self {
        Self {
            server_uid: server_uid.into(),
            config_uid: config_uid.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerId {
    pub server_uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConfigRequest {
    pub server_uid: String,
    pub name: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfigRequest {
    pub config: FfConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStateRequest {
    pub id: ConfigId,
    pub state: State,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServersResponse {
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatusResponse {
    pub status: Vec<ServerStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigsResponse {
    pub configs: Vec<FfConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigStatusResponse {
    pub status: Vec<FfStatusValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<Log>,
}
