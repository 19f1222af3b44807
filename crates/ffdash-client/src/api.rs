//! The request/response contract of the remote service.

use async_trait::async_trait;

use ffdash_model::{
    FfConfig, FfStatusValue, Log, Server, ServerStatus, State, VideoAdaptationSet,
    VideoRepresentation,
};

use crate::error::Result;

/// Typed boundary to the remote dashboard service.
///
/// Every call is a single request/response exchange and may fail with a
/// transport or service error. Timeouts are the implementation's concern.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// All registered servers.
    async fn list_servers(&self) -> Result<Vec<Server>>;

    /// Health snapshots, one per live server.
    async fn list_server_status(&self) -> Result<Vec<ServerStatus>>;

    /// Forget a server.
    async fn remove_server(&self, server_uid: &str) -> Result<()>;

    /// Create a configuration and return its uid.
    async fn create_config(&self, server_uid: &str, name: &str, output: &str) -> Result<String>;

    async fn remove_config(&self, server_uid: &str, config_uid: &str) -> Result<()>;

    /// Replace a configuration with the given copy.
    async fn update_config(&self, config: &FfConfig) -> Result<()>;

    async fn set_config_state(&self, server_uid: &str, config_uid: &str, state: State)
    -> Result<()>;

    async fn list_configs(&self) -> Result<Vec<FfConfig>>;

    async fn list_config_status(&self) -> Result<Vec<FfStatusValue>>;

    async fn get_logs(&self, server_uid: &str, config_uid: &str) -> Result<Vec<Log>>;

    /// The transcoder command line the service would run for a configuration.
    async fn command_line(&self, server_uid: &str, config_uid: &str) -> Result<String>;

    async fn default_video_adaptation_set(&self) -> Result<VideoAdaptationSet>;

    async fn default_video_representation(&self) -> Result<VideoRepresentation>;
}
