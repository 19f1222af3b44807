//! HTTP implementation of [`DashboardApi`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use ffdash_model::{
    ConfigId, ConfigStatusResponse, ConfigsResponse, CreateConfigRequest, FfConfig,
    FfStatusValue, Log, LogsResponse, Server, ServerId, ServerStatus, ServerStatusResponse,
    ServersResponse, SetStateRequest, State, UpdateConfigRequest, VideoAdaptationSet,
    VideoRepresentation,
};

use crate::api::DashboardApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("ffdash/", env!("CARGO_PKG_VERSION"));

/// Endpoint paths, relative to the API base.
mod endpoint {
    pub const SERVERS: &str = "/api/get_all_servers";
    pub const SERVER_STATUS: &str = "/api/get_all_server_status";
    pub const REMOVE_SERVER: &str = "/api/remove_server";
    pub const LOGS: &str = "/api/get_logs";
    pub const CREATE: &str = "/api/ff/create";
    pub const UPDATE: &str = "/api/ff/update";
    pub const SET_STATE: &str = "/api/ff/set_config_state";
    pub const REMOVE: &str = "/api/ff/remove";
    pub const CONFIGS: &str = "/api/ff/get_all_configs";
    pub const CONFIG_STATUS: &str = "/api/ff/get_all_status";
    pub const COMMAND: &str = "/api/ff/get_ff_command";
    pub const DEFAULT_ADAPTATION_SET: &str = "/api/ff/create_default_video_adaptation_set";
    pub const DEFAULT_REPRESENTATION: &str = "/api/ff/create_default_video_representation";
}

/// Dashboard service client over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: String,
}

impl HttpClient {
    /// Creates a client for the service at `config.api_base`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = config.api_base.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", config.api_base)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// The normalized API base (no trailing slash).
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(check_status(response).await?).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        decode(check_status(response).await?).await
    }

    /// POST where the response body carries no information.
    async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        check_status(response).await?.bytes().await?;
        Ok(())
    }
}

/// Turns non-success statuses into [`ClientError::Status`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("Service error ({}): {}", status, body);
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl DashboardApi for HttpClient {
    async fn list_servers(&self) -> Result<Vec<Server>> {
        let response: ServersResponse = self.get(endpoint::SERVERS).await?;
        Ok(response.servers)
    }

    async fn list_server_status(&self) -> Result<Vec<ServerStatus>> {
        let response: ServerStatusResponse = self.get(endpoint::SERVER_STATUS).await?;
        Ok(response.status)
    }

    async fn remove_server(&self, server_uid: &str) -> Result<()> {
        let request = ServerId {
            server_uid: server_uid.to_string(),
        };
        self.post_unit(endpoint::REMOVE_SERVER, &request).await
    }

    async fn create_config(&self, server_uid: &str, name: &str, output: &str) -> Result<String> {
        let request = CreateConfigRequest {
            server_uid: server_uid.to_string(),
            name: name.to_string(),
            output: output.to_string(),
        };
        self.post(endpoint::CREATE, &request).await
    }

    async fn remove_config(&self, server_uid: &str, config_uid: &str) -> Result<()> {
        self.post_unit(endpoint::REMOVE, &ConfigId::new(server_uid, config_uid))
            .await
    }

    async fn update_config(&self, config: &FfConfig) -> Result<()> {
        let request = UpdateConfigRequest {
            config: config.clone(),
        };
        self.post_unit(endpoint::UPDATE, &request).await
    }

    async fn set_config_state(
        &self,
        server_uid: &str,
        config_uid: &str,
        state: State,
    ) -> Result<()> {
        let request = SetStateRequest {
            id: ConfigId::new(server_uid, config_uid),
            state,
        };
        self.post_unit(endpoint::SET_STATE, &request).await
    }

    async fn list_configs(&self) -> Result<Vec<FfConfig>> {
        let response: ConfigsResponse = self.get(endpoint::CONFIGS).await?;
        Ok(response.configs)
    }

    async fn list_config_status(&self) -> Result<Vec<FfStatusValue>> {
        let response: ConfigStatusResponse = self.get(endpoint::CONFIG_STATUS).await?;
        Ok(response.status)
    }

    async fn get_logs(&self, server_uid: &str, config_uid: &str) -> Result<Vec<Log>> {
        let response: LogsResponse = self
            .post(endpoint::LOGS, &ConfigId::new(server_uid, config_uid))
            .await?;
        Ok(response.logs)
    }

    async fn command_line(&self, server_uid: &str, config_uid: &str) -> Result<String> {
        self.post(endpoint::COMMAND, &ConfigId::new(server_uid, config_uid))
            .await
    }

    async fn default_video_adaptation_set(&self) -> Result<VideoAdaptationSet> {
        self.get(endpoint::DEFAULT_ADAPTATION_SET).await
    }

    async fn default_video_representation(&self) -> Result<VideoRepresentation> {
        self.get(endpoint::DEFAULT_REPRESENTATION).await
    }
}
