//! Mutation-then-refresh orchestration.
//!
//! Every mutation is submitted to the service and, once acknowledged, followed
//! by a full refresh of the containers it affects. Callers learn the outcome
//! only after the refresh, so a successful call always leaves the store in
//! agreement with the service at refresh time.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span, warn};

use ffdash_client::{DashboardApi, Result as ClientResult};
use ffdash_model::{FfConfig, Log, State, VideoAdaptationSet, VideoRepresentation};

use crate::error::{Operation, Result, SyncError};
use crate::store::Store;

/// Drives the remote service and keeps a [`Store`] in step with it.
#[derive(Clone)]
pub struct Synchronizer {
    api: Arc<dyn DashboardApi>,
    store: Store,
}

impl std::fmt::Debug for Synchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Synchronizer {
    pub fn new(api: Arc<dyn DashboardApi>, store: Store) -> Self {
        Self { api, store }
    }

    /// The store this synchronizer writes to.
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ---------------------------------------------------------------------
    // Refresh
    // ---------------------------------------------------------------------

    /// Replace the server list, ordered by name.
    pub async fn refresh_servers(&self) -> ClientResult<()> {
        let mut servers = self.api.list_servers().await?;
        servers.sort_by_cached_key(|server| server.name.to_lowercase());
        debug!(count = servers.len(), "Refreshed servers");
        self.store.servers().replace(servers);
        Ok(())
    }

    pub async fn refresh_server_status(&self) -> ClientResult<()> {
        let status = self.api.list_server_status().await?;
        debug!(count = status.len(), "Refreshed server status");
        self.store.server_status().replace(status);
        Ok(())
    }

    /// Replace configurations and their statuses together.
    ///
    /// Both lists are fetched before either container is touched; if either
    /// fetch fails the store keeps its previous contents.
    pub async fn refresh_configs(&self) -> ClientResult<()> {
        let (configs, status) =
            tokio::try_join!(self.api.list_configs(), self.api.list_config_status())?;
        debug!(
            configs = configs.len(),
            status = status.len(),
            "Refreshed configurations"
        );
        self.store.configs().replace(configs);
        self.store.config_status().replace(status);
        Ok(())
    }

    /// Refresh every container.
    pub async fn refresh_all(&self) -> ClientResult<()> {
        tokio::try_join!(
            self.refresh_servers(),
            self.refresh_server_status(),
            self.refresh_configs()
        )?;
        Ok(())
    }

    /// Empty the store, e.g. when the dashboard is closed.
    pub fn teardown(&self) {
        debug!("Clearing dashboard state");
        self.store.clear();
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Create a configuration on `server_uid` and return its uid.
    ///
    /// The output path is validated against the latest snapshot first; a
    /// rejected path never reaches the service.
    pub async fn create(&self, server_uid: &str, name: &str, output: &str) -> Result<String> {
        let span = info_span!("create_config", server_uid, output);
        async {
            self.store.check_output_path(output, server_uid, None)?;

            let uid = self
                .api
                .create_config(server_uid, name, output)
                .await
                .map_err(|source| mutation_failed(Operation::Create, source))?;
            info!(config_uid = %uid, "Created configuration");

            let refreshed = self.reconcile_configs(Operation::Create, &uid).await;
            refreshed.map(|()| uid)
        }
        .instrument(span)
        .await
    }

    /// Remove a configuration.
    pub async fn remove(&self, server_uid: &str, config_uid: &str) -> Result<()> {
        let span = info_span!("remove_config", server_uid, config_uid);
        async {
            self.api
                .remove_config(server_uid, config_uid)
                .await
                .map_err(|source| mutation_failed(Operation::Remove, source))?;
            info!("Removed configuration");

            self.reconcile_configs(Operation::Remove, config_uid).await
        }
        .instrument(span)
        .await
    }

    /// Replace a configuration with an edited copy.
    ///
    /// The edited output is validated with the configuration's own uid
    /// excluded, so keeping the current path is always allowed.
    pub async fn update(&self, config: &FfConfig) -> Result<()> {
        let span = info_span!(
            "update_config",
            server_uid = %config.server_uid,
            config_uid = %config.uid,
        );
        async {
            self.store
                .check_output_path(&config.output, &config.server_uid, Some(&config.uid))?;

            self.api
                .update_config(config)
                .await
                .map_err(|source| mutation_failed(Operation::Update, source))?;
            info!("Updated configuration");

            self.reconcile_configs(Operation::Update, &config.uid).await
        }
        .instrument(span)
        .await
    }

    /// Ask the service to start or stop a configuration.
    ///
    /// Requesting the state a configuration is already in is not an error;
    /// the refresh still runs.
    pub async fn set_state(&self, server_uid: &str, config_uid: &str, state: State) -> Result<()> {
        let span = info_span!("set_config_state", server_uid, config_uid, %state);
        async {
            self.api
                .set_config_state(server_uid, config_uid, state)
                .await
                .map_err(|source| mutation_failed(Operation::SetState, source))?;
            info!("Requested state change");

            self.reconcile_configs(Operation::SetState, config_uid).await
        }
        .instrument(span)
        .await
    }

    pub async fn start(&self, server_uid: &str, config_uid: &str) -> Result<()> {
        self.set_state(server_uid, config_uid, State::Active).await
    }

    pub async fn stop(&self, server_uid: &str, config_uid: &str) -> Result<()> {
        self.set_state(server_uid, config_uid, State::Inactive).await
    }

    /// Forget a server and reload the server containers.
    pub async fn remove_server(&self, server_uid: &str) -> Result<()> {
        let span = info_span!("remove_server", server_uid);
        async {
            self.api
                .remove_server(server_uid)
                .await
                .map_err(|source| mutation_failed(Operation::RemoveServer, source))?;
            info!("Removed server");

            tokio::try_join!(self.refresh_servers(), self.refresh_server_status())
                .map(|_| ())
                .map_err(|source| refresh_failed(Operation::RemoveServer, server_uid, source))
        }
        .instrument(span)
        .await
    }

    async fn reconcile_configs(&self, operation: Operation, target: &str) -> Result<()> {
        self.refresh_configs()
            .await
            .map_err(|source| refresh_failed(operation, target, source))
    }

    // ---------------------------------------------------------------------
    // Reads that bypass the store
    // ---------------------------------------------------------------------

    pub async fn logs(&self, server_uid: &str, config_uid: &str) -> ClientResult<Vec<Log>> {
        self.api.get_logs(server_uid, config_uid).await
    }

    /// The transcoder command line the service would run.
    pub async fn command_line(&self, server_uid: &str, config_uid: &str) -> ClientResult<String> {
        self.api.command_line(server_uid, config_uid).await
    }

    /// Template for a new video adaptation set.
    pub async fn default_video_adaptation_set(&self) -> ClientResult<VideoAdaptationSet> {
        self.api.default_video_adaptation_set().await
    }

    /// Template for a new video representation.
    pub async fn default_video_representation(&self) -> ClientResult<VideoRepresentation> {
        self.api.default_video_representation().await
    }
}

fn mutation_failed(operation: Operation, source: ffdash_client::ClientError) -> SyncError {
    warn!(%operation, error = %source, "Mutation failed");
    SyncError::MutationFailed { operation, source }
}

fn refresh_failed(
    operation: Operation,
    target: &str,
    source: ffdash_client::ClientError,
) -> SyncError {
    warn!(%operation, uid = target, error = %source, "Refresh after mutation failed");
    SyncError::RefreshFailed {
        operation,
        target: target.to_string(),
        source,
    }
}
