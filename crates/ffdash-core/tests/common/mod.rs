//! In-memory dashboard service for orchestration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ffdash_client::{ClientError, DashboardApi, Result};
use ffdash_core::{Store, Synchronizer};
use ffdash_model::{
    CoreState, FfConfig, FfStatusValue, Log, LogLevel, Server, ServerStatus, State,
    VideoAdaptationSet, VideoRepresentation,
};

#[derive(Default)]
struct Service {
    servers: Vec<Server>,
    server_status: Vec<ServerStatus>,
    configs: Vec<FfConfig>,
    status: Vec<FfStatusValue>,
    next_uid: u32,
}

/// Fake service with failure injection and per-call counters.
#[derive(Default)]
pub struct FakeApi {
    service: Mutex<Service>,
    calls: Mutex<HashMap<&'static str, usize>>,
    fail_mutations: AtomicBool,
    fail_refresh: AtomicBool,
    failing: Mutex<HashSet<&'static str>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a server together with a running status entry.
    pub fn add_server(&self, uid: &str, name: &str, base_url: &str) {
        let mut service = self.service.lock().unwrap();
        service.servers.push(server(uid, name, base_url));
        service.server_status.push(ServerStatus {
            server_uid: uid.to_string(),
            cpu_usage: 12,
            nb_cpus: 8,
            memory_usage: 1 << 30,
            total_memory: 16 << 30,
            current_state: CoreState::Running,
        });
    }

    /// Put a configuration on the service without going through `create`.
    pub fn seed_config(&self, config: FfConfig) {
        let mut service = self.service.lock().unwrap();
        service.status.push(status_for(&config.uid, CoreState::Stopped));
        service.configs.push(config);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_refresh(&self, fail: bool) {
        self.fail_refresh.store(fail, Ordering::SeqCst);
    }

    /// Make every later call to `method` fail, independent of the other switches.
    pub fn fail_method(&self, method: &'static str) {
        self.failing.lock().unwrap().insert(method);
    }

    pub fn clear_failures(&self) {
        self.failing.lock().unwrap().clear();
        self.fail_mutations(false);
        self.fail_refresh(false);
    }

    fn is_failing(&self, method: &str) -> bool {
        self.failing.lock().unwrap().contains(method)
    }

    /// Number of times `method` was called.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Configurations as the service currently holds them.
    pub fn service_configs(&self) -> Vec<FfConfig> {
        self.service.lock().unwrap().configs.clone()
    }

    fn record(&self, method: &'static str) {
        *self.calls.lock().unwrap().entry(method).or_default() += 1;
    }

    fn mutation(&self, method: &'static str) -> Result<()> {
        self.record(method);
        if self.fail_mutations.load(Ordering::SeqCst) || self.is_failing(method) {
            return Err(ClientError::Status {
                status: 500,
                body: format!("\"{method} failed\""),
            });
        }
        Ok(())
    }

    fn refresh(&self, method: &'static str) -> Result<()> {
        self.record(method);
        if self.fail_refresh.load(Ordering::SeqCst) || self.is_failing(method) {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn list_servers(&self) -> Result<Vec<Server>> {
        self.refresh("list_servers")?;
        Ok(self.service.lock().unwrap().servers.clone())
    }

    async fn list_server_status(&self) -> Result<Vec<ServerStatus>> {
        self.refresh("list_server_status")?;
        Ok(self.service.lock().unwrap().server_status.clone())
    }

    async fn remove_server(&self, server_uid: &str) -> Result<()> {
        self.mutation("remove_server")?;
        let mut service = self.service.lock().unwrap();
        service.servers.retain(|s| s.uid != server_uid);
        service.server_status.retain(|s| s.server_uid != server_uid);
        Ok(())
    }

    async fn create_config(&self, server_uid: &str, name: &str, output: &str) -> Result<String> {
        self.mutation("create_config")?;
        let mut service = self.service.lock().unwrap();
        service.next_uid += 1;
        let uid = format!("cfg-{}", service.next_uid);
        service.status.push(status_for(&uid, CoreState::Stopped));
        service
            .configs
            .push(FfConfig::with_defaults(&uid, server_uid, name, output));
        Ok(uid)
    }

    async fn remove_config(&self, _server_uid: &str, config_uid: &str) -> Result<()> {
        self.mutation("remove_config")?;
        let mut service = self.service.lock().unwrap();
        service.configs.retain(|c| c.uid != config_uid);
        service.status.retain(|s| s.config_uid != config_uid);
        Ok(())
    }

    async fn update_config(&self, config: &FfConfig) -> Result<()> {
        self.mutation("update_config")?;
        let mut service = self.service.lock().unwrap();
        let slot = service
            .configs
            .iter_mut()
            .find(|c| c.uid == config.uid)
            .ok_or_else(|| ClientError::Status {
                status: 500,
                body: "\"Fail to update config\"".to_string(),
            })?;
        *slot = config.clone();
        Ok(())
    }

    async fn set_config_state(&self, _server_uid: &str, config_uid: &str, state: State) -> Result<()> {
        self.mutation("set_config_state")?;
        let mut service = self.service.lock().unwrap();
        if let Some(config) = service.configs.iter_mut().find(|c| c.uid == config_uid) {
            config.state = state;
        }
        let observed = match state {
            State::Active => CoreState::Running,
            State::Inactive => CoreState::Stopped,
        };
        if let Some(status) = service.status.iter_mut().find(|s| s.config_uid == config_uid) {
            status.current_state = observed;
        }
        Ok(())
    }

    async fn list_configs(&self) -> Result<Vec<FfConfig>> {
        self.refresh("list_configs")?;
        Ok(self.service.lock().unwrap().configs.clone())
    }

    async fn list_config_status(&self) -> Result<Vec<FfStatusValue>> {
        self.refresh("list_config_status")?;
        Ok(self.service.lock().unwrap().status.clone())
    }

    async fn get_logs(&self, _server_uid: &str, config_uid: &str) -> Result<Vec<Log>> {
        self.record("get_logs");
        Ok(vec![Log {
            timestamp: 1_700_000_000,
            text: format!("{config_uid} started"),
            level: LogLevel::Info,
        }])
    }

    async fn command_line(&self, _server_uid: &str, config_uid: &str) -> Result<String> {
        self.record("command_line");
        Ok(format!("ffmpeg -i srt://0.0.0.0:9000 /{config_uid}"))
    }

    async fn default_video_adaptation_set(&self) -> Result<VideoAdaptationSet> {
        self.record("default_video_adaptation_set");
        Ok(VideoAdaptationSet::default())
    }

    async fn default_video_representation(&self) -> Result<VideoRepresentation> {
        self.record("default_video_representation");
        Ok(VideoRepresentation::default())
    }
}

pub fn server(uid: &str, name: &str, base_url: &str) -> Server {
    Server {
        uid: uid.to_string(),
        name: name.to_string(),
        base_url: base_url.to_string(),
        port: 8888,
        version: "1.0.0".to_string(),
        gpus: Vec::new(),
        capabilities: Vec::new(),
    }
}

pub fn status_for(config_uid: &str, state: CoreState) -> FfStatusValue {
    FfStatusValue {
        config_uid: config_uid.to_string(),
        speed: 1.0,
        drop_frames: 0,
        duplicate_frames: 0,
        out_time_ms: 0,
        fps: 25.0,
        current_state: state,
        cpu_usage: 0,
        memory_usage: 0,
        nb_restart: 0,
    }
}

/// A synchronizer over `api` with a fresh store.
pub fn synchronizer(api: &Arc<FakeApi>) -> Synchronizer {
    let api: Arc<dyn DashboardApi> = api.clone();
    Synchronizer::new(api, Store::new())
}
