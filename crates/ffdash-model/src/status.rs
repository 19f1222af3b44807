use serde::{Deserialize, Serialize};

use crate::state::CoreState;

/// Health and resource snapshot of a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub server_uid: String,
    /// CPU usage in percent, summed over cores.
    pub cpu_usage: u32,
    pub nb_cpus: u32,
    /// Resident memory in bytes.
    pub memory_usage: u64,
    pub total_memory: u64,
    pub current_state: CoreState,
}

impl ServerStatus {
    /// Memory usage as a fraction of total memory, `0.0` when unknown.
    pub fn memory_ratio(&self) -> f64 {
        if self.total_memory == 0 {
            0.0
        } else {
            self.memory_usage as f64 / self.total_memory as f64
        }
    }
}

/// Processing status of one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FfStatusValue {
    pub config_uid: String,
    pub speed: f64,
    pub drop_frames: u64,
    pub duplicate_frames: u64,
    pub out_time_ms: u64,
    pub fps: f64,
    pub current_state: CoreState,
    pub cpu_usage: u32,
    pub memory_usage: u64,
    pub nb_restart: u32,
}
