//! Wire types for the transcoder dashboard.
//!
//! Every type here mirrors a JSON document exchanged with the remote service.
//! Field names are snake_case on the wire and enum variants keep the names the
//! service serializes, so these types can be decoded straight from responses.

pub mod config;
pub mod logs;
pub mod requests;
pub mod server;
pub mod state;
pub mod status;

pub use config::{
    Acceleration, AudioAdaptationSet, AudioEncoder, AudioProfile, AudioRole, Colorspace,
    FfConfig, MpdType, Preset, Srt, SrtMode, TextPosition, VideoAdaptationSet, VideoEncoder,
    VideoFilterDeinterlace, VideoFilterDrawText, VideoProfile, VideoRepresentation,
};
pub use logs::{Log, LogLevel};
pub use requests::{
    ConfigId, ConfigStatusResponse, ConfigsResponse, CreateConfigRequest, LogsResponse,
    ServerId, ServerStatusResponse, ServersResponse, SetStateRequest, UpdateConfigRequest,
};
pub use server::{Gpu, Server, ServerCapability};
pub use state::{CoreState, State};
pub use status::{FfStatusValue, ServerStatus};
