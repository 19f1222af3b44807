//! Transcoding job definitions (`FfConfig`) and their nested settings.
//!
//! The service owns these records. The dashboard caches them and sends a full
//! copy back on update, so every field the service knows about is carried here
//! even when the dashboard never reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::State;

// ============================================================================
// Configuration
// ============================================================================

/// One transcoding job bound to a server and publishing to one output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FfConfig {
    /// Immutable unique identifier.
    pub uid: String,
    /// Server this job runs on.
    pub server_uid: String,
    pub name: String,
    /// Commanded state.
    pub state: State,
    pub input: Srt,
    /// Absolute publish path under the server's base URL.
    pub output: String,
    pub segment_duration_ms: u32,
    pub colorspace: Colorspace,
    pub deinterlace: VideoFilterDeinterlace,
    pub video_adaptation_set: Vec<VideoAdaptationSet>,
    pub audio_adaptation_set: AudioAdaptationSet,
    pub mpd_type: MpdType,
    pub enable_hls: bool,
    pub media_seg_name: String,
    pub init_seg_name: String,
    pub utc_timing_url: Option<String>,
    pub ast_delay_ms: u32,
    pub window_size: u32,
    #[serde(default)]
    pub acceleration: Acceleration,
    pub gpu_uid: String,
    pub encryption_key: Option<String>,
    pub encryption_kid: Option<String>,
}

impl FfConfig {
    /// Build a configuration with the service's default settings.
    ///
    /// Mirrors what the service stores for a freshly created job, which makes
    /// it useful for offline tooling and test doubles.
    pub fn with_defaults(
        uid: impl Into<String>,
        server_uid: impl Into<String>,
        name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            server_uid: server_uid.into(),
            name: name.into(),
            state: State::Inactive,
            input: Srt::default(),
            output: output.into(),
            segment_duration_ms: 2000,
            colorspace: Colorspace::Bt709,
            deinterlace: VideoFilterDeinterlace::default(),
            video_adaptation_set: vec![VideoAdaptationSet::default()],
            audio_adaptation_set: AudioAdaptationSet::default(),
            mpd_type: MpdType::Template,
            enable_hls: true,
            media_seg_name: "$RepresentationID$-$Number%05d$.$ext$".to_string(),
            init_seg_name: "init_$RepresentationID$.$ext$".to_string(),
            utc_timing_url: Some("http://time.akamai.com?iso&amp;ms".to_string()),
            ast_delay_ms: 200,
            window_size: 10,
            acceleration: Acceleration::Software,
            gpu_uid: "sw".to_string(),
            encryption_key: None,
            encryption_kid: None,
        }
    }

    /// Total number of video representations across all adaptation sets.
    pub fn representation_count(&self) -> usize {
        self.video_adaptation_set
            .iter()
            .map(|set| set.representations.len())
            .sum()
    }

    /// Returns `true` when both encryption key and key id are set.
    pub fn is_encrypted(&self) -> bool {
        self.encryption_key.is_some() && self.encryption_kid.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Acceleration {
    Software,
    #[default]
    Vaapi,
    Cuda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MpdType {
    Template,
    SegmentTimeline,
}

// ============================================================================
// Input
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SrtMode {
    Caller,
    Listener,
    Rendezvous,
}

/// SRT input endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srt {
    pub uri: String,
    pub mode: SrtMode,
    pub connect_timeout_ms: u64,
}

impl Default for Srt {
    fn default() -> Self {
        Self {
            uri: String::new(),
            mode: SrtMode::Caller,
            connect_timeout_ms: 5000,
        }
    }
}

// ============================================================================
// Video
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colorspace {
    Auto,
    #[serde(rename = "BT709")]
    Bt709,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoEncoder {
    H264,
    #[serde(rename = "HEVC")]
    Hevc,
}

impl fmt::Display for VideoEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H264 => f.write_str("H.264"),
            Self::Hevc => f.write_str("HEVC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoProfile {
    Main,
    High,
    High10,
    High422,
    High444,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Text overlay burned into a representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFilterDrawText {
    pub enabled: bool,
    pub text: String,
    pub fontsize: u32,
    pub color: String,
    pub position: TextPosition,
}

impl Default for VideoFilterDrawText {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "My Text".to_string(),
            fontsize: 80,
            color: "white".to_string(),
            position: TextPosition::TopCenter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoFilterDeinterlace {
    pub enable: bool,
}

/// One rendition inside a video adaptation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRepresentation {
    pub width: u32,
    pub height: u32,
    /// Target bitrate in bits per second.
    pub bitrate: u32,
    pub max_bitrate: u32,
    pub buf_size: Option<u32>,
    pub preset: Preset,
    pub profile: VideoProfile,
    pub text: VideoFilterDrawText,
}

impl Default for VideoRepresentation {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            bitrate: 8_000_000,
            max_bitrate: 8_000_000,
            buf_size: None,
            preset: Preset::Medium,
            profile: VideoProfile::Main,
            text: VideoFilterDrawText::default(),
        }
    }
}

/// Group of representations sharing an encoder and frame rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAdaptationSet {
    pub encoder: VideoEncoder,
    pub representations: Vec<VideoRepresentation>,
    pub framerate_num: u32,
    pub framerate_den: u32,
    pub aspect_ratio_num: Option<u32>,
    pub aspect_ratio_den: Option<u32>,
}

impl Default for VideoAdaptationSet {
    fn default() -> Self {
        Self {
            encoder: VideoEncoder::H264,
            representations: vec![VideoRepresentation::default()],
            framerate_num: 50,
            framerate_den: 1,
            aspect_ratio_num: None,
            aspect_ratio_den: None,
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioEncoder {
    Aac,
    #[serde(rename = "FDKAac")]
    FdkAac,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioProfile {
    #[default]
    Low,
    #[serde(rename = "HEAAC")]
    HeAac,
    #[serde(rename = "HEAACV2")]
    HeAacV2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioRole {
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAdaptationSet {
    pub encoder: AudioEncoder,
    pub bitrate: u32,
    pub sample_rate: u32,
    pub role: AudioRole,
    #[serde(default)]
    pub profile: AudioProfile,
}

impl Default for AudioAdaptationSet {
    fn default() -> Self {
        Self {
            encoder: AudioEncoder::FdkAac,
            bitrate: 128_000,
            sample_rate: 48_000,
            role: AudioRole::Main,
            profile: AudioProfile::Low,
        }
    }
}
