//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ffdash",
    version,
    about = "Manage transcoding servers and their configurations",
    long_about = "Manage transcoding servers and their configurations.\n\n\
                  Every change is sent to the dashboard service and followed by a\n\
                  reload, so listings always reflect what the service holds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dashboard service base URL (overrides FFDASH_API_BASE and --config).
    #[arg(long = "api-base", value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds (overrides --config).
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// TOML file with client settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered servers with their health.
    Servers,

    /// List configurations and their processing status.
    Configs {
        /// Only show configurations of this server.
        #[arg(long = "server", value_name = "SERVER_UID")]
        server_uid: Option<String>,
    },

    /// Create a configuration with default settings.
    Create(CreateArgs),

    /// Replace a configuration with the JSON document in a file.
    Update {
        /// JSON file holding the full edited configuration.
        #[arg(long = "file", value_name = "PATH")]
        file: PathBuf,
    },

    /// Remove a configuration.
    Remove(ConfigTarget),

    /// Start a configuration.
    Start(ConfigTarget),

    /// Stop a configuration.
    Stop(ConfigTarget),

    /// Forget a server.
    RemoveServer {
        #[arg(value_name = "SERVER_UID")]
        server_uid: String,
    },

    /// Show the transcoder log of a configuration.
    Logs(LogsArgs),

    /// Print the transcoder command line of a configuration.
    #[command(name = "command")]
    CommandLine(ConfigTarget),

    /// Print the playback URLs of a configuration.
    Urls {
        #[arg(value_name = "CONFIG_UID")]
        config_uid: String,
    },

    /// Check whether an output path is free on a server.
    CheckOutput(CheckOutputArgs),

    /// Print the service's templates for new video adaptation sets and representations.
    Defaults,
}

#[derive(Args)]
pub struct ConfigTarget {
    #[arg(value_name = "SERVER_UID")]
    pub server_uid: String,

    #[arg(value_name = "CONFIG_UID")]
    pub config_uid: String,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long = "server", value_name = "SERVER_UID")]
    pub server_uid: String,

    /// Display name of the new configuration.
    #[arg(long = "name")]
    pub name: String,

    /// Absolute publish path under the server's base URL.
    #[arg(long = "output", value_name = "PATH")]
    pub output: String,
}

#[derive(Args)]
pub struct LogsArgs {
    #[command(flatten)]
    pub target: ConfigTarget,

    /// Only show the most recent entries.
    #[arg(long = "tail", value_name = "N")]
    pub tail: Option<usize>,
}

#[derive(Args)]
pub struct CheckOutputArgs {
    #[arg(long = "server", value_name = "SERVER_UID")]
    pub server_uid: String,

    #[arg(long = "output", value_name = "PATH")]
    pub output: String,

    /// Configuration being edited; its own path is not a conflict.
    #[arg(long = "exclude", value_name = "CONFIG_UID")]
    pub exclude: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
