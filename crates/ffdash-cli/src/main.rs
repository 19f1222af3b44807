//! Transcoder dashboard CLI.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use clap::{ColorChoice, Parser};
use ffdash_cli::alert::alert_lines;
use ffdash_cli::logging::{LogConfig, LogFormat, init_logging};
use ffdash_cli::settings::{FlagOverrides, client_config_from_env};
use ffdash_client::HttpClient;
use ffdash_core::{Store, Synchronizer};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_check_output, run_command_line, run_configs, run_create, run_defaults, run_logs,
    run_remove, run_remove_server, run_servers, run_start, run_stop, run_update, run_urls,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("error: failed to start async runtime: {error}");
            std::process::exit(1);
        }
    };

    let exit_code = match runtime.block_on(run(cli)) {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(error) => {
            tracing::error!("{error:#}");
            for line in alert_lines(&error) {
                eprintln!("{line}");
            }
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs the selected command; `Ok(false)` means it completed with a negative answer.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let flags = FlagOverrides {
        api_base: cli.api_base.as_deref(),
        request_timeout_secs: cli.timeout_secs,
    };
    let config = client_config_from_env(cli.config.as_deref(), &flags)?;
    tracing::debug!(api_base = %config.api_base, "Using dashboard service");
    let api = Arc::new(HttpClient::new(&config)?);
    let sync = Synchronizer::new(api, Store::new());

    match cli.command {
        Command::Servers => run_servers(&sync).await?,
        Command::Configs { server_uid } => run_configs(&sync, server_uid.as_deref()).await?,
        Command::Create(args) => run_create(&sync, &args).await?,
        Command::Update { file } => run_update(&sync, &file).await?,
        Command::Remove(target) => run_remove(&sync, &target).await?,
        Command::Start(target) => run_start(&sync, &target).await?,
        Command::Stop(target) => run_stop(&sync, &target).await?,
        Command::RemoveServer { server_uid } => run_remove_server(&sync, &server_uid).await?,
        Command::Logs(args) => run_logs(&sync, &args).await?,
        Command::CommandLine(target) => run_command_line(&sync, &target).await?,
        Command::Urls { config_uid } => run_urls(&sync, &config_uid).await?,
        Command::CheckOutput(args) => return run_check_output(&sync, &args).await,
        Command::Defaults => run_defaults(&sync).await?,
    }
    Ok(true)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
