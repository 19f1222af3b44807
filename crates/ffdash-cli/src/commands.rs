//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use ffdash_core::Synchronizer;
use ffdash_model::FfConfig;

use ffdash_cli::render::{configs_table, logs_table, servers_table, urls_table};

use crate::cli::{CheckOutputArgs, ConfigTarget, CreateArgs, LogsArgs};

pub async fn run_servers(sync: &Synchronizer) -> Result<()> {
    sync.refresh_all().await?;
    println!("{}", servers_table(sync.store()));
    Ok(())
}

pub async fn run_configs(sync: &Synchronizer, server_uid: Option<&str>) -> Result<()> {
    sync.refresh_all().await?;
    let store = sync.store();
    let configs: Vec<FfConfig> = match server_uid {
        Some(uid) => store.configs_for_server(uid),
        None => store.configs().snapshot().to_vec(),
    };
    println!("{}", configs_table(store, &configs));
    Ok(())
}

pub async fn run_create(sync: &Synchronizer, args: &CreateArgs) -> Result<()> {
    // Validate against what the service holds now, not an empty cache.
    sync.refresh_configs().await?;
    let uid = sync
        .create(&args.server_uid, &args.name, &args.output)
        .await?;
    println!("{uid}");
    Ok(())
}

pub async fn run_update(sync: &Synchronizer, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let config: FfConfig = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid configuration", file.display()))?;
    debug!(config_uid = %config.uid, "Loaded configuration from file");

    sync.refresh_configs().await?;
    if sync.store().find_config(&config.uid).is_none() {
        bail!("configuration {} does not exist", config.uid);
    }
    sync.update(&config).await?;
    println!("Updated {}", config.uid);
    Ok(())
}

pub async fn run_remove(sync: &Synchronizer, target: &ConfigTarget) -> Result<()> {
    sync.remove(&target.server_uid, &target.config_uid).await?;
    println!("Removed {}", target.config_uid);
    Ok(())
}

pub async fn run_start(sync: &Synchronizer, target: &ConfigTarget) -> Result<()> {
    sync.start(&target.server_uid, &target.config_uid).await?;
    print_observed_state(sync, &target.config_uid);
    Ok(())
}

pub async fn run_stop(sync: &Synchronizer, target: &ConfigTarget) -> Result<()> {
    sync.stop(&target.server_uid, &target.config_uid).await?;
    print_observed_state(sync, &target.config_uid);
    Ok(())
}

pub async fn run_remove_server(sync: &Synchronizer, server_uid: &str) -> Result<()> {
    sync.remove_server(server_uid).await?;
    println!("Removed server {server_uid}");
    Ok(())
}

pub async fn run_logs(sync: &Synchronizer, args: &LogsArgs) -> Result<()> {
    let logs = sync
        .logs(&args.target.server_uid, &args.target.config_uid)
        .await?;
    let skip = args
        .tail
        .map_or(0, |tail| logs.len().saturating_sub(tail));
    println!("{}", logs_table(&logs[skip..]));
    Ok(())
}

pub async fn run_command_line(sync: &Synchronizer, target: &ConfigTarget) -> Result<()> {
    let command = sync
        .command_line(&target.server_uid, &target.config_uid)
        .await?;
    println!("{command}");
    Ok(())
}

pub async fn run_urls(sync: &Synchronizer, config_uid: &str) -> Result<()> {
    sync.refresh_all().await?;
    let store = sync.store();
    let Some(config) = store.find_config(config_uid) else {
        bail!("configuration {config_uid} does not exist");
    };
    println!("{}", urls_table(store, &config));
    Ok(())
}

/// Returns whether the path is acceptable.
pub async fn run_check_output(sync: &Synchronizer, args: &CheckOutputArgs) -> Result<bool> {
    sync.refresh_configs().await?;
    match sync
        .store()
        .check_output_path(&args.output, &args.server_uid, args.exclude.as_deref())
    {
        Ok(()) => {
            println!("{} is available", args.output);
            Ok(true)
        }
        Err(rejection) => {
            println!("{} is rejected ({})", args.output, rejection.rule());
            println!("{}", rejection.user_message());
            Ok(false)
        }
    }
}

pub async fn run_defaults(sync: &Synchronizer) -> Result<()> {
    let (adaptation_set, representation) = tokio::try_join!(
        sync.default_video_adaptation_set(),
        sync.default_video_representation()
    )?;
    println!("Video adaptation set:");
    println!("{}", serde_json::to_string_pretty(&adaptation_set)?);
    println!("Video representation:");
    println!("{}", serde_json::to_string_pretty(&representation)?);
    Ok(())
}

fn print_observed_state(sync: &Synchronizer, config_uid: &str) {
    match sync.store().find_config_status(config_uid) {
        Some(status) => println!("{config_uid}: {}", status.current_state),
        None => println!("{config_uid}: no status reported yet"),
    }
}
