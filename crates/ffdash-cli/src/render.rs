//! Table rendering for command output.

use chrono::DateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ffdash_core::{ManifestKind, Store};
use ffdash_model::{CoreState, FfConfig, Log, LogLevel, State};

pub fn servers_table(store: &Store) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("UID"),
        header_cell("Base URL"),
        header_cell("Version"),
        header_cell("State"),
        header_cell("CPU"),
        header_cell("Memory"),
        header_cell("Configs"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);

    for server in store.servers().snapshot().iter() {
        let status = store.find_server_status(&server.uid);
        let configs = store.configs_for_server(&server.uid).len();
        let (state, cpu, memory) = match &status {
            Some(status) => (
                core_state_cell(status.current_state),
                Cell::new(format!("{}% / {}", status.cpu_usage, status.nb_cpus)),
                Cell::new(format!("{:.0}%", status.memory_ratio() * 100.0)),
            ),
            None => (dim_cell("offline"), dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(&server.name).add_attribute(Attribute::Bold),
            dim_cell(&server.uid),
            Cell::new(&server.base_url),
            Cell::new(&server.version),
            state,
            cpu,
            memory,
            Cell::new(configs),
        ]);
    }
    table
}

pub fn configs_table(store: &Store, configs: &[FfConfig]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("UID"),
        header_cell("Server"),
        header_cell("Output"),
        header_cell("Requested"),
        header_cell("Status"),
        header_cell("Speed"),
        header_cell("FPS"),
        header_cell("Restarts"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Right);

    for config in configs {
        let server = store
            .find_server(&config.server_uid)
            .map_or_else(|| config.server_uid.clone(), |server| server.name);
        let status = store.find_config_status(&config.uid);
        let (observed, speed, fps, restarts) = match &status {
            Some(status) => (
                core_state_cell(status.current_state),
                Cell::new(format!("{:.2}x", status.speed)),
                Cell::new(format!("{:.1}", status.fps)),
                Cell::new(status.nb_restart),
            ),
            None => (dim_cell("-"), dim_cell("-"), dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(&config.name).add_attribute(Attribute::Bold),
            dim_cell(&config.uid),
            Cell::new(server),
            Cell::new(&config.output),
            state_cell(config.state),
            observed,
            speed,
            fps,
            restarts,
        ]);
    }
    table
}

pub fn logs_table(logs: &[Log]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Time"),
        header_cell("Level"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for log in logs {
        table.add_row(vec![
            dim_cell(format_timestamp(log.timestamp)),
            level_cell(log.level),
            Cell::new(&log.text),
        ]);
    }
    table
}

/// Playback URLs for `config`; HLS only when the configuration publishes it.
pub fn urls_table(store: &Store, config: &FfConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Format"), header_cell("URL")]);
    apply_table_style(&mut table);
    for kind in ManifestKind::ALL {
        if kind == ManifestKind::Hls && !config.enable_hls {
            continue;
        }
        table.add_row(vec![
            Cell::new(kind.label()).add_attribute(Attribute::Bold),
            Cell::new(store.playback_url(config, kind)),
        ]);
    }
    table
}

/// Unix seconds as a UTC timestamp, or the raw number when out of range.
pub fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || timestamp.to_string(),
            |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn state_cell(state: State) -> Cell {
    match state {
        State::Active => Cell::new(state.label()).fg(Color::Green),
        State::Inactive => dim_cell(state.label()),
    }
}

fn core_state_cell(state: CoreState) -> Cell {
    match state {
        CoreState::Running => Cell::new(state.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CoreState::Waiting => Cell::new(state.label()).fg(Color::Yellow),
        CoreState::Error => Cell::new(state.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        CoreState::Stopped => dim_cell(state.label()),
    }
}

fn level_cell(level: LogLevel) -> Cell {
    match level {
        LogLevel::Info => Cell::new(level),
        LogLevel::Warning => Cell::new(level).fg(Color::Yellow),
        LogLevel::Error => Cell::new(level).fg(Color::Red),
    }
}
