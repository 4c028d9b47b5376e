use crate::commands::*;
use crate::output::*;
use autosave_plugin::{AutosavePlugin, SET_AUTOSAVE_INTERVAL};
use cluster_order::{sort_rows, sorted_ids, Row, SortDirection, SortSpec};
use phyplug_core::{
    default_config_dir, parse_column_list, read_json, AutosaveStore, ColumnPriorityStore,
    ModifierStore,
};
use plugin_host::{CommandArg, HostState, InProcessHost, DEFAULT_CLUSTER_COLUMNS};
use sort_cluster_view_plugin::{SortClusterViewPlugin, SELECT_SECONDARY_SORTING};
use std::path::Path;
use toggle_modifier_plugin::ToggleModifierPlugin;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = cli.config_dir.unwrap_or_else(default_config_dir);
    match cli.command {
        Commands::Sort {
            rows,
            by,
            desc,
            insensitive,
            priority,
            json,
        } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let spec = SortSpec::new(by, direction).case_insensitive(insensitive);
            handle_sort(&config_dir, &rows, &spec, priority.as_deref(), json)?
        }
        Commands::Priority { command } => handle_priority_command(&config_dir, command)?,
        Commands::Autosave { command } => handle_autosave_command(&config_dir, command)?,
        Commands::Modifier { command } => handle_modifier_command(&config_dir, command)?,
    }
    Ok(())
}

fn handle_sort(
    config_dir: &Path,
    rows_path: &Path,
    spec: &SortSpec,
    priority: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rows: Vec<Row> = read_json(rows_path)?;
    let priority = match priority {
        Some(list) => parse_column_list(list),
        None => ColumnPriorityStore::in_dir(config_dir).columns().to_vec(),
    };
    log::debug!(
        "Sorting {} rows by {} {} then {}",
        rows.len(),
        spec.primary_column,
        spec.primary_direction,
        priority.join(", ")
    );
    if json {
        sort_rows(&mut rows, spec, &priority);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_ids(&sorted_ids(&rows, spec, &priority));
    }
    Ok(())
}

fn handle_priority_command(
    config_dir: &Path,
    command: PriorityCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = SortClusterViewPlugin::new(ColumnPriorityStore::in_dir(config_dir));
    match command {
        PriorityCommands::Show => print_priority(plugin.priority().columns()),
        PriorityCommands::Set { list, columns } => {
            let available = match columns {
                Some(names) => parse_column_list(&names),
                None => DEFAULT_CLUSTER_COLUMNS
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            };
            let mut host = InProcessHost::new(HostState {
                columns: available,
                ..HostState::default()
            });
            host.attach(&plugin)?;
            host.invoke(SELECT_SECONDARY_SORTING, CommandArg::Text(list))?;
            print_priority(plugin.priority().columns());
        }
    }
    Ok(())
}

fn handle_autosave_command(
    config_dir: &Path,
    command: AutosaveCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        AutosaveCommands::Show => print_autosave(AutosaveStore::in_dir(config_dir).settings()),
        AutosaveCommands::Set { minutes } => {
            let plugin = AutosavePlugin::new(AutosaveStore::in_dir(config_dir));
            let mut host = InProcessHost::default();
            host.attach(&plugin)?;
            host.invoke(SET_AUTOSAVE_INTERVAL, CommandArg::Number(minutes))?;
            print_autosave(AutosaveStore::in_dir(config_dir).settings());
        }
    }
    Ok(())
}

fn handle_modifier_command(
    config_dir: &Path,
    command: ModifierCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ModifierCommands::Show => print_modifier(ModifierStore::in_dir(config_dir).settings()),
        ModifierCommands::Toggle { state, shortcuts } => {
            let mut host_state = HostState::with_default_columns();
            for entry in &shortcuts {
                let (action, keys) = parse_shortcut(entry)?;
                host_state = host_state.with_shortcut(action, keys);
            }
            let plugin = ToggleModifierPlugin::new(ModifierStore::in_dir(config_dir));
            let mut host = InProcessHost::new(host_state);
            host.attach(&plugin)?;
            host.invoke(&plugin.command_name(), CommandArg::Checked(state.enabled()))?;
            print_modifier(ModifierStore::in_dir(config_dir).settings());
            print_shortcuts(&host.state.shortcuts);
        }
    }
    Ok(())
}

fn parse_shortcut(entry: &str) -> Result<(&str, &str), String> {
    match entry.split_once('=') {
        Some((action, keys)) if !action.trim().is_empty() && !keys.trim().is_empty() => {
            Ok((action.trim(), keys.trim()))
        }
        _ => Err(format!("shortcut must look like ACTION=KEYS, got '{entry}'")),
    }
}
