use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phyplug", version, about = "Cluster view plugins for phy")]
pub struct Cli {
    /// Directory holding the plugin configuration files (default: ~/.phy)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort a JSON array of cluster rows
    Sort {
        rows: PathBuf,
        /// Primary column
        #[arg(long)]
        by: String,
        #[arg(long)]
        desc: bool,
        #[arg(long)]
        insensitive: bool,
        /// Secondary columns, overriding the stored order
        #[arg(long)]
        priority: Option<String>,
        /// Print the sorted rows instead of their ids
        #[arg(long)]
        json: bool,
    },
    Priority {
        #[command(subcommand)]
        command: PriorityCommands,
    },
    Autosave {
        #[command(subcommand)]
        command: AutosaveCommands,
    },
    Modifier {
        #[command(subcommand)]
        command: ModifierCommands,
    },
}

#[derive(Subcommand)]
pub enum PriorityCommands {
    Show,
    /// Comma-separated secondary columns, highest priority first
    Set {
        list: String,
        /// Columns the cluster view exposes, comma-separated
        #[arg(long)]
        columns: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AutosaveCommands {
    Show,
    Set { minutes: f64 },
}

#[derive(Subcommand)]
pub enum ModifierCommands {
    Show,
    Toggle {
        state: ToggleState,
        /// Current shortcut of an action, as ACTION=KEYS
        #[arg(long = "shortcut")]
        shortcuts: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    pub fn enabled(self) -> bool {
        matches!(self, ToggleState::On)
    }
}
