//! Explicit registration surface between plugins and the sorting GUI.
//!
//! Plugins never reach into the host's object graph. They register named
//! commands and event subscriptions, and every handler receives the host's
//! services as an argument.

use std::fmt;

pub mod in_process;
pub use in_process::{HostState, InProcessHost, DEFAULT_CLUSTER_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The main window and its menus exist.
    GuiReady,
    /// The cluster view finished loading its table.
    ViewReady,
    /// One-second timer tick.
    Tick,
    /// The user or another plugin saved.
    RequestSave,
}

/// Value passed to a command, as collected by the host's prompt or menu.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandArg {
    None,
    Text(String),
    Number(f64),
    Checked(bool),
}

impl CommandArg {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CommandArg::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numbers, or text holding a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CommandArg::Number(value) => Some(*value),
            CommandArg::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_checked(&self) -> Option<bool> {
        match self {
            CommandArg::Checked(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandArg::None => Ok(()),
            CommandArg::Text(text) => f.write_str(text),
            CommandArg::Number(value) => write!(f, "{value}"),
            CommandArg::Checked(value) => write!(f, "{value}"),
        }
    }
}

/// How a command shows up in the host's menus.
#[derive(Default)]
pub struct CommandOptions {
    pub menu: Option<String>,
    pub submenu: Option<String>,
    pub prompt: bool,
    pub prompt_default: Option<Box<dyn Fn() -> String>>,
    pub checkable: bool,
    pub checked: bool,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(mut self, menu: &str) -> Self {
        self.menu = Some(menu.to_string());
        self
    }

    pub fn submenu(mut self, submenu: &str) -> Self {
        self.submenu = Some(submenu.to_string());
        self
    }

    /// Ask the user for an argument, pre-filled with `default()`.
    pub fn prompt<F>(mut self, default: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        self.prompt = true;
        self.prompt_default = Some(Box::new(default));
        self
    }

    pub fn checkable(mut self, checked: bool) -> Self {
        self.checkable = true;
        self.checked = checked;
        self
    }
}

impl fmt::Debug for CommandOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandOptions")
            .field("menu", &self.menu)
            .field("submenu", &self.submenu)
            .field("prompt", &self.prompt)
            .field("checkable", &self.checkable)
            .field("checked", &self.checked)
            .finish()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HostError {
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },
    #[error("{0}")]
    Plugin(String),
}

/// What the host lets a handler do.
pub trait HostServices {
    /// Column names the cluster view currently exposes, `id` included.
    fn available_columns(&self) -> Vec<String>;

    /// Installs the secondary ordering in the cluster view and re-sorts it.
    fn apply_secondary_sort(&mut self, priority: &[String]);

    /// Saves the current clustering.
    fn save(&mut self);

    fn shortcut(&self, action: &str) -> Option<String>;

    /// Returns `false` when the host has no action named `action`.
    fn set_shortcut(&mut self, action: &str, shortcut: &str) -> bool;

    /// User-visible status message.
    fn notify(&mut self, level: log::Level, message: &str);
}

pub type CommandHandler =
    Box<dyn FnMut(&CommandArg, &mut dyn HostServices) -> Result<(), HostError>>;
pub type EventHandler = Box<dyn FnMut(&mut dyn HostServices)>;

pub trait PluginHost {
    fn register_command(
        &mut self,
        name: &str,
        options: CommandOptions,
        handler: CommandHandler,
    ) -> Result<(), HostError>;

    fn subscribe(&mut self, event: HostEvent, handler: EventHandler);
}

pub trait HostPlugin {
    fn name(&self) -> &str;

    fn attach(&self, host: &mut dyn PluginHost) -> Result<(), HostError>;
}
