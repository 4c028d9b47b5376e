use crate::{
    CommandArg, CommandHandler, CommandOptions, EventHandler, HostError, HostEvent, HostPlugin,
    HostServices, PluginHost,
};
use std::collections::BTreeMap;

/// Cluster columns the host exposes by default.
pub const DEFAULT_CLUSTER_COLUMNS: [&str; 10] = [
    "id", "ch", "sh", "depth", "fr", "amp", "n_spikes", "comment", "group", "quality",
];

/// Side effects recorded by [`InProcessHost`].
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub columns: Vec<String>,
    pub shortcuts: BTreeMap<String, String>,
    pub secondary_sort: Option<Vec<String>>,
    pub resorts: usize,
    pub saves: usize,
    pub notifications: Vec<(log::Level, String)>,
}

impl HostState {
    pub fn with_default_columns() -> Self {
        Self {
            columns: DEFAULT_CLUSTER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_shortcut(mut self, action: &str, shortcut: &str) -> Self {
        self.shortcuts
            .insert(action.to_string(), shortcut.to_string());
        self
    }
}

impl HostServices for HostState {
    fn available_columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn apply_secondary_sort(&mut self, priority: &[String]) {
        self.secondary_sort = Some(priority.to_vec());
        self.resorts += 1;
    }

    fn save(&mut self) {
        self.saves += 1;
    }

    fn shortcut(&self, action: &str) -> Option<String> {
        self.shortcuts.get(action).cloned()
    }

    fn set_shortcut(&mut self, action: &str, shortcut: &str) -> bool {
        match self.shortcuts.get_mut(action) {
            Some(current) => {
                *current = shortcut.to_string();
                true
            }
            None => false,
        }
    }

    fn notify(&mut self, level: log::Level, message: &str) {
        log::log!(level, "{message}");
        self.notifications.push((level, message.to_string()));
    }
}

struct RegisteredCommand {
    name: String,
    options: CommandOptions,
    handler: CommandHandler,
}

/// Single-threaded host that keeps registrations in memory and dispatches
/// commands and events synchronously.
pub struct InProcessHost {
    commands: Vec<RegisteredCommand>,
    subscribers: Vec<(HostEvent, EventHandler)>,
    pub state: HostState,
}

impl InProcessHost {
    pub fn new(state: HostState) -> Self {
        Self {
            commands: Vec::new(),
            subscribers: Vec::new(),
            state,
        }
    }

    pub fn attach(&mut self, plugin: &dyn HostPlugin) -> Result<(), HostError> {
        log::debug!("Attaching plugin {}", plugin.name());
        plugin.attach(self)
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn options(&self, name: &str) -> Option<&CommandOptions> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.options)
    }

    pub fn prompt_default(&self, name: &str) -> Option<String> {
        self.options(name)
            .and_then(|options| options.prompt_default.as_ref())
            .map(|default| default())
    }

    pub fn invoke(&mut self, name: &str, arg: CommandArg) -> Result<(), HostError> {
        let command = self
            .commands
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| HostError::UnknownCommand(name.to_string()))?;
        if command.options.checkable {
            if let Some(checked) = arg.as_checked() {
                command.options.checked = checked;
            }
        }
        (command.handler)(&arg, &mut self.state)
    }

    pub fn emit(&mut self, event: HostEvent) {
        for (subscribed, handler) in self.subscribers.iter_mut() {
            if *subscribed == event {
                handler(&mut self.state);
            }
        }
    }
}

impl Default for InProcessHost {
    fn default() -> Self {
        Self::new(HostState::with_default_columns())
    }
}

impl PluginHost for InProcessHost {
    fn register_command(
        &mut self,
        name: &str,
        options: CommandOptions,
        handler: CommandHandler,
    ) -> Result<(), HostError> {
        if self.commands.iter().any(|c| c.name == name) {
            return Err(HostError::DuplicateCommand(name.to_string()));
        }
        self.commands.push(RegisteredCommand {
            name: name.to_string(),
            options,
            handler,
        });
        Ok(())
    }

    fn subscribe(&mut self, event: HostEvent, handler: EventHandler) {
        self.subscribers.push((event, handler));
    }
}
