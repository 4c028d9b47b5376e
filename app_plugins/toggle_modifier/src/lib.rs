//! Adds or removes a modifier key on selected action shortcuts, toggled on
//! the fly from the Edit menu.
//!
//! The shortcut shown next to menu entries is not refreshed by the host.

use phyplug_core::{rewrite_shortcut, ModifierSettings, ModifierStore};
use plugin_host::{
    CommandArg, CommandOptions, HostError, HostEvent, HostPlugin, HostServices, PluginHost,
};
use std::cell::RefCell;
use std::rc::Rc;

pub struct ToggleModifierPlugin {
    store: Rc<RefCell<ModifierStore>>,
}

impl ToggleModifierPlugin {
    pub fn new(store: ModifierStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    pub fn command_name(&self) -> String {
        format!(
            "Toggle shortcut modifier ({})",
            self.store.borrow().settings().modifier
        )
    }

    pub fn enabled(&self) -> bool {
        self.store.borrow().settings().enabled
    }
}

/// Rewrites every configured action the host knows. Returns the number of
/// shortcuts that changed.
pub fn update_shortcuts(
    settings: &ModifierSettings,
    services: &mut dyn HostServices,
    with_modifier: bool,
    verbose: bool,
) -> usize {
    let mut changed = 0;
    for action in &settings.actions {
        let Some(current) = services.shortcut(action) else {
            continue;
        };
        let shortcut = rewrite_shortcut(&current, &settings.modifier, with_modifier);
        services.set_shortcut(action, &shortcut);
        if shortcut != current {
            changed += 1;
            if verbose {
                log::info!("Updated shortcut '{action}' to {shortcut}");
            } else {
                log::debug!("Updated shortcut '{action}' to {shortcut}");
            }
        }
    }
    changed
}

impl HostPlugin for ToggleModifierPlugin {
    fn name(&self) -> &str {
        "ToggleModifier"
    }

    fn attach(&self, host: &mut dyn PluginHost) -> Result<(), HostError> {
        let command = self.command_name();
        let store = Rc::clone(&self.store);
        let handler_command = command.clone();
        host.register_command(
            &command,
            CommandOptions::new().checkable(self.enabled()),
            Box::new(move |arg: &CommandArg, services: &mut dyn HostServices| {
                let checked = arg.as_checked().ok_or_else(|| HostError::InvalidArgument {
                    command: handler_command.clone(),
                    reason: format!("expected a checked state, got '{arg}'"),
                })?;
                let mut store = store.borrow_mut();
                update_shortcuts(store.settings(), services, checked, true);
                store
                    .set_enabled(checked)
                    .map_err(|err| HostError::Plugin(err.to_string()))
            }),
        )?;

        // Plugins attach before the view is ready, so the stored state is
        // applied once the actions exist.
        let store = Rc::clone(&self.store);
        host.subscribe(
            HostEvent::ViewReady,
            Box::new(move |services: &mut dyn HostServices| {
                let store = store.borrow();
                let settings = store.settings();
                update_shortcuts(settings, services, settings.enabled, false);
            }),
        );
        Ok(())
    }
}
