//! Saves the clustering automatically after a configurable number of
//! minutes without a save.

use phyplug_core::{AutosaveStore, AutosaveTimer, TickOutcome};
use plugin_host::{
    CommandArg, CommandOptions, HostError, HostEvent, HostPlugin, HostServices, PluginHost,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const SET_AUTOSAVE_INTERVAL: &str = "Set auto-save interval";

pub struct AutosavePlugin {
    store: Rc<RefCell<AutosaveStore>>,
    timer: Rc<RefCell<AutosaveTimer>>,
}

impl AutosavePlugin {
    pub fn new(store: AutosaveStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            timer: Rc::new(RefCell::new(AutosaveTimer::new())),
        }
    }

    pub fn interval_minutes(&self) -> f64 {
        self.store.borrow().settings().interval_minutes
    }

    /// Seconds since the last save.
    pub fn elapsed(&self) -> u64 {
        self.timer.borrow().count()
    }
}

impl HostPlugin for AutosavePlugin {
    fn name(&self) -> &str {
        "Autosave"
    }

    fn attach(&self, host: &mut dyn PluginHost) -> Result<(), HostError> {
        let timer = Rc::clone(&self.timer);
        host.subscribe(
            HostEvent::GuiReady,
            Box::new(move |_: &mut dyn HostServices| timer.borrow_mut().reset()),
        );

        let timer = Rc::clone(&self.timer);
        let store = Rc::clone(&self.store);
        host.subscribe(
            HostEvent::Tick,
            Box::new(move |services: &mut dyn HostServices| {
                let outcome = timer.borrow_mut().tick(store.borrow().settings());
                match outcome {
                    TickOutcome::Save => {
                        log::info!("Trigger auto-save.");
                        services.save();
                        timer.borrow_mut().reset();
                    }
                    TickOutcome::Debug(count) => log::debug!("Counter: {count} seconds"),
                    TickOutcome::Idle => {}
                }
            }),
        );

        let timer = Rc::clone(&self.timer);
        host.subscribe(
            HostEvent::RequestSave,
            Box::new(move |_: &mut dyn HostServices| {
                log::debug!("Reset auto-save counter.");
                timer.borrow_mut().reset();
            }),
        );

        let prompt_store = Rc::clone(&self.store);
        let store = Rc::clone(&self.store);
        host.register_command(
            SET_AUTOSAVE_INTERVAL,
            CommandOptions::new().prompt(move || {
                prompt_store.borrow().settings().interval_minutes.to_string()
            }),
            Box::new(move |arg: &CommandArg, _: &mut dyn HostServices| {
                let minutes = arg.as_number().ok_or_else(|| HostError::InvalidArgument {
                    command: SET_AUTOSAVE_INTERVAL.to_string(),
                    reason: format!("expected a number of minutes, got '{arg}'"),
                })?;
                store
                    .borrow_mut()
                    .set_interval(minutes)
                    .map(|_| ())
                    .map_err(|err| HostError::Plugin(err.to_string()))
            }),
        )
    }
}
