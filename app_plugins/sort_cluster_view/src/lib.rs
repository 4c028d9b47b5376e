//! Secondary ordering for the cluster view.
//!
//! Rows with identical values in the clicked column are ordered by a
//! prioritized list of further columns, always ascending, so their order no
//! longer shuffles after splits and merges. Keeping `id` last makes the
//! order total.

use cluster_order::ColumnPriority;
use phyplug_core::{parse_column_list, ColumnPriorityStore, ConfigError};
use plugin_host::{
    CommandArg, CommandOptions, HostError, HostEvent, HostPlugin, HostServices, PluginHost,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const SELECT_SECONDARY_SORTING: &str = "select_secondary_sorting";

pub struct SortClusterViewPlugin {
    store: Rc<RefCell<ColumnPriorityStore>>,
}

impl SortClusterViewPlugin {
    pub fn new(store: ColumnPriorityStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    pub fn priority(&self) -> ColumnPriority {
        self.store.borrow().priority().clone()
    }
}

impl HostPlugin for SortClusterViewPlugin {
    fn name(&self) -> &str {
        "SortClusterView"
    }

    fn attach(&self, host: &mut dyn PluginHost) -> Result<(), HostError> {
        let store = Rc::clone(&self.store);
        host.subscribe(
            HostEvent::ViewReady,
            Box::new(move |services: &mut dyn HostServices| {
                services.apply_secondary_sort(store.borrow().columns());
            }),
        );

        let prompt_store = Rc::clone(&self.store);
        let store = Rc::clone(&self.store);
        host.register_command(
            SELECT_SECONDARY_SORTING,
            CommandOptions::new()
                .menu("Select")
                .submenu("Sort by")
                .prompt(move || prompt_store.borrow().priority().to_string()),
            Box::new(move |arg: &CommandArg, services: &mut dyn HostServices| {
                let input = arg.as_text().ok_or_else(|| HostError::InvalidArgument {
                    command: SELECT_SECONDARY_SORTING.to_string(),
                    reason: "expected comma-separated column names".to_string(),
                })?;
                let candidate = parse_column_list(input);
                let available = services.available_columns();
                let applied = store
                    .borrow_mut()
                    .reconfigure(&candidate, &available)
                    .map(|priority| priority.columns().to_vec());
                match applied {
                    Ok(columns) => {
                        services.apply_secondary_sort(&columns);
                        Ok(())
                    }
                    Err(err @ ConfigError::NoValidColumns { .. }) => {
                        services.notify(
                            log::Level::Warn,
                            &format!(
                                "Secondary sorting unchanged ({}): {err}",
                                store.borrow().priority()
                            ),
                        );
                        Err(HostError::InvalidArgument {
                            command: SELECT_SECONDARY_SORTING.to_string(),
                            reason: err.to_string(),
                        })
                    }
                    Err(err) => Err(HostError::Plugin(err.to_string())),
                }
            }),
        )
    }
}
