//! Plugin activation, removal and registration hooks

use tracing::{debug, info};

use crate::store::OptionStore;
use crate::widget::WidgetDescriptor;

/// Option the host sets right after the plugin is activated.
pub const ACTIVATION_OPTION: &str = "Activated_Plugin";
pub const PLUGIN_SLUG: &str = "Plugin-Slug";

/// Host-side widget registry.
pub trait WidgetRegistry {
    fn register_widget(&mut self, descriptor: WidgetDescriptor);
}

impl WidgetRegistry for Vec<WidgetDescriptor> {
    fn register_widget(&mut self, descriptor: WidgetDescriptor) {
        self.push(descriptor);
    }
}

/// Called once when the plugin is activated. Writes no output.
pub fn install() {
    info!("timeline-menu installed");
}

/// Called once when the plugin is removed.
pub fn uninstall() {
    info!("timeline-menu uninstalled");
}

/// Widget init hook.
pub fn register<R: WidgetRegistry + ?Sized>(registry: &mut R) {
    let descriptor = WidgetDescriptor::default();
    debug!("Registering widget {}", descriptor.id_base);
    registry.register_widget(descriptor);
}

/// Admin init hook: clear the one-shot activation marker. Returns whether it
/// was cleared.
pub fn on_admin_init<O: OptionStore + ?Sized>(is_admin: bool, options: &mut O) -> bool {
    if is_admin && options.get(ACTIVATION_OPTION).as_deref() == Some(PLUGIN_SLUG) {
        debug!("Clearing activation marker");
        return options.delete(ACTIVATION_OPTION);
    }
    false
}
