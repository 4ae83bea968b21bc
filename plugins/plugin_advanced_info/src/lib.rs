extern crate liblogger;
extern crate plugin_core;
extern crate liblogger_macros;

// Plugin core imports
use plugin_core::{
    log_debug, log_info, log_warn,
    declare_plugin, ConnectionId, HostError, HostPaths, MenuEvent, Plugin, PluginContext, PluginError,
    PluginItemType, PluginMenuType, PluginMenus,
};

// Standard library
use std::ffi::CStr;

use liblogger_macros::log_entry_exit;

pub mod info_frame;
pub mod menus;
pub mod messaging;
pub mod toggle;

use menus::MenuId;
use toggle::{apply_menu_enablement, PluginToggle, ToggleEffects};

/// Tag on every log line written by this plugin.
pub const LOG_SOURCE: &str = "plugin_advanced_info";

/// Logger settings, looked up in the host's config directory.
pub const CONFIG_FILE_NAME: &str = "advanced_info.toml";

/// Plugin state, built when the host loads the plugin.
#[derive(Debug, Default)]
pub struct AdvancedInfoPlugin {
    toggle: PluginToggle,
}

impl AdvancedInfoPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self) -> &PluginToggle {
        &self.toggle
    }

    #[log_entry_exit]
    fn handle_menu_event(&self, ctx: &PluginContext, event: MenuEvent) {
        let effects = HostEffects {
            ctx,
            connection: event.connection,
        };
        match (event.kind, MenuId::try_from(event.menu_item_id)) {
            (PluginMenuType::Global, Ok(MenuId::EnablePlugin)) => {
                self.toggle.request_enable(&effects);
            }
            (PluginMenuType::Global, Ok(MenuId::DisablePlugin)) => {
                self.toggle.request_disable(&effects);
            }
            (kind, _) => {
                log_debug!("Ignoring menu item {} of {:?} menu", event.menu_item_id, kind);
            }
        }
    }
}

/// Routes toggle side effects to the host for the connection a menu event came from.
struct HostEffects<'a> {
    ctx: &'a PluginContext,
    connection: ConnectionId,
}

impl ToggleEffects for HostEffects<'_> {
    fn set_menu_enabled(&self, menu: MenuId, enabled: bool) -> Result<(), HostError> {
        self.ctx.set_menu_enabled(menu.raw(), enabled)
    }

    fn notify(&self, message: &str) -> Result<(), HostError> {
        messaging::send_message(self.ctx.host(), self.connection, message)
    }
}

fn log_paths(paths: &HostPaths) {
    let entries = [
        ("App", &paths.app),
        ("Resources", &paths.resources),
        ("Config", &paths.config),
        ("Plugin", &paths.plugin),
    ];
    for (label, path) in entries {
        match path {
            Some(path) => log_debug!("{} path: {}", label, path.display()),
            None => log_warn!("{} path unavailable", label),
        }
    }
}

impl Plugin for AdvancedInfoPlugin {
    const NAME: &'static CStr = c"Advanced Information";
    const VERSION: &'static CStr = c"1.0";
    const AUTHOR: &'static CStr = c"EricZones";
    const DESCRIPTION: &'static CStr =
        c"Extends the visible data in info frames with useful information\nIncluding server frames, channel frames and client frames";
    const INFO_TITLE: Option<&'static CStr> = Some(c"Advanced Information");

    fn init(ctx: &PluginContext) -> Result<Self, PluginError> {
        let paths = ctx.paths();
        let config_file = paths.config.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME));
        if let Err(e) = plugin_core::init_logger(LOG_SOURCE, config_file.as_deref()) {
            log_warn!("Falling back to console logging: {}", e);
        }
        if let Some(config) = liblogger::Logger::active_config() {
            log_debug!("Logging to {:?} at {:?}", config.log_type, config.threshold);
        }

        log_paths(&paths);
        log_info!("Loading plugin...");
        Ok(AdvancedInfoPlugin::new())
    }

    fn shutdown(&self, _ctx: &PluginContext) {
        log_info!("Unloading plugin...");
        plugin_core::shutdown_logger();
    }

    fn info_data(
        &self,
        ctx: &PluginContext,
        connection: ConnectionId,
        id: u64,
        kind: PluginItemType,
    ) -> Option<String> {
        info_frame::info_text(ctx.host(), connection, id, kind)
    }

    fn menus(&self) -> PluginMenus {
        menus::plugin_menus()
    }

    fn menus_registered(&self, ctx: &PluginContext) {
        apply_menu_enablement(self.toggle.state(), |menu, enabled| {
            ctx.set_menu_enabled(menu.raw(), enabled)
        });
    }

    fn on_menu_item_event(&self, ctx: &PluginContext, event: MenuEvent) {
        self.handle_menu_event(ctx, event);
    }
}

declare_plugin!(AdvancedInfoPlugin);
