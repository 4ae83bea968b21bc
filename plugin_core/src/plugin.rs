use std::ffi::CStr;
use std::os::raw::c_int;

use crate::definitions::{ConnectionId, PluginItemType, PluginMenuType, PLUGIN_API_VERSION};
use crate::error::PluginError;
use crate::menu::PluginMenus;
use crate::plugin_context::PluginContext;

/// A menu entry was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEvent {
    /// Server tab the menu was opened in.
    pub connection: ConnectionId,
    pub kind: PluginMenuType,
    pub menu_item_id: i32,
    /// Channel or client the menu was opened on; unused for global menus.
    pub selected_item_id: u64,
}

/// A client plugin as seen by the host.
///
/// Implement this for the plugin's state type and hand the type to
/// [`declare_plugin!`](crate::declare_plugin), which exports the C entry points
/// the host looks up and routes each of them here.
///
/// Lifecycle:
/// - `init` runs once when the host loads the plugin and builds the instance.
///   Every later callback receives that instance and a fresh
///   [`PluginContext`].
/// - `shutdown` runs once when the host unloads the plugin; the instance is
///   dropped right after.
///
/// Callbacks may arrive on any host thread, so shared mutable state inside
/// the instance needs its own synchronization.
pub trait Plugin: Send + Sync + Sized + 'static {
    const NAME: &'static CStr;
    const VERSION: &'static CStr;
    const AUTHOR: &'static CStr;
    const DESCRIPTION: &'static CStr;
    const API_VERSION: c_int = PLUGIN_API_VERSION;

    /// Static title of the plugin's info-frame section.
    const INFO_TITLE: Option<&'static CStr> = None;

    fn init(ctx: &PluginContext) -> Result<Self, PluginError>;

    fn shutdown(&self, _ctx: &PluginContext) {}

    /// Extra info-frame text for the item the user selected, or `None` to
    /// show nothing.
    fn info_data(
        &self,
        _ctx: &PluginContext,
        _connection: ConnectionId,
        _id: u64,
        _kind: PluginItemType,
    ) -> Option<String> {
        None
    }

    /// Menu entries to register.
    fn menus(&self) -> PluginMenus {
        PluginMenus::default()
    }

    /// Called right after the menus were handed to the host.
    fn menus_registered(&self, _ctx: &PluginContext) {}

    fn on_menu_item_event(&self, _ctx: &PluginContext, _event: MenuEvent) {}
}
