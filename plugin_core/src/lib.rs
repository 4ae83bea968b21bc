pub mod definitions;
pub mod error;
pub mod ffi_guard;
pub mod host;
pub mod logging;
pub mod markup;
pub mod memory;
pub mod menu;
pub mod plugin;
pub mod plugin_context;
pub mod plugin_macros;
pub mod plugin_slot;

pub use definitions::{
    AnyId, ClientProperty, ConnectStatus, ConnectionId, PluginItemType, PluginMenuType, ServerProperty,
};
pub use error::{HostError, PluginError};
pub use host::HostFunctions;
pub use logging::*;
pub use menu::{MenuItem, PluginMenuItem, PluginMenus};
pub use plugin::{MenuEvent, Plugin};
pub use plugin_context::{HostPaths, PluginContext};
pub use plugin_slot::PluginSlot;
