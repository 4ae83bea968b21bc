use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::HostError;
use crate::host::HostFunctions;

/// Everything a plugin callback needs from its surroundings.
///
/// Built by [`PluginSlot`](crate::PluginSlot) for each callback from the
/// installed host functions and the id the host registered for this plugin.
/// Cloning is cheap.
#[derive(Clone)]
pub struct PluginContext {
    host: Arc<dyn HostFunctions>,
    plugin_id: Option<Arc<str>>,
}

/// Directories reported by the host at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPaths {
    pub app: Option<PathBuf>,
    pub resources: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plugin: Option<PathBuf>,
}

impl PluginContext {
    pub fn new(host: Arc<dyn HostFunctions>, plugin_id: Option<Arc<str>>) -> Self {
        PluginContext { host, plugin_id }
    }

    pub fn host(&self) -> &dyn HostFunctions {
        self.host.as_ref()
    }

    /// Id the host assigned through `registerPluginID`, if it has done so.
    pub fn plugin_id(&self) -> Option<&str> {
        self.plugin_id.as_deref()
    }

    /// Enable or grey out one of this plugin's menu entries.
    pub fn set_menu_enabled(&self, menu_id: i32, enabled: bool) -> Result<(), HostError> {
        let plugin_id = self.plugin_id().ok_or(HostError::PluginIdMissing)?;
        self.host.set_plugin_menu_enabled(plugin_id, menu_id, enabled);
        Ok(())
    }

    /// Query the host directories. A failed query leaves its entry empty.
    pub fn paths(&self) -> HostPaths {
        HostPaths {
            app: self.host.app_path().ok(),
            resources: self.host.resources_path().ok(),
            config: self.host.config_path().ok(),
            plugin: self
                .plugin_id()
                .and_then(|id| self.host.plugin_path(id).ok()),
        }
    }
}

impl fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("plugin_id", &self.plugin_id)
            .finish_non_exhaustive()
    }
}
