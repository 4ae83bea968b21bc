use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{HostError, PluginError};
use crate::host::HostFunctions;
use crate::plugin::Plugin;
use crate::plugin_context::PluginContext;

/// Holds a plugin instance between the host's load and unload calls.
///
/// [`declare_plugin!`](crate::declare_plugin) places one slot in a static and
/// routes every export through it. Locks are held only long enough to clone
/// the `Arc`s out, so a callback never runs under a slot lock.
pub struct PluginSlot<P> {
    host: RwLock<Option<Arc<dyn HostFunctions>>>,
    plugin_id: RwLock<Option<Arc<str>>>,
    instance: RwLock<Option<Arc<P>>>,
}

impl<P: Plugin> PluginSlot<P> {
    pub const fn new() -> Self {
        PluginSlot {
            host: RwLock::new(None),
            plugin_id: RwLock::new(None),
            instance: RwLock::new(None),
        }
    }

    pub fn install_host(&self, host: Arc<dyn HostFunctions>) {
        *self.host.write().unwrap_or_else(PoisonError::into_inner) = Some(host);
    }

    pub fn register_plugin_id(&self, id: &str) {
        *self.plugin_id.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::from(id));
    }

    pub fn context(&self) -> Result<PluginContext, HostError> {
        let host = self
            .host
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(HostError::NotInstalled)?;
        let plugin_id = self
            .plugin_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(PluginContext::new(host, plugin_id))
    }

    /// Build the instance. Replaces any instance left over from an unload
    /// that never happened.
    pub fn init(&self) -> Result<(), PluginError> {
        let ctx = self.context()?;
        let plugin = P::init(&ctx)?;
        *self.instance.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(plugin));
        Ok(())
    }

    /// Run the plugin's shutdown hook and drop the instance and plugin id.
    pub fn shutdown(&self) {
        let instance = self
            .instance
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let (Some(plugin), Ok(ctx)) = (instance, self.context()) {
            plugin.shutdown(&ctx);
        }
        *self.plugin_id.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn instance(&self) -> Option<Arc<P>> {
        self.instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `f` against the live instance. `None` when the plugin is not loaded.
    pub fn with_instance<R>(&self, f: impl FnOnce(&P, &PluginContext) -> R) -> Option<R> {
        let plugin = self.instance()?;
        let ctx = self.context().ok()?;
        Some(f(&plugin, &ctx))
    }
}

impl<P: Plugin> Default for PluginSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}
