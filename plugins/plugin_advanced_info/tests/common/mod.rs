#![allow(dead_code)]

use std::collections::HashMap;
use std::ffi::CString;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use plugin_core::{AnyId, ClientProperty, ConnectStatus, ConnectionId, HostError, HostFunctions, ServerProperty};

pub const PLUGIN_ID: &str = "advanced_info_test";

/// Everything the plugin asked the host to do, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    MenuEnabled { plugin_id: String, menu_id: i32, enabled: bool },
    TabMessage(String),
    PrivateMessage { connection: ConnectionId, target: AnyId, message: String },
}

/// Host double that answers from canned values and records every outbound call.
pub struct RecordingHost {
    pub status: Mutex<ConnectStatus>,
    pub own_id: AnyId,
    pub config_path: Option<PathBuf>,
    pub server_vars: HashMap<&'static str, String>,
    pub unique_ids: HashMap<AnyId, String>,
    calls: Mutex<Vec<HostCall>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        RecordingHost {
            status: Mutex::new(ConnectStatus::Disconnected),
            own_id: 7,
            config_path: None,
            server_vars: HashMap::new(),
            unique_ids: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn menu_calls(&self) -> Vec<(i32, bool)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::MenuEnabled { menu_id, enabled, .. } => Some((menu_id, enabled)),
                _ => None,
            })
            .collect()
    }

    /// Message texts, whichever way they were delivered.
    pub fn messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::TabMessage(message) => Some(message),
                HostCall::PrivateMessage { message, .. } => Some(message),
                HostCall::MenuEnabled { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

const NOT_FOUND: HostError = HostError::Code(0x0200);

impl HostFunctions for RecordingHost {
    fn app_path(&self) -> Result<PathBuf, HostError> {
        Ok(PathBuf::from("/opt/voice"))
    }

    fn resources_path(&self) -> Result<PathBuf, HostError> {
        Ok(PathBuf::from("/opt/voice/resources"))
    }

    fn config_path(&self) -> Result<PathBuf, HostError> {
        self.config_path.clone().ok_or(HostError::Code(0x0001))
    }

    fn plugin_path(&self, plugin_id: &str) -> Result<PathBuf, HostError> {
        Ok(PathBuf::from("/opt/voice/plugins").join(plugin_id))
    }

    fn server_variable_as_string(&self, _: ConnectionId, property: ServerProperty) -> Result<String, HostError> {
        let key = match property {
            ServerProperty::Id => "id",
            ServerProperty::QueryClientsOnline => "queries",
        };
        self.server_vars.get(key).cloned().ok_or(NOT_FOUND)
    }

    fn client_variable_as_string(
        &self,
        _: ConnectionId,
        client: AnyId,
        _: ClientProperty,
    ) -> Result<String, HostError> {
        self.unique_ids.get(&client).cloned().ok_or(NOT_FOUND)
    }

    fn connection_status(&self, _: ConnectionId) -> Result<ConnectStatus, HostError> {
        Ok(*self.status.lock().unwrap())
    }

    fn client_id(&self, _: ConnectionId) -> Result<AnyId, HostError> {
        Ok(self.own_id)
    }

    fn print_message_to_current_tab(&self, message: &str) {
        self.record(HostCall::TabMessage(message.to_string()));
    }

    fn request_send_private_text_msg(
        &self,
        connection: ConnectionId,
        message: &str,
        target: AnyId,
    ) -> Result<(), HostError> {
        self.record(HostCall::PrivateMessage {
            connection,
            target,
            message: message.to_string(),
        });
        Ok(())
    }

    fn set_plugin_menu_enabled(&self, plugin_id: &str, menu_id: i32, enabled: bool) {
        self.record(HostCall::MenuEnabled {
            plugin_id: plugin_id.to_string(),
            menu_id,
            enabled,
        });
    }
}

/// The exported entry points share one plugin slot per test binary.
static EXPORTS: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process-wide state without loading the plugin.
pub fn lock_exports() -> MutexGuard<'static, ()> {
    EXPORTS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Loads the plugin against `host` the way the host does and unloads it on drop.
pub struct LoadedPlugin {
    pub host: Arc<RecordingHost>,
    _guard: MutexGuard<'static, ()>,
}

impl LoadedPlugin {
    pub fn load(host: RecordingHost) -> Self {
        let guard = lock_exports();
        let host = Arc::new(host);
        plugin_advanced_info::install_host(host.clone());

        let id = CString::new(PLUGIN_ID).unwrap();
        plugin_advanced_info::ts3plugin_registerPluginID(id.as_ptr());
        assert_eq!(plugin_advanced_info::ts3plugin_init(), 0);

        LoadedPlugin { host, _guard: guard }
    }

    /// Unload early. Dropping unloads again, which finds nothing left to do.
    pub fn unload(&self) {
        plugin_advanced_info::ts3plugin_shutdown();
    }
}

impl Drop for LoadedPlugin {
    fn drop(&mut self) {
        self.unload();
    }
}
