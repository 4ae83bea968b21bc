use std::path::PathBuf;

use crate::definitions::{AnyId, ClientProperty, ConnectStatus, ConnectionId, ServerProperty};
use crate::error::HostError;

/// The operations a plugin may call on its host.
///
/// The host hands its function table over once, before the plugin is
/// initialized. A binding layer wraps that table in an implementation of this
/// trait and installs it with the `install_host` function generated by
/// [`declare_plugin!`](crate::declare_plugin). Tests install a recording double
/// instead.
///
/// Implementations are called from whichever host thread runs the callback,
/// hence `Send + Sync`. Strings returned by the host are copied into owned
/// values; the implementation releases the host's buffers itself.
pub trait HostFunctions: Send + Sync {
    /// Directory the host application runs from.
    fn app_path(&self) -> Result<PathBuf, HostError>;

    /// Directory holding the host's bundled resources.
    fn resources_path(&self) -> Result<PathBuf, HostError>;

    /// Directory holding the host's per-user configuration.
    fn config_path(&self) -> Result<PathBuf, HostError>;

    /// Directory the plugin library was loaded from.
    fn plugin_path(&self, plugin_id: &str) -> Result<PathBuf, HostError>;

    fn server_variable_as_string(
        &self,
        connection: ConnectionId,
        property: ServerProperty,
    ) -> Result<String, HostError>;

    fn client_variable_as_string(
        &self,
        connection: ConnectionId,
        client: AnyId,
        property: ClientProperty,
    ) -> Result<String, HostError>;

    fn connection_status(&self, connection: ConnectionId) -> Result<ConnectStatus, HostError>;

    /// Our own client id on `connection`.
    fn client_id(&self, connection: ConnectionId) -> Result<AnyId, HostError>;

    /// Print a BBCode message into the chat tab that currently has focus.
    fn print_message_to_current_tab(&self, message: &str);

    /// Send a BBCode private message to `target` on `connection`.
    fn request_send_private_text_msg(
        &self,
        connection: ConnectionId,
        message: &str,
        target: AnyId,
    ) -> Result<(), HostError>;

    /// Grey out (or re-enable) one of this plugin's menu entries.
    fn set_plugin_menu_enabled(&self, plugin_id: &str, menu_id: i32, enabled: bool);
}
