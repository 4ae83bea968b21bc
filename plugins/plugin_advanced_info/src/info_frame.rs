//! Extra lines for the host's server, channel and client info frames.

use liblogger_macros::measure_time;
use plugin_core::markup::info_line;
use plugin_core::{
    log_debug, AnyId, ClientProperty, ConnectionId, HostError, HostFunctions, PluginItemType, ServerProperty,
};

/// Text for the info frame of item `id`, or `None` when a lookup failed.
#[measure_time]
pub fn info_text(
    host: &dyn HostFunctions,
    connection: ConnectionId,
    id: u64,
    kind: PluginItemType,
) -> Option<String> {
    let text = match kind {
        PluginItemType::Server => server_text(host, connection),
        PluginItemType::Channel => Ok(info_line("ChannelID:", &id.to_string())),
        PluginItemType::Client => client_text(host, connection, id),
    };

    match text {
        Ok(text) => Some(text),
        Err(e) => {
            log_debug!("No info data for {:?} {}: {}", kind, id, e);
            None
        }
    }
}

fn server_text(host: &dyn HostFunctions, connection: ConnectionId) -> Result<String, HostError> {
    let server_id = host.server_variable_as_string(connection, ServerProperty::Id)?;
    let queries = host.server_variable_as_string(connection, ServerProperty::QueryClientsOnline)?;
    Ok(format!(
        "{}\n{}",
        info_line("VirtualserverID:", &server_id),
        info_line("Queries:", &queries)
    ))
}

fn client_text(host: &dyn HostFunctions, connection: ConnectionId, id: u64) -> Result<String, HostError> {
    // Client ids are 16 bit on the wire; the host widens them for info frames.
    let client = id as AnyId;
    let unique_id = host.client_variable_as_string(connection, client, ClientProperty::UniqueIdentifier)?;
    Ok(format!(
        "{}\n{}",
        info_line("ClientID:", &id.to_string()),
        info_line("UniqueID:", &unique_id)
    ))
}
