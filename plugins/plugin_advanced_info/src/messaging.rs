use liblogger_macros::log_args;
use plugin_core::markup::{bold, color, open_color};
use plugin_core::{log_warn, ConnectionId, HostError, HostFunctions};

use crate::toggle::ToggleOutcome;

const HIGHLIGHT: &str = "#00aaff";

/// `[color=black]<[b]Advanced Information[/b]> `, the prefix of every notice.
fn notice_prefix() -> String {
    format!("{}<{}> ", open_color("black"), bold("Advanced Information"))
}

/// Notice text for a toggle request.
pub fn outcome_message(outcome: ToggleOutcome) -> String {
    let body = match outcome {
        ToggleOutcome::Enabled => format!(
            "The {} has been {}",
            color(HIGHLIGHT, "Plugin"),
            color("green", "enabled")
        ),
        ToggleOutcome::AlreadyEnabled => format!("The {} is already enabled", color("red", "Plugin")),
        ToggleOutcome::Disabled => format!(
            "The {} has been {}",
            color(HIGHLIGHT, "Plugin"),
            color("red", "disabled")
        ),
        ToggleOutcome::AlreadyDisabled => format!("The {} is already disabled", color("red", "Plugin")),
    };
    format!("{}{}", notice_prefix(), body)
}

/// Show `message` to the local user.
///
/// Without a server connection the text goes to the current chat tab. When
/// connected it is sent as a private message to our own client, so it shows
/// up in the server's chat. An unknown connection status counts as
/// disconnected.
#[log_args(connection)]
pub fn send_message(
    host: &dyn HostFunctions,
    connection: ConnectionId,
    message: &str,
) -> Result<(), HostError> {
    let connected = match host.connection_status(connection) {
        Ok(status) => status.is_connected(),
        Err(e) => {
            log_warn!("Connection status of {} unavailable: {}", connection, e);
            false
        }
    };

    if !connected {
        host.print_message_to_current_tab(message);
        return Ok(());
    }

    let own_id = host.client_id(connection)?;
    host.request_send_private_text_msg(connection, message, own_id)
}
