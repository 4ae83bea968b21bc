//! The small slice of host identifiers and limits a client plugin touches.
//!
//! Raw values arrive from the host as plain C ints, so every enum here is
//! converted with `TryFrom` instead of being transmuted.

use std::os::raw::c_int;

/// Plugin API version this core is written against.
pub const PLUGIN_API_VERSION: c_int = 26;

/// Size of the fixed text and icon buffers in a menu item, NUL included.
pub const PLUGIN_MENU_BUFSZ: usize = 128;

/// Upper bound for info-frame text handed to the host, NUL included.
pub const INFODATA_BUFSIZE: usize = 128;

/// Identifies one server connection tab in the host.
pub type ConnectionId = u64;

/// Client id on a server.
pub type AnyId = u16;

/// What an info frame is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum PluginItemType {
    Server = 0,
    Channel = 1,
    Client = 2,
}

impl TryFrom<c_int> for PluginItemType {
    type Error = c_int;

    fn try_from(raw: c_int) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(PluginItemType::Server),
            1 => Ok(PluginItemType::Channel),
            2 => Ok(PluginItemType::Client),
            other => Err(other),
        }
    }
}

/// Where a plugin menu entry is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum PluginMenuType {
    Global = 0,
    Channel = 1,
    Client = 2,
}

impl TryFrom<c_int> for PluginMenuType {
    type Error = c_int;

    fn try_from(raw: c_int) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(PluginMenuType::Global),
            1 => Ok(PluginMenuType::Channel),
            2 => Ok(PluginMenuType::Client),
            other => Err(other),
        }
    }
}

/// Connection state of a server tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStatus {
    Disconnected,
    Connecting,
    Connected,
    ConnectionEstablishing,
    ConnectionEstablished,
}

impl ConnectStatus {
    pub fn is_connected(self) -> bool {
        !matches!(self, ConnectStatus::Disconnected)
    }
}

/// Virtual server properties the plugins here read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerProperty {
    Id,
    QueryClientsOnline,
}

/// Client properties the plugins here read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientProperty {
    UniqueIdentifier,
}
