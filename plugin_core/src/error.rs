//! Error types shared by the plugin core and plugins built on it.

use thiserror::Error;

/// Failure reported by (or on the way to) the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("host returned error code {0:#06x}")]
    Code(u32),

    #[error("plugin id has not been registered by the host")]
    PluginIdMissing,

    #[error("host functions have not been installed")]
    NotInstalled,
}

/// Failure while bringing a plugin up.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("host error: {0}")]
    Host(#[from] HostError),
}
