//! # Error Taxonomy
//!
//! Parse failures are final: the same input always fails the same way.
//! Interface failures come from querying live host state and are only
//! raised by interface resolution, never by parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The input has more than one `%`.
    #[error("address/network may contain only one '%': <addr>%<zone>, got '{0}'")]
    MultipleZoneDelimiters(String),

    /// The input ends in `%` with no zone name.
    #[error("zone delimiter in '{0}' is not followed by a zone name")]
    EmptyZone(String),

    /// Neither a valid network nor a valid bare address.
    #[error("bad IPv4/IPv6 address or network: '{0}'")]
    InvalidAddress(String),

    /// Network syntax whose prefix length is not a decimal in range for the family.
    #[error("bad prefix length '{prefix}' in network '{body}'")]
    InvalidPrefixLength { body: String, prefix: String },

    /// The zone names no interface on this host.
    #[error("no network interface named '{0}'")]
    InterfaceNotFound(String),

    #[error("unable to enumerate network interfaces: {0}")]
    InterfaceEnumeration(String),
}

pub type Result<T> = std::result::Result<T, ZoneError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
