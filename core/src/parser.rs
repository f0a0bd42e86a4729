//! # Address/Network Parsing
//!
//! Reads the body of a zone-qualified address (everything before the `%`).
//!
//! Supported formats:
//! * **Network**: "Address/Prefix" (e.g., "192.168.0.0/16", "2001:db8::/48").
//! * **Host**: Single IPv4/IPv6 address (e.g., "4.5.6.7", "::1").
//!
//! Network syntax is tried first. Only a body without any `/` falls back to
//! host parsing; a malformed network is never re-read as a host.

use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;
use tracing::trace;
use zoneaddr_common::error::{Result, ZoneError};

/// The address part of a zone-qualified address.
///
/// A host carries no mask at all. That is not the same value as a network
/// whose mask has every bit set (`/32`, `/128`), although neither one is
/// considered a network by [`Prefix::is_network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// A single address with no mask.
    Host(IpAddr),
    /// A network number together with its prefix length.
    Network(IpNetwork),
}

impl Prefix {
    pub fn ip(&self) -> IpAddr {
        match self {
            Prefix::Host(ip) => *ip,
            Prefix::Network(net) => net.ip(),
        }
    }

    /// The netmask, absent for a host.
    pub fn mask(&self) -> Option<IpAddr> {
        match self {
            Prefix::Host(_) => None,
            Prefix::Network(net) => Some(net.mask()),
        }
    }

    pub fn prefix_len(&self) -> Option<u8> {
        match self {
            Prefix::Host(_) => None,
            Prefix::Network(net) => Some(net.prefix()),
        }
    }

    /// True when a mask is present and at least one of its bytes is not `0xff`.
    pub fn is_network(&self) -> bool {
        self.mask()
            .is_some_and(|mask| octets(mask).iter().any(|&byte| byte != 0xff))
    }
}

/// Parses a network (`addr/len`) or, failing that, a bare address.
pub fn parse_prefix(body: &str) -> Result<Prefix> {
    if let Some(network) = parse_network(body)? {
        trace!("Parsed '{body}' as network {network}");
        return Ok(Prefix::Network(network));
    }

    let ip: IpAddr = body
        .parse::<IpAddr>()
        .map_err(|_| ZoneError::InvalidAddress(body.to_string()))?;

    trace!("Parsed '{body}' as host {ip}");
    Ok(Prefix::Host(ip))
}

/// Parses CIDR notation like "192.168.1.0/24".
///
/// Returns `Ok(None)` when `body` is not network syntax at all. The address
/// is reduced to its network number, so "10.1.2.3/8" yields "10.0.0.0/8".
fn parse_network(body: &str) -> Result<Option<IpNetwork>> {
    let Some((ip_str, prefix_str)) = body.split_once('/') else {
        return Ok(None);
    };

    let ip: IpAddr = ip_str
        .parse::<IpAddr>()
        .map_err(|_| ZoneError::InvalidAddress(body.to_string()))?;

    let invalid_prefix = || ZoneError::InvalidPrefixLength {
        body: body.to_string(),
        prefix: prefix_str.to_string(),
    };

    let prefix: u8 = parse_prefix_len(prefix_str).ok_or_else(invalid_prefix)?;
    let network: IpNetwork = IpNetwork::new(ip, prefix).map_err(|_| invalid_prefix())?;
    let network: IpNetwork =
        IpNetwork::new(network.network(), prefix).map_err(|_| invalid_prefix())?;

    Ok(Some(network))
}

/// Plain decimal digits only: no sign, no whitespace, no netmask form.
fn parse_prefix_len(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

/// Raw bytes of an address: 4 for IPv4, 16 for IPv6.
pub fn octets(ip: IpAddr) -> Vec<u8> {
    match ip {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
