//! # Zone-Qualified Address Model
//!
//! A [`ZoneAddr`] is an IP address or network plus an optional zone naming
//! the interface it is scoped to. An empty zone means "every interface".
//!
//! Accepted inputs:
//! * IPv4 address, with or without zone: `4.5.6.7`, `1.2.3.4%lo0`
//! * IPv4 network, with or without zone: `192.168.0.0/16`, `192.168.0.0/16%eth0`
//! * IPv6 address, with or without zone: `::1`, `::1%eth0`
//! * IPv6 network, with or without zone: `2001:DB8::/48`, `2001:DB8::/48%eth0`

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use tracing::{debug, warn};
use zoneaddr_common::config::ParseOptions;
use zoneaddr_common::error::{Result, ZoneError};
use zoneaddr_common::network::interface::{InterfaceDirectory, SystemInterfaces};

use crate::parser::{self, Prefix};
use crate::zone::{self, NO_ZONE, ZONE_SEP};

/// Label reported for this kind of address when treated as a generic network address.
pub const NETWORK_NAME: &str = "ip+net+zone";

/// An IP address or network, optionally scoped to an interface.
///
/// Two values are equal only when their zones, addresses and masks all match
/// exactly. Addresses compare by representation: `1.2.3.4` and
/// `::ffff:1.2.3.4` are different values, and a host never equals a
/// full-length network over the same address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneAddr {
    prefix: Prefix,
    zone: String,
}

impl ZoneAddr {
    /// Parses with [`ParseOptions::default`].
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with(s, &ParseOptions::default())
    }

    pub fn parse_with(s: &str, options: &ParseOptions) -> Result<Self> {
        let (body, zone) = zone::split_zone(s)?;
        let prefix: Prefix = parser::parse_prefix(body)?;

        let zone: &str = match zone {
            Some("") if !options.allow_empty_zone => {
                return Err(ZoneError::EmptyZone(s.to_string()));
            }
            Some(zone) => zone,
            None => NO_ZONE,
        };

        Ok(Self {
            prefix,
            zone: zone.to_string(),
        })
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn ip(&self) -> IpAddr {
        self.prefix.ip()
    }

    pub fn mask(&self) -> Option<IpAddr> {
        self.prefix.mask()
    }

    pub fn prefix_len(&self) -> Option<u8> {
        self.prefix.prefix_len()
    }

    /// Raw address bytes, 4 or 16 long.
    pub fn octets(&self) -> Vec<u8> {
        parser::octets(self.ip())
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn network_name(&self) -> &'static str {
        NETWORK_NAME
    }

    /// True for 4-byte addresses and for IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`).
    pub fn is_ipv4(&self) -> bool {
        match self.ip() {
            IpAddr::V4(_) => true,
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
        }
    }

    pub fn is_ipv6(&self) -> bool {
        !self.is_ipv4()
    }

    pub fn is_network(&self) -> bool {
        self.prefix.is_network()
    }

    pub fn has_zone(&self) -> bool {
        self.zone != NO_ZONE
    }

    /// Exact comparison; an empty zone only matches an empty query.
    pub fn eq_zone(&self, zone: &str) -> bool {
        self.zone == zone
    }

    /// `None` stands for "any interface" and always matches.
    pub fn eq_interface(&self, interface: Option<&NetworkInterface>) -> bool {
        interface.is_none_or(|interface| self.eq_zone(&interface.name))
    }

    /// Interfaces this value applies to on the live host.
    ///
    /// See [`ZoneAddr::interfaces_in`].
    pub fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        self.interfaces_in(&SystemInterfaces)
    }

    /// Without a zone, every interface in `directory`; with one, the single
    /// interface of that name. An unknown zone is an error, not an empty list.
    pub fn interfaces_in<D>(&self, directory: &D) -> Result<Vec<NetworkInterface>>
    where
        D: InterfaceDirectory + ?Sized,
    {
        if !self.has_zone() {
            return directory.list();
        }

        match directory.by_name(&self.zone) {
            Ok(interface) => {
                debug!("Zone {} of {self} resolved to interface {}", self.zone, interface.index);
                Ok(vec![interface])
            }
            Err(err) => {
                warn!("Zone {} of {self} does not resolve: {err}", self.zone);
                Err(err)
            }
        }
    }

    /// True if `ip` lies inside this network (or equals this address) and
    /// `interface` matches the zone. `None` matches any interface.
    pub fn contains_with_interface(&self, ip: IpAddr, interface: Option<&NetworkInterface>) -> bool {
        self.eq_interface(interface) && self.contains_ip(ip)
    }

    /// Same as [`ZoneAddr::contains_with_interface`] on any interface.
    pub fn contains(&self, ip: IpAddr) -> bool {
        self.contains_with_interface(ip, None)
    }

    fn contains_ip(&self, ip: IpAddr) -> bool {
        match self.prefix {
            Prefix::Host(own) => own.to_canonical() == ip.to_canonical(),
            Prefix::Network(net) => {
                let in_network = in_family_of(ip, &net).is_some_and(|ip| net.contains(ip));
                in_network || net.ip().to_canonical() == ip.to_canonical()
            }
        }
    }
}

/// Re-expresses `ip` in the address family of `net`, going through the
/// IPv4-mapped IPv6 form. `None` if a plain IPv6 address meets an IPv4 network.
fn in_family_of(ip: IpAddr, net: &IpNetwork) -> Option<IpAddr> {
    match (ip, net) {
        (IpAddr::V4(v4), IpNetwork::V6(_)) => Some(IpAddr::V6(v4.to_ipv6_mapped())),
        (IpAddr::V6(v6), IpNetwork::V4(_)) => v6.to_ipv4_mapped().map(IpAddr::V4),
        _ => Some(ip),
    }
}

impl FromStr for ZoneAddr {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ZoneAddr {
    type Error = ZoneError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ZoneAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Prefix::Host(ip) => write!(f, "{ip}")?,
            Prefix::Network(net) => write!(f, "{}/{}", net.ip(), net.prefix())?,
        }
        if self.has_zone() {
            write!(f, "{ZONE_SEP}{}", self.zone)?;
        }
        Ok(())
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
