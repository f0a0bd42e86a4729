//! # Zone-Qualified Addresses
//!
//! An IP address or network optionally scoped to a network interface with a
//! `%zone` suffix, e.g. `fe80::1%eth0` or `192.168.0.0/16%eth0`.
//!
//! Parsing runs in two stages: [`zone::split_zone`] separates the zone, then
//! [`parser::parse_prefix`] reads the remaining text as a network or a bare
//! address. The result is an immutable [`ZoneAddr`].

pub mod addr;
pub mod parser;
pub mod zone;

pub use addr::ZoneAddr;
pub use parser::Prefix;
pub use zoneaddr_common::config::ParseOptions;
pub use zoneaddr_common::error::{Result, ZoneError};
