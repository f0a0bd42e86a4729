//! # Interface Directory
//!
//! Read-only access to the host's network interfaces, used to resolve a
//! zone name into the interface(s) it refers to.
//!
//! Interfaces come and go while a process runs, so nothing here caches:
//! every call reflects the host as it is at that moment.

use pnet::datalink::{self, NetworkInterface};
use tracing::{debug, trace};

use crate::error::{Result, ZoneError};

/// A source of network interfaces.
///
/// Implemented for [`SystemInterfaces`] (the live host) and for any
/// `Fn() -> Result<Vec<NetworkInterface>>`, which lets callers inject a
/// fixed interface list.
pub trait InterfaceDirectory {
    /// Lists every interface currently known.
    fn list(&self) -> Result<Vec<NetworkInterface>>;

    /// Looks up a single interface by its exact name.
    fn by_name(&self, name: &str) -> Result<NetworkInterface> {
        let interfaces: Vec<NetworkInterface> = self.list()?;
        find_by_name(interfaces, name)
    }
}

/// The interfaces of the running host, as reported by `pnet`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceDirectory for SystemInterfaces {
    fn list(&self) -> Result<Vec<NetworkInterface>> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        debug!("Identified {} network interface(s)", interfaces.len());
        Ok(interfaces)
    }
}

impl<F> InterfaceDirectory for F
where
    F: Fn() -> Result<Vec<NetworkInterface>>,
{
    fn list(&self) -> Result<Vec<NetworkInterface>> {
        self()
    }
}

fn find_by_name(interfaces: Vec<NetworkInterface>, name: &str) -> Result<NetworkInterface> {
    let found: Option<NetworkInterface> =
        interfaces.into_iter().find(|interface| interface.name == name);
    match found {
        Some(interface) => {
            trace!("Resolved interface {name} (index {})", interface.index);
            Ok(interface)
        }
        None => Err(ZoneError::InterfaceNotFound(name.to_string())),
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
