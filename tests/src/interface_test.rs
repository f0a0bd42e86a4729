use std::net::IpAddr;

use pnet::datalink::{MacAddr, NetworkInterface};
use zoneaddr_common::error::{Result, ZoneError};
use zoneaddr_common::network::interface::{InterfaceDirectory, SystemInterfaces};
use zoneaddr_core::ZoneAddr;

use super::util::{init_tracing, ni, v4, v6};

/*************************************************************
                  Zone to interface resolution
**************************************************************/

#[test]
fn unzoned_network_resolves_to_every_interface() -> anyhow::Result<()> {
    init_tracing();
    let addr = ZoneAddr::parse("192.168.0.0/16")?;
    let interfaces = addr.interfaces_in(&iface_all)?;
    assert_eq!(interfaces, iface_all()?);
    Ok(())
}

#[test]
fn zoned_address_resolves_to_its_interface() -> anyhow::Result<()> {
    init_tracing();
    let addr = ZoneAddr::parse("fe80::36cf:f6ff:fe9a:1122%wlan0")?;
    let interfaces = addr.interfaces_in(&iface_all)?;
    assert_eq!(interfaces, vec![wlan0()]);
    Ok(())
}

#[test]
fn zone_naming_a_missing_interface_is_an_error() -> anyhow::Result<()> {
    init_tracing();
    let addr = ZoneAddr::parse("10.0.0.0/8%eth7")?;
    let result = addr.interfaces_in(&iface_all);
    assert_eq!(result, Err(ZoneError::InterfaceNotFound("eth7".to_string())));
    Ok(())
}

#[test]
fn enumeration_failure_propagates_for_unzoned_values() -> anyhow::Result<()> {
    init_tracing();
    let broken = || -> Result<Vec<NetworkInterface>> {
        Err(ZoneError::InterfaceEnumeration("netlink unavailable".to_string()))
    };
    let addr = ZoneAddr::parse("10.0.0.0/8")?;
    assert!(matches!(
        addr.interfaces_in(&broken),
        Err(ZoneError::InterfaceEnumeration(_))
    ));
    Ok(())
}

#[test]
fn resolution_reflects_current_host_state() -> anyhow::Result<()> {
    use std::cell::RefCell;

    init_tracing();
    let attached: RefCell<Vec<NetworkInterface>> = RefCell::new(vec![lo()]);
    let directory = || -> Result<Vec<NetworkInterface>> { Ok(attached.borrow().clone()) };

    // Parsing never checks the zone against live interfaces.
    let addr = ZoneAddr::parse("10.0.0.0/24%eth1")?;
    assert!(addr.interfaces_in(&directory).is_err());

    attached.borrow_mut().push(eth1());
    assert_eq!(addr.interfaces_in(&directory)?, vec![eth1()]);
    Ok(())
}

#[test]
fn containment_per_interface() -> anyhow::Result<()> {
    init_tracing();
    let addr = ZoneAddr::parse("192.168.0.0/16%enp9s0")?;
    let target: IpAddr = "192.168.0.77".parse()?;

    let results: Vec<(String, bool)> = iface_all()?
        .iter()
        .map(|iface| (iface.name.clone(), addr.contains_with_interface(target, Some(iface))))
        .filter(|(_, contained)| *contained)
        .collect();

    assert_eq!(results, vec![("enp9s0".to_string(), true)]);
    assert!(addr.contains(target));
    Ok(())
}

#[test]
fn live_host_enumeration_succeeds() -> anyhow::Result<()> {
    init_tracing();
    let addr = ZoneAddr::parse("80.0.0.0/8")?;
    let interfaces = addr.interfaces()?;
    // The host may have any set of interfaces; only enumeration must succeed.
    SystemInterfaces.list()?;
    for iface in &interfaces {
        tracing::info!("Interface: {} {:?}", iface.name, iface.ips);
    }
    Ok(())
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Result<Vec<NetworkInterface>> {
    Ok(vec![lo(), enp9s0(), tun0(), wlan0(), eth1()])
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

fn tun0() -> NetworkInterface {
    ni(
        "tun0",
        5,
        None,
        &[v4(10, 96, 0, 57, 16), v6("fe80::c137:8964:5a63:efde", 64)],
        69841,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 42, 24), v6("fe80::36cf:f6ff:fe9a:1122", 64)],
        69699,
    )
}

fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 15, 24)],
        69699,
    )
}
