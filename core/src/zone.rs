use tracing::trace;
use zoneaddr_common::error::{Result, ZoneError};

pub const ZONE_SEP: char = '%';
pub const NO_ZONE: &str = "";

/// Splits `raw` into its address/network body and its zone.
///
/// * `"fe80::1"` gives `("fe80::1", None)`
/// * `"fe80::1%eth0"` gives `("fe80::1", Some("eth0"))`
/// * `"fe80::1%"` gives `("fe80::1", Some(""))`
///
/// The delimiter may appear at most once. An explicit but empty zone is
/// returned as `Some("")` so the caller can decide what it means.
pub fn split_zone(raw: &str) -> Result<(&str, Option<&str>)> {
    let Some((body, zone)) = raw.split_once(ZONE_SEP) else {
        return Ok((raw, None));
    };

    if zone.contains(ZONE_SEP) {
        return Err(ZoneError::MultipleZoneDelimiters(raw.to_string()));
    }

    trace!("Split '{raw}' into body '{body}' and zone '{zone}'");
    Ok((body, Some(zone)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
