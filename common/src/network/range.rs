use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::Ipv4Network;
use thiserror::Error;

use crate::network::target::Target;
use crate::warn;

/// Upper bound on the number of hosts expanded from a single network.
pub const MAX_HOSTS: usize = 65_536;

/// The spec is not a single address or an IPv4 CIDR block.
///
/// Recoverable by construction: the resolver reacts by handing the spec to
/// the fallback parser.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not an address or network: {0}")]
pub struct AddrFormatError(pub String);

/// Expands `spec` into host-only targets.
///
/// A bare IP (v4 or v6) yields itself. `a.b.c.d/n` yields the usable host
/// addresses of the network: everything between the network and broadcast
/// addresses, or every address for /31 and /32. Oversized networks are
/// truncated to [`MAX_HOSTS`] with a warning.
pub fn expand(spec: &str) -> Result<Vec<Target>, AddrFormatError> {
    if let Ok(addr) = spec.parse::<IpAddr>() {
        return Ok(vec![Target::from_host(addr.to_string())]);
    }

    let network: Ipv4Network = parse_cidr(spec)?;
    Ok(hosts(network)
        .map(|addr| Target::from_host(addr.to_string()))
        .collect())
}

fn parse_cidr(spec: &str) -> Result<Ipv4Network, AddrFormatError> {
    let err = || AddrFormatError(spec.to_string());

    let (addr_str, prefix_str) = spec.split_once('/').ok_or_else(|| err())?;
    let addr: Ipv4Addr = addr_str.parse().map_err(|_| err())?;
    let prefix: u8 = prefix_str.parse().map_err(|_| err())?;
    Ipv4Network::new(addr, prefix).map_err(|_| err())
}

/// Iterates the usable host addresses of `network`.
fn hosts(network: Ipv4Network) -> impl Iterator<Item = Ipv4Addr> {
    // RFC 3021: /31 and /32 have no network or broadcast address to skip.
    let (start, end): (u32, u32) = if network.prefix() >= 31 {
        (u32::from(network.network()), u32::from(network.broadcast()))
    } else {
        (
            u32::from(network.network()).saturating_add(1),
            u32::from(network.broadcast()).saturating_sub(1),
        )
    };

    let span: u64 = u64::from(end) - u64::from(start) + 1;
    if span > MAX_HOSTS as u64 {
        warn!("{span} hosts in {network}, truncating to {MAX_HOSTS}");
    }

    (start..=end).take(MAX_HOSTS).map(Ipv4Addr::from)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
