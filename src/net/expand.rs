use std::net::IpAddr;

use super::error::NetError;
use super::types::{NetworkSpec, address_bits, from_value, to_value};

/// Hard cap on the number of addresses a single expansion may produce.
///
/// A /112 IPv6 block already expands to this many addresses; anything
/// broader is almost certainly a configuration mistake, and materializing
/// it would dominate the run. Expansion fails loudly instead of truncating.
pub const MAX_EXPANSION: u128 = 1 << 16;

/// Expand a CIDR block into every address it contains, in ascending
/// numeric order. Network and broadcast addresses are included: outgoing
/// mail platforms get listed on whole blocks, not on "usable" hosts.
pub fn expand_network(network: &NetworkSpec) -> Result<Vec<IpAddr>, NetError> {
    let host_bits = u32::from(network.host_bits());
    if host_bits >= 128 {
        return Err(NetError::ExpansionTooLarge {
            count: u128::MAX,
            cap: MAX_EXPANSION,
        });
    }
    let count = 1u128 << host_bits;
    expand_from(network.network_value(), count, network.address())
}

/// Expand an inclusive `[first, last]` range into every address it
/// contains, in ascending order.
///
/// The boundaries typically come from an untrusted feed, so inverted
/// ranges and mixed address families are rejected with
/// [`NetError::InvalidRange`] rather than debug-asserted.
pub fn expand_range(first: IpAddr, last: IpAddr) -> Result<Vec<IpAddr>, NetError> {
    if address_bits(first) != address_bits(last) {
        return Err(NetError::InvalidRange(format!(
            "mixed address families: {first} and {last}"
        )));
    }
    let (lo, hi) = (to_value(first), to_value(last));
    if lo > hi {
        return Err(NetError::InvalidRange(format!(
            "first address {first} > last address {last}"
        )));
    }
    // `hi - lo + 1` overflows for the full IPv6 space; an overflowing count
    // is necessarily above the cap.
    let count = (hi - lo).checked_add(1).ok_or(NetError::ExpansionTooLarge {
        count: u128::MAX,
        cap: MAX_EXPANSION,
    })?;
    expand_from(lo, count, first)
}

fn expand_from(base: u128, count: u128, template: IpAddr) -> Result<Vec<IpAddr>, NetError> {
    if count > MAX_EXPANSION {
        return Err(NetError::ExpansionTooLarge {
            count,
            cap: MAX_EXPANSION,
        });
    }
    let mut addresses = Vec::with_capacity(count as usize);
    for offset in 0..count {
        addresses.push(from_value(base + offset, template));
    }
    Ok(addresses)
}
