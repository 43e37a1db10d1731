use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Deserialize;

use super::error::NetError;

/// A CIDR block from the configuration, e.g. `198.51.100.0/27` or
/// `2001:db8::/127`.
///
/// Parsing is strict: the address must be the network address of the block
/// (no host bits set), matching the usual "ip/prefix" notation found in
/// mail platform configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct NetworkSpec {
    address: IpAddr,
    prefix: u8,
}

impl NetworkSpec {
    pub fn new(address: IpAddr, prefix: u8) -> Result<Self, NetError> {
        let width = address_bits(address);
        if prefix > width {
            return Err(NetError::invalid_network(
                format!("{address}/{prefix}"),
                format!("prefix length {prefix} > {width}"),
            ));
        }
        let spec = Self { address, prefix };
        if spec.network_value() != to_value(address) {
            return Err(NetError::invalid_network(
                format!("{address}/{prefix}"),
                "host bits set",
            ));
        }
        Ok(spec)
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of address bits in this block's family (32 or 128).
    pub fn width(&self) -> u8 {
        address_bits(self.address)
    }

    /// Number of host bits, i.e. `width - prefix`.
    pub fn host_bits(&self) -> u8 {
        self.width() - self.prefix
    }

    pub(crate) fn network_value(&self) -> u128 {
        let width = u32::from(self.width());
        let host = u32::from(self.host_bits());
        let value = to_value(self.address);
        if host == width {
            0
        } else {
            (value >> host) << host
        }
    }
}

impl FromStr for NetworkSpec {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| NetError::invalid_network(s, "expected 'address/prefix'"))?;
        let address: IpAddr = addr
            .parse()
            .map_err(|_| NetError::invalid_network(s, "unparsable address"))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| NetError::invalid_network(s, "unparsable prefix length"))?;
        Self::new(address, prefix)
    }
}

impl TryFrom<String> for NetworkSpec {
    type Error = NetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

pub(crate) fn address_bits(address: IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

/// Numeric value of an address, widened to u128 so IPv4 and IPv6 share the
/// same arithmetic.
pub(crate) fn to_value(address: IpAddr) -> u128 {
    match address {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

pub(crate) fn from_value(value: u128, template: IpAddr) -> IpAddr {
    match template {
        IpAddr::V4(_) => IpAddr::V4(std::net::Ipv4Addr::from(value as u32)),
        IpAddr::V6(_) => IpAddr::V6(std::net::Ipv6Addr::from(value)),
    }
}
