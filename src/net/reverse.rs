use std::fmt::Write;
use std::net::IpAddr;

/// Build the DNSBL query name for `address` under `zone`.
///
/// IPv4 addresses use the reversed-octet convention (`1.2.3.4` under
/// `zone.example` becomes `4.3.2.1.zone.example`); IPv6 addresses use the
/// reversed-nibble convention of RFC 5782 §2.4 (32 hex labels).
pub fn reverse_label(address: IpAddr, zone: &str) -> String {
    let mut name = String::new();
    match address {
        IpAddr::V4(v4) => {
            for octet in v4.octets().iter().rev() {
                let _ = write!(name, "{octet}.");
            }
        }
        IpAddr::V6(v6) => {
            for octet in v6.octets().iter().rev() {
                let _ = write!(name, "{:x}.{:x}.", octet & 0x0f, octet >> 4);
            }
        }
    }
    name.push_str(zone);
    name
}
