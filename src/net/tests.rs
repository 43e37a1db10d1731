use std::net::IpAddr;

use proptest::prelude::*;

use super::{MAX_EXPANSION, NetError, NetworkSpec, expand_network, expand_range, reverse_label};

fn addr(s: &str) -> IpAddr {
    s.parse().expect("literal address")
}

fn network(s: &str) -> NetworkSpec {
    s.parse().expect("literal network")
}

#[test]
fn parse_rejects_host_bits() {
    let err = "198.51.100.1/27"
        .parse::<NetworkSpec>()
        .expect_err("host bits set");
    assert!(matches!(err, NetError::InvalidNetwork { .. }));
}

#[test]
fn parse_rejects_bad_prefix() {
    assert!("198.51.100.0/33".parse::<NetworkSpec>().is_err());
    assert!("198.51.100.0/abc".parse::<NetworkSpec>().is_err());
    assert!("198.51.100.0".parse::<NetworkSpec>().is_err());
}

#[test]
fn expand_network_v4_block() {
    let addresses = expand_network(&network("198.51.100.0/27")).expect("small block");
    assert_eq!(addresses.len(), 32);
    assert_eq!(addresses[0], addr("198.51.100.0"));
    assert_eq!(addresses[31], addr("198.51.100.31"));
    assert!(addresses.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn expand_network_single_addresses() {
    assert_eq!(
        expand_network(&network("198.51.100.100/32")).unwrap(),
        vec![addr("198.51.100.100")]
    );
    assert_eq!(
        expand_network(&network("2001:db8::/128")).unwrap(),
        vec![addr("2001:db8::")]
    );
}

#[test]
fn expand_network_v6_pair() {
    let addresses = expand_network(&network("2001:db8::/127")).expect("two addresses");
    assert_eq!(addresses, vec![addr("2001:db8::"), addr("2001:db8::1")]);
}

#[test]
fn expand_network_refuses_huge_blocks() {
    let err = expand_network(&network("10.0.0.0/8")).expect_err("2^24 addresses");
    assert!(matches!(err, NetError::ExpansionTooLarge { cap, .. } if cap == MAX_EXPANSION));

    let err = expand_network(&network("2001:db8::/64")).expect_err("2^64 addresses");
    assert!(matches!(err, NetError::ExpansionTooLarge { .. }));

    // /0 is the degenerate case where the count itself overflows a shift.
    let err = expand_network(&network("::/0")).expect_err("full IPv6 space");
    assert!(matches!(err, NetError::ExpansionTooLarge { .. }));
}

#[test]
fn expand_range_is_inclusive() {
    let addresses = expand_range(addr("198.51.100.1"), addr("198.51.100.25")).expect("25 hosts");
    assert_eq!(addresses.len(), 25);
    assert_eq!(addresses[0], addr("198.51.100.1"));
    assert_eq!(addresses[24], addr("198.51.100.25"));
}

#[test]
fn expand_range_single_address() {
    let addresses = expand_range(addr("2001:db8::1"), addr("2001:db8::1")).unwrap();
    assert_eq!(addresses, vec![addr("2001:db8::1")]);
}

#[test]
fn expand_range_full_v6_space_is_too_large_not_a_panic() {
    // first <= last and same family, but the count itself does not fit in
    // u128; must fail loudly, not wrap to an empty expansion.
    let err = expand_range(addr("::"), addr("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"))
        .expect_err("2^128 addresses");
    assert!(matches!(err, NetError::ExpansionTooLarge { .. }));
}

#[test]
fn expand_range_rejects_inverted_and_mixed() {
    let err = expand_range(addr("198.51.100.25"), addr("198.51.100.1")).expect_err("inverted");
    assert!(matches!(err, NetError::InvalidRange(_)));

    let err = expand_range(addr("198.51.100.1"), addr("2001:db8::1")).expect_err("mixed");
    assert!(matches!(err, NetError::InvalidRange(_)));
}

#[test]
fn reverse_label_v4() {
    assert_eq!(
        reverse_label(addr("1.2.3.4"), "dnsbl.example.com"),
        "4.3.2.1.dnsbl.example.com"
    );
    assert_eq!(reverse_label(addr("198.51.100.7"), "zone"), "7.100.51.198.zone");
}

#[test]
fn reverse_label_v6_nibbles() {
    assert_eq!(
        reverse_label(addr("2001:db8::1"), "dnsbl.example.com"),
        "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.dnsbl.example.com"
    );
}

/// Strip the zone from a reversed label and undo the reversal, giving back
/// the canonical component string of the original address.
fn unreverse(label: &str, zone: &str) -> String {
    let stripped = label
        .strip_suffix(zone)
        .and_then(|s| s.strip_suffix('.'))
        .expect("label ends with zone");
    let mut parts: Vec<&str> = stripped.split('.').collect();
    parts.reverse();
    parts.join(".")
}

proptest! {
    #[test]
    fn reverse_label_round_trips_v4(value: u32) {
        let address = IpAddr::V4(std::net::Ipv4Addr::from(value));
        let label = reverse_label(address, "zone.invalid");
        prop_assert_eq!(unreverse(&label, "zone.invalid"), address.to_string());
    }

    #[test]
    fn reverse_label_round_trips_v6(value: u128) {
        let address = std::net::Ipv6Addr::from(value);
        let label = reverse_label(IpAddr::V6(address), "zone.invalid");
        // Expected form: every nibble of the expanded address, dot-separated.
        let hex: String = address
            .octets()
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect();
        let nibbles: Vec<String> = hex.chars().map(String::from).collect();
        prop_assert_eq!(unreverse(&label, "zone.invalid"), nibbles.join("."));
    }

    #[test]
    fn expanded_addresses_stay_inside_the_block(prefix in 20u8..=32) {
        let spec = NetworkSpec::new(addr("203.0.113.0"), prefix);
        // Prefixes that would clear bits of 203.0.113.0 are invalid specs.
        prop_assume!(spec.is_ok());
        let spec = spec.unwrap();
        let addresses = expand_network(&spec).unwrap();
        prop_assert_eq!(addresses.len() as u128, 1u128 << spec.host_bits());
        for window in addresses.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }
}
