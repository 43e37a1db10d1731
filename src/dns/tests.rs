use std::net::IpAddr;

use super::checker::{self, DnsAnswer, LookupA};
use crate::runner::{CheckOutcome, SourceKind};

type LookupFn = dyn Fn(&str) -> DnsAnswer;

struct StubLookup {
    on_lookup: Box<LookupFn>,
}

impl StubLookup {
    fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> DnsAnswer + 'static,
    {
        Self {
            on_lookup: Box::new(f),
        }
    }
}

impl LookupA for StubLookup {
    fn lookup_a(&self, name: &str) -> DnsAnswer {
        (self.on_lookup)(name)
    }
}

fn addr() -> IpAddr {
    "1.2.3.4".parse().unwrap()
}

#[test]
fn answer_means_listed_with_query_name_detail() {
    let stub = StubLookup::new(|name| {
        assert_eq!(name, "4.3.2.1.dnsbl.example.com");
        DnsAnswer::Records(1)
    });

    let result = checker::check_with(&stub, addr(), "dnsbl.example.com");
    assert_eq!(result.source, SourceKind::Dns);
    assert_eq!(result.host, "dnsbl.example.com");
    assert!(result.is_listed());
    assert_eq!(result.detail(), Some("4.3.2.1.dnsbl.example.com"));
}

#[test]
fn nxdomain_means_not_listed() {
    let stub = StubLookup::new(|_| DnsAnswer::NxDomain);

    let result = checker::check_with(&stub, addr(), "dnsbl.example.com");
    assert!(!result.is_listed());
    assert_eq!(result.outcome, CheckOutcome::NotListed);
    assert_eq!(result.detail(), None);
}

#[test]
fn empty_answer_is_inconclusive_not_clean() {
    let stub = StubLookup::new(|_| DnsAnswer::NoRecords);

    let result = checker::check_with(&stub, addr(), "dnsbl.example.com");
    assert!(!result.is_listed());
    assert!(matches!(result.outcome, CheckOutcome::Inconclusive { .. }));
}

#[test]
fn timeout_and_servfail_are_inconclusive() {
    for reason in ["query timed out", "SERVFAIL from upstream"] {
        let reason_owned = reason.to_string();
        let stub = StubLookup::new(move |_| DnsAnswer::Failed(reason_owned.clone()));

        let result = checker::check_with(&stub, addr(), "dnsbl.example.com");
        assert!(!result.is_listed());
        match &result.outcome {
            CheckOutcome::Inconclusive { reason: r } => {
                assert!(r.contains("4.3.2.1.dnsbl.example.com"));
                assert!(r.contains(reason));
            }
            other => panic!("expected inconclusive, got {other:?}"),
        }
    }
}

#[test]
fn ipv6_addresses_query_the_nibble_label() {
    let stub = StubLookup::new(|name| {
        assert!(name.ends_with(".dnsbl.example.com"));
        assert_eq!(name.split('.').count(), 32 + 3);
        DnsAnswer::NxDomain
    });

    let v6: IpAddr = "2001:db8::1".parse().unwrap();
    let result = checker::check_with(&stub, v6, "dnsbl.example.com");
    assert_eq!(result.outcome, CheckOutcome::NotListed);
}
