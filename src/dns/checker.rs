use std::net::IpAddr;
use std::time::Duration;

use trust_dns_resolver::Resolver;
use trust_dns_resolver::error::ResolveErrorKind;
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::proto::rr::RecordType;
use trust_dns_resolver::system_conf::read_system_conf;

use crate::net::reverse_label;
use crate::runner::{CheckOutcome, Checker, ListingResult, SourceKind};

use super::DnsError;

/// Checks addresses against one DNSBL zone.
pub struct DnsChecker {
    host: String,
    resolver: Resolver,
}

impl DnsChecker {
    /// Build a checker for `host` using the system resolver configuration,
    /// with `timeout` applied to every query.
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self, DnsError> {
        let (config, mut opts) = read_system_conf().map_err(DnsError::resolver_init)?;
        opts.timeout = timeout;
        let resolver = Resolver::new(config, opts).map_err(DnsError::resolver_init)?;
        Ok(Self {
            host: host.into(),
            resolver,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Checker for DnsChecker {
    fn kind(&self) -> SourceKind {
        SourceKind::Dns
    }

    fn check(&self, address: IpAddr) -> ListingResult {
        check_with(&self.resolver, address, &self.host)
    }
}

/// Reduced view of one A query, so classification can be tested without a
/// network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DnsAnswer {
    /// At least one A record came back.
    Records(usize),
    /// The name does not exist: the defined negative signal.
    NxDomain,
    /// The name exists but the answer is empty.
    NoRecords,
    /// Timeout, SERVFAIL, transport error.
    Failed(String),
}

pub(crate) trait LookupA {
    fn lookup_a(&self, name: &str) -> DnsAnswer;
}

impl LookupA for Resolver {
    fn lookup_a(&self, name: &str) -> DnsAnswer {
        match self.lookup(name, RecordType::A) {
            Ok(lookup) => DnsAnswer::Records(lookup.iter().count()),
            Err(err) => match err.kind() {
                ResolveErrorKind::NoRecordsFound { response_code, .. }
                    if *response_code == ResponseCode::NXDomain =>
                {
                    DnsAnswer::NxDomain
                }
                ResolveErrorKind::NoRecordsFound { .. } => DnsAnswer::NoRecords,
                ResolveErrorKind::Timeout => DnsAnswer::Failed("query timed out".to_string()),
                other => DnsAnswer::Failed(other.to_string()),
            },
        }
    }
}

pub(crate) fn check_with<L>(lookup: &L, address: IpAddr, host: &str) -> ListingResult
where
    L: LookupA,
{
    let query_name = reverse_label(address, host);
    let outcome = match lookup.lookup_a(&query_name) {
        DnsAnswer::Records(_) => CheckOutcome::Listed { detail: query_name },
        DnsAnswer::NxDomain => CheckOutcome::NotListed,
        DnsAnswer::NoRecords => CheckOutcome::Inconclusive {
            reason: format!("{query_name}: name exists but returned no A records"),
        },
        DnsAnswer::Failed(reason) => CheckOutcome::Inconclusive {
            reason: format!("{query_name}: {reason}"),
        },
    };
    ListingResult {
        source: SourceKind::Dns,
        address,
        host: host.to_string(),
        outcome,
    }
}
