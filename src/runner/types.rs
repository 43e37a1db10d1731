use std::fmt;
use std::net::IpAddr;

/// Which listing source produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Dns,
    Snds,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns => f.write_str("DNS"),
            Self::Snds => f.write_str("SNDS"),
        }
    }
}

/// Three-state outcome of a single check.
///
/// "Inconclusive" covers every failure that is not a definitive negative
/// (DNS timeout, SERVFAIL, empty answer). It is a distinct state, never a
/// silent `NotListed`: the absence of an answer is not evidence of absence
/// from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The address is on the list; `detail` is the evidence (DNSBL query
    /// name, or the SNDS reason text).
    Listed { detail: String },
    NotListed,
    Inconclusive { reason: String },
}

/// The outcome of one check of one address against one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResult {
    pub source: SourceKind,
    pub address: IpAddr,
    /// DNSBL zone for DNS checks, `"SNDS"` for the SNDS feed.
    pub host: String,
    pub outcome: CheckOutcome,
}

impl ListingResult {
    pub fn is_listed(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Listed { .. })
    }

    /// Evidence for a listed result, or the reason for an inconclusive one.
    pub fn detail(&self) -> Option<&str> {
        match &self.outcome {
            CheckOutcome::Listed { detail } => Some(detail),
            CheckOutcome::NotListed => None,
            CheckOutcome::Inconclusive { reason } => Some(reason),
        }
    }
}

/// Capability contract shared by all listing sources.
///
/// A checker is constructed with whatever it needs up front (DNSBL zone,
/// fetched feed) and is then queried once per address. Implementations
/// must be `Send + Sync`: the orchestrator fans addresses out on a worker
/// pool.
pub trait Checker: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Check a single address, never failing: transport problems are
    /// folded into [`CheckOutcome::Inconclusive`].
    fn check(&self, address: IpAddr) -> ListingResult;
}

/// Aggregated outcome of a full run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Listed results, address-major order (addresses in expansion order,
    /// checkers in declaration order within one address).
    pub listed: Vec<ListingResult>,
    /// Checks that could not produce a definitive answer.
    pub inconclusive: Vec<ListingResult>,
}

impl RunReport {
    /// Clean means confirmed clean: nothing listed and nothing left
    /// undetermined.
    pub fn is_clean(&self) -> bool {
        self.listed.is_empty() && self.inconclusive.is_empty()
    }
}
