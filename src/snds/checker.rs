use std::net::IpAddr;
use std::time::Duration;

use crate::runner::{CheckOutcome, Checker, ListingResult, SourceKind};

use super::error::SndsError;
use super::feed::{self, FetchFeed, HttpFetcher, SndsRange};

/// Checks addresses against one fetched copy of the SNDS feed.
///
/// Construction performs the only network call; [`Checker::check`] is pure
/// in-memory matching afterwards, so N addresses cost one fetch.
#[derive(Debug)]
pub struct SndsChecker {
    ranges: Vec<SndsRange>,
    skipped_rows: usize,
}

impl SndsChecker {
    /// Download and parse the feed at `url`, authenticated by `key`.
    pub fn fetch(url: &str, key: &str, timeout: Duration) -> Result<Self, SndsError> {
        let fetcher = HttpFetcher::new(timeout)?;
        Self::fetch_with(&fetcher, url, key)
    }

    pub(crate) fn fetch_with<F>(fetcher: &F, url: &str, key: &str) -> Result<Self, SndsError>
    where
        F: FetchFeed,
    {
        let body = fetcher.fetch(url, key)?;
        Ok(Self::from_body(&body))
    }

    /// Build a checker from an already-downloaded feed body.
    pub fn from_body(body: &str) -> Self {
        let feed = feed::parse_feed(body);
        Self {
            ranges: feed.ranges,
            skipped_rows: feed.skipped_rows,
        }
    }

    pub fn ranges(&self) -> &[SndsRange] {
        &self.ranges
    }

    /// Number of feed rows that were skipped as malformed.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl Checker for SndsChecker {
    fn kind(&self) -> SourceKind {
        SourceKind::Snds
    }

    /// Scan the feed in file order. The first `Yes`-flagged range that
    /// contains the address decides; ranges flagged otherwise neither list
    /// the address nor stop the scan (ranges may overlap).
    fn check(&self, address: IpAddr) -> ListingResult {
        let outcome = self
            .ranges
            .iter()
            .find(|range| range.blocked && range.contains(address))
            .map(|range| CheckOutcome::Listed {
                detail: range.reason.clone(),
            })
            .unwrap_or(CheckOutcome::NotListed);
        ListingResult {
            source: SourceKind::Snds,
            address,
            host: "SNDS".to_string(),
            outcome,
        }
    }
}
