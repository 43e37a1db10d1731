use std::net::IpAddr;
use std::time::Duration;

use tracing::warn;

use super::error::SndsError;

/// Production SNDS IP status endpoint. Overridable through configuration,
/// mainly so tests and staging setups can point at a local server.
pub const DEFAULT_FEED_URL: &str =
    "https://sendersupport.olc.protection.outlook.com/snds/ipStatus.aspx";

/// One row of the SNDS feed: an inclusive address range with its blocked
/// flag and free-text reason. Only lives as long as one fetched feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SndsRange {
    pub first: IpAddr,
    pub last: IpAddr,
    /// True iff the feed's flag field was exactly `Yes` (case-sensitive).
    pub blocked: bool,
    pub reason: String,
}

impl SndsRange {
    pub fn contains(&self, address: IpAddr) -> bool {
        use crate::net::{address_bits, to_value};
        if address_bits(address) != address_bits(self.first) {
            return false;
        }
        let value = to_value(address);
        to_value(self.first) <= value && value <= to_value(self.last)
    }
}

/// Parsed feed body: the usable ranges plus a count of rows that had to be
/// skipped (wrong field count, unparsable or inconsistent addresses).
#[derive(Debug, Default)]
pub(crate) struct Feed {
    pub ranges: Vec<SndsRange>,
    pub skipped_rows: usize,
}

/// Parse the newline-delimited, headerless CSV body of the feed.
///
/// Fields, in order: first address, last address, blocked flag, details.
/// Malformed rows are not fatal: the rest of the feed is still usable
/// evidence, so each bad row is logged and counted instead.
pub(crate) fn parse_feed(body: &str) -> Feed {
    let mut feed = Feed::default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(line, error = %err, "skipping unreadable SNDS feed row");
                feed.skipped_rows += 1;
                continue;
            }
        };
        match parse_row(&record) {
            Ok(range) => feed.ranges.push(range),
            Err(reason) => {
                warn!(line, reason, "skipping malformed SNDS feed row");
                feed.skipped_rows += 1;
            }
        }
    }
    feed
}

fn parse_row(record: &csv::StringRecord) -> Result<SndsRange, &'static str> {
    if record.len() != 4 {
        return Err("expected 4 fields: first_ip,last_ip,blocked,details");
    }
    let first: IpAddr = record[0].parse().map_err(|_| "unparsable first address")?;
    let last: IpAddr = record[1].parse().map_err(|_| "unparsable last address")?;
    if first.is_ipv4() != last.is_ipv4() {
        return Err("range mixes address families");
    }
    {
        use crate::net::to_value;
        if to_value(first) > to_value(last) {
            return Err("inverted range");
        }
    }
    Ok(SndsRange {
        first,
        last,
        blocked: &record[2] == "Yes",
        reason: record[3].to_string(),
    })
}

/// Transport seam for the single per-session feed download.
pub(crate) trait FetchFeed {
    fn fetch(&self, url: &str, key: &str) -> Result<String, SndsError>;
}

pub(crate) struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub(crate) fn new(timeout: Duration) -> Result<Self, SndsError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SndsError::client_build)?;
        Ok(Self { client })
    }
}

impl FetchFeed for HttpFetcher {
    fn fetch(&self, url: &str, key: &str) -> Result<String, SndsError> {
        let response = self
            .client
            .get(url)
            .query(&[("key", key)])
            .send()
            .map_err(SndsError::feed_fetch)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SndsError::FeedStatus { status });
        }
        response.text().map_err(SndsError::feed_fetch)
    }
}
