#![forbid(unsafe_code)]
//! rblcheck_lib — check outgoing mail IP addresses against RBLs.
//!
//! Two listing sources are supported: DNS-based blacklists (one reversed
//! label A query per address and zone) and Microsoft SNDS (one feed fetch
//! per run, matched in memory). The [`runner`] module ties them together
//! behind the [`Checker`] trait.

pub mod config;
pub mod dns;
pub mod net;
pub mod runner;
pub mod snds;

pub use config::{Config, ConfigError};
pub use dns::{DnsChecker, DnsError};
pub use net::{NetError, NetworkSpec, expand_network, expand_range, reverse_label};
pub use runner::{CheckOutcome, Checker, ListingResult, RunReport, SourceKind, run_checks};
pub use snds::{SndsChecker, SndsError, SndsRange};
