//! Check orchestration.
//!
//! The public entry point is [`run_checks`], which walks the expanded
//! address universe across every configured checker and collects the
//! listed and inconclusive outcomes into a [`RunReport`].

mod types;

pub use types::{CheckOutcome, Checker, ListingResult, RunReport, SourceKind};

use std::net::IpAddr;

use rayon::prelude::*;
use tracing::debug;

/// Run every checker against every address.
///
/// Addresses fan out on the rayon pool (each DNS query is independent and
/// idempotent); within one address, checkers run in declaration order, so
/// the collected report is deterministic regardless of scheduling.
/// Not-listed outcomes are dropped; listed and inconclusive ones are kept.
pub fn run_checks(addresses: &[IpAddr], checkers: &[Box<dyn Checker>]) -> RunReport {
    let outcomes: Vec<Vec<ListingResult>> = addresses
        .par_iter()
        .map(|address| {
            checkers
                .iter()
                .map(|checker| checker.check(*address))
                .collect()
        })
        .collect();

    let mut report = RunReport::default();
    for result in outcomes.into_iter().flatten() {
        match result.outcome {
            CheckOutcome::Listed { .. } => report.listed.push(result),
            CheckOutcome::NotListed => {}
            CheckOutcome::Inconclusive { .. } => {
                debug!(
                    address = %result.address,
                    host = %result.host,
                    "check was inconclusive"
                );
                report.inconclusive.push(result);
            }
        }
    }
    report
}
