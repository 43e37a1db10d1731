//! DNSBL checker.
//!
//! One forward A query per (address, zone) pair, with the query name built
//! by [`crate::net::reverse_label`]. The outcome is classified into the
//! three-state [`crate::runner::CheckOutcome`]: an answer means listed,
//! NXDOMAIN means not listed, everything else is inconclusive.

mod checker;
mod error;

pub use checker::DnsChecker;
pub use error::DnsError;

#[cfg(test)]
mod tests;
