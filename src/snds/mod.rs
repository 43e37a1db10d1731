//! Microsoft SNDS checker.
//!
//! The IP status feed is fetched once per run ([`SndsChecker::fetch`]),
//! parsed into blocked/unblocked ranges, and then queried in memory for
//! every target address. A transport failure is fatal for the SNDS source;
//! malformed feed rows are skipped with a warning.

mod checker;
mod error;
mod feed;

pub use checker::SndsChecker;
pub use error::SndsError;
pub use feed::{DEFAULT_FEED_URL, SndsRange};
