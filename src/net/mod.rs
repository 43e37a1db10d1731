//! IP range utilities.
//!
//! Expansion of configured CIDR blocks into concrete addresses
//! ([`expand_network`]), inclusive range expansion for feed-supplied
//! boundaries ([`expand_range`]), and DNSBL query name construction
//! ([`reverse_label`]).

mod error;
mod expand;
mod reverse;
mod types;

pub use error::NetError;
pub use expand::{MAX_EXPANSION, expand_network, expand_range};
pub use reverse::reverse_label;
pub use types::NetworkSpec;
pub(crate) use types::{address_bits, to_value};

#[cfg(test)]
mod tests;
