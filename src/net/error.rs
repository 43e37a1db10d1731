use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("invalid network '{input}': {reason}")]
    InvalidNetwork { input: String, reason: String },
    #[error("invalid address range: {0}")]
    InvalidRange(String),
    #[error("expansion would produce {count} addresses (cap {cap})")]
    ExpansionTooLarge { count: u128, cap: u128 },
}

impl NetError {
    pub(crate) fn invalid_network(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNetwork {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
