use thiserror::Error;

#[derive(Debug, Error)]
pub enum SndsError {
    #[error("HTTP client initialization failed: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
    #[error("SNDS feed request failed: {source}")]
    FeedFetch {
        #[source]
        source: reqwest::Error,
    },
    #[error("SNDS feed returned HTTP {status}")]
    FeedStatus { status: reqwest::StatusCode },
}

impl SndsError {
    pub(crate) fn client_build(source: reqwest::Error) -> Self {
        Self::ClientBuild { source }
    }

    pub(crate) fn feed_fetch(source: reqwest::Error) -> Self {
        Self::FeedFetch { source }
    }
}
