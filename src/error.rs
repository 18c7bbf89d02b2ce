//! Error types for the scraper.

use thiserror::Error;

/// Errors that abort a scrape run. None of them are recoverable: the binary
/// propagates whichever occurs first and exits.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The proxy-list fetch or the page fetch failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),
    /// The output file could not be created or written.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    /// A configured header literal is not a valid header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
    /// Selection was attempted on a proxy list with no entries.
    #[error("proxy list is empty")]
    EmptyProxyList,
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Transport(err.into())
    }
}
