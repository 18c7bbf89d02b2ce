//! Proxy list retrieval and selection.

use crate::error::ScrapeError;

use log::debug;
use rand::Rng;
use reqwest::Client;

/// Fetch the proxy list from the list service.
///
/// The body is split on newline boundaries exactly as received: entries are
/// not trimmed, validated, or deduplicated, and a trailing newline yields a
/// final empty entry. A non-2xx response or any transport failure is fatal.
pub async fn fetch_proxies(client: &Client, source: &str) -> Result<Vec<String>, ScrapeError> {
    debug!("Fetching proxy list from {}", source);
    let response = client.get(source).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(split_proxy_list(&body))
}

/// Split a raw list body into one entry per line.
pub(crate) fn split_proxy_list(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_string).collect()
}

/// Select a proxy uniformly at random from the list.
///
/// Fails with [`ScrapeError::EmptyProxyList`] instead of indexing out of
/// bounds when the list has no entries.
pub fn random_proxy<'a, R: Rng + ?Sized>(
    proxies: &'a [String],
    rng: &mut R,
) -> Result<&'a str, ScrapeError> {
    if proxies.is_empty() {
        return Err(ScrapeError::EmptyProxyList);
    }
    let idx = rng.random_range(0..proxies.len());
    Ok(&proxies[idx])
}
