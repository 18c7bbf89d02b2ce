//! Single-shot crawling client and the run pipeline.

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extract;
use crate::identity::IdentityProfile;
use crate::limit::DomainLimiter;
use crate::middleware::{BrowserHeaders, ResponseLog};
use crate::provider;
use crate::sink::LinkSink;

use log::{debug, info};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::io::Write;

/// HTTP crawling client bound to one proxy and one browser identity.
pub struct Crawler {
    client: ClientWithMiddleware,
    limiter: DomainLimiter,
}

impl Crawler {
    /// Build a client that routes every request through `proxy` and presents
    /// `identity`. Bare `host:port` entries are dialed as plain HTTP.
    pub fn new(
        config: &ScraperConfig,
        proxy: &str,
        identity: IdentityProfile,
    ) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .proxy(reqwest::Proxy::all(proxy_url(proxy))?)
            .user_agent(identity.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        let client = ClientBuilder::new(client)
            .with(BrowserHeaders::new(&identity)?)
            .with(ResponseLog::new(proxy))
            .build();

        Ok(Self {
            client,
            limiter: DomainLimiter::new(config.delay, config.random_delay),
        })
    }

    /// Fetch `target_url`, extract every hyperlink, and append them to `sink`
    /// in document order. Returns the number of links written.
    ///
    /// A transport failure, a non-2xx response, or a sink write failure ends
    /// the run; a partially written line may remain in the output.
    pub async fn visit<W: Write>(
        &self,
        target_url: &str,
        sink: &mut LinkSink<W>,
    ) -> Result<usize, ScrapeError> {
        self.limiter.acquire(target_url).await;

        let response = self.client.get(target_url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        debug!("Response: {}", body.replace('\n', ""));

        let links = extract::extract_links(&body);
        for link in &links {
            sink.append(link)?;
        }
        Ok(links.len())
    }
}

/// Proxy list entries are bare `host:port` addresses; reqwest wants a full
/// URL, so entries without a scheme are dialed as plain HTTP.
fn proxy_url(proxy: &str) -> String {
    if proxy.contains("://") {
        proxy.to_string()
    } else {
        format!("http://{}", proxy)
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of entries in the fetched proxy list.
    pub proxy_count: usize,
    /// The proxy the run was routed through.
    pub proxy: String,
    /// Number of links written to the output file.
    pub links_written: usize,
}

/// Execute one full scrape: create the output file, fetch the proxy list,
/// select a proxy and an identity, visit the target page, and flush the
/// extracted links.
///
/// The output file is created before the proxy list is fetched, so a failed
/// list fetch leaves an empty file behind and no request ever reaches the
/// target.
pub async fn run<R: rand::Rng + ?Sized>(
    config: &ScraperConfig,
    rng: &mut R,
) -> Result<RunReport, ScrapeError> {
    let mut sink = LinkSink::create(&config.output_path)?;

    let list_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let proxies = provider::fetch_proxies(&list_client, &config.proxy_source).await?;
    info!("Fetched {} proxies", proxies.len());
    debug!("{:?}", proxies);

    let proxy = provider::random_proxy(&proxies, rng)?.to_string();
    info!("Using proxy: {}", proxy);

    let identity = IdentityProfile::random(config, rng);
    let crawler = Crawler::new(config, &proxy, identity)?;
    let links_written = crawler.visit(&config.target_url, &mut sink).await?;
    sink.finish()?;

    Ok(RunReport {
        proxy_count: proxies.len(),
        proxy,
        links_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_addresses_dial_as_http() {
        assert_eq!(proxy_url("10.0.0.1:8080"), "http://10.0.0.1:8080");
        assert_eq!(proxy_url("http://10.0.0.1:3128"), "http://10.0.0.1:3128");
    }
}
