//! Configuration for a scrape run.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PROXY_SOURCE: &str =
    "https://api.proxyscrape.com/v2/?request=displayproxies&protocol=http&county=US";

const DEFAULT_TARGET_URL: &str = "https://www.anothermag.com/";

const DEFAULT_REFERER: &str = "https://www.anothermag.com/";

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Browser User-Agent strings rotated to avoid detection.
const DEFAULT_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/78.0.3904.97 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/71.0.3578.98 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3770.142 Safari/537.36",
];

/// Configuration for a single scrape run.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// URL of the proxy list service.
    pub proxy_source: String,
    /// Page to crawl for links.
    pub target_url: String,
    /// File receiving one extracted link per line.
    pub output_path: PathBuf,
    /// User-Agent strings to choose from.
    pub user_agents: Vec<String>,
    /// Referer header sent with every request.
    pub referer: String,
    /// Accept-Language header sent with every request.
    pub accept_language: String,
    /// Base delay between requests to the same domain.
    pub delay: Duration,
    /// Upper bound of the random jitter added on top of the base delay.
    pub random_delay: Duration,
    /// Timeout applied to every outgoing request.
    pub request_timeout: Duration,
}

impl ScraperConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ScraperConfigBuilder {
        ScraperConfigBuilder::new()
    }
}

/// Builder for `ScraperConfig`.
pub struct ScraperConfigBuilder {
    proxy_source: Option<String>,
    target_url: Option<String>,
    output_path: Option<PathBuf>,
    user_agents: Vec<String>,
    referer: Option<String>,
    accept_language: Option<String>,
    delay: Option<Duration>,
    random_delay: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl ScraperConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            proxy_source: None,
            target_url: None,
            output_path: None,
            user_agents: Vec::new(),
            referer: None,
            accept_language: None,
            delay: None,
            random_delay: None,
            request_timeout: None,
        }
    }

    /// Set the URL of the proxy list service.
    pub fn proxy_source(mut self, url: impl Into<String>) -> Self {
        self.proxy_source = Some(url.into());
        self
    }

    /// Set the page to crawl for links.
    pub fn target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = Some(url.into());
        self
    }

    /// Set the path of the output file.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the User-Agent strings to choose from.
    pub fn user_agents(mut self, agents: Vec<impl Into<String>>) -> Self {
        self.user_agents = agents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the Referer header sent with every request.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Set the Accept-Language header sent with every request.
    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = Some(value.into());
        self
    }

    /// Set the base delay between requests to the same domain.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the upper bound of the random jitter per request.
    pub fn random_delay(mut self, delay: Duration) -> Self {
        self.random_delay = Some(delay);
        self
    }

    /// Set the timeout applied to every outgoing request.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ScraperConfig {
        let user_agents = if self.user_agents.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect()
        } else {
            self.user_agents
        };

        ScraperConfig {
            proxy_source: self.proxy_source.unwrap_or_else(|| DEFAULT_PROXY_SOURCE.to_string()),
            target_url: self.target_url.unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
            output_path: self.output_path.unwrap_or_else(|| PathBuf::from("output.txt")),
            user_agents,
            referer: self.referer.unwrap_or_else(|| DEFAULT_REFERER.to_string()),
            accept_language: self
                .accept_language
                .unwrap_or_else(|| DEFAULT_ACCEPT_LANGUAGE.to_string()),
            delay: self.delay.unwrap_or(Duration::from_secs(2)),
            random_delay: self.random_delay.unwrap_or(Duration::from_secs(3)),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}

impl Default for ScraperConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
