//! Request and response hooks installed on the crawling client.

use crate::error::ScrapeError;
use crate::identity::IdentityProfile;

use async_trait::async_trait;
use http::Extensions;
use log::info;
use reqwest::header::{HeaderValue, ACCEPT_LANGUAGE, REFERER};
use reqwest_middleware::{Middleware, Next, Result};

/// Sets the fixed browser headers on every outgoing request.
pub struct BrowserHeaders {
    referer: HeaderValue,
    accept_language: HeaderValue,
}

impl BrowserHeaders {
    /// Build the hook from an identity profile. Fails if a configured value
    /// is not a legal header value.
    pub fn new(identity: &IdentityProfile) -> std::result::Result<Self, ScrapeError> {
        Ok(Self {
            referer: HeaderValue::from_str(&identity.referer)?,
            accept_language: HeaderValue::from_str(&identity.accept_language)?,
        })
    }
}

#[async_trait]
impl Middleware for BrowserHeaders {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<reqwest::Response> {
        req.headers_mut().insert(REFERER, self.referer.clone());
        req.headers_mut()
            .insert(ACCEPT_LANGUAGE, self.accept_language.clone());
        next.run(req, extensions).await
    }
}

/// Logs the proxy route and the response outcome for each completed request.
pub struct ResponseLog {
    proxy: String,
}

impl ResponseLog {
    /// Create a logger for requests routed through `proxy`.
    pub fn new(proxy: impl Into<String>) -> Self {
        Self {
            proxy: proxy.into(),
        }
    }
}

#[async_trait]
impl Middleware for ResponseLog {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<reqwest::Response> {
        let url = req.url().clone();
        let response = next.run(req, extensions).await?;
        info!("Proxy Address: {}", self.proxy);
        info!("Response: {} from {}", response.status(), url);
        Ok(response)
    }
}
