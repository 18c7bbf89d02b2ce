//! # proxy-scraper
//!
//! A single-shot link scraper. It fetches a list of public proxies, picks one
//! at random, and crawls one target page through it with a randomized browser
//! identity. Every `href` found on the page is appended to a newline-delimited
//! output file.
//!
//! The run is strictly sequential: one list fetch, one selection, one page
//! visit. Any failure along the way is terminal.

pub mod config;
pub mod crawler;
pub mod error;
pub mod extract;
pub mod identity;
pub mod limit;
pub mod middleware;
pub mod provider;
pub mod sink;

pub use config::{ScraperConfig, ScraperConfigBuilder};
pub use crawler::{run, Crawler, RunReport};
pub use error::ScrapeError;
pub use extract::extract_links;
pub use identity::IdentityProfile;
pub use provider::{fetch_proxies, random_proxy};
pub use sink::LinkSink;
