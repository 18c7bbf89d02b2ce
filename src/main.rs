//! Single-shot scrape run with the default configuration.

use proxy_scraper::{crawler, ScraperConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ScraperConfig::builder().build();
    let mut rng = StdRng::from_os_rng();

    let report = crawler::run(&config, &mut rng).await?;

    println!("Fetched {} proxies", report.proxy_count);
    println!("Using proxy: {}", report.proxy);
    println!(
        "Scraping complete, {} links saved to {}",
        report.links_written,
        config.output_path.display()
    );
    Ok(())
}
