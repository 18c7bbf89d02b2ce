//! Browser identity presented to the target site.

use crate::config::ScraperConfig;

use rand::Rng;

/// Header values presented to mimic a real browser.
#[derive(Debug, Clone)]
pub struct IdentityProfile {
    /// User-Agent for the crawling client.
    pub user_agent: String,
    /// Referer sent with every request.
    pub referer: String,
    /// Accept-Language sent with every request.
    pub accept_language: String,
}

impl IdentityProfile {
    /// Build a profile with a User-Agent drawn uniformly from the configured
    /// set. An empty set yields an empty User-Agent.
    pub fn random<R: Rng + ?Sized>(config: &ScraperConfig, rng: &mut R) -> Self {
        let user_agent = if config.user_agents.is_empty() {
            String::new()
        } else {
            config.user_agents[rng.random_range(0..config.user_agents.len())].clone()
        };

        Self {
            user_agent,
            referer: config.referer.clone(),
            accept_language: config.accept_language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn user_agent_comes_from_the_configured_set() {
        let config = ScraperConfig::builder().build();

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let identity = IdentityProfile::random(&config, &mut rng);
            assert!(config.user_agents.contains(&identity.user_agent));
        }
    }

    #[test]
    fn fixed_headers_carry_over_from_config() {
        let config = ScraperConfig::builder()
            .referer("http://example.com/")
            .accept_language("de-DE")
            .build();

        let mut rng = StdRng::seed_from_u64(7);
        let identity = IdentityProfile::random(&config, &mut rng);
        assert_eq!(identity.referer, "http://example.com/");
        assert_eq!(identity.accept_language, "de-DE");
    }
}
