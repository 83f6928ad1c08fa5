use anyhow::{Context, Result};
use dotenvy::dotenv;
use firecrawl_client::{FirecrawlConfig, DEFAULT_API_URL};
use std::env;

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub firecrawl_api_key: String,
    pub firecrawl_api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (tests pass a map here)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let firecrawl_api_key = lookup("FIRECRAWL_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("FIRECRAWL_API_KEY must be set")?;
        let firecrawl_api_url = lookup("FIRECRAWL_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        url::Url::parse(&firecrawl_api_url)
            .with_context(|| format!("FIRECRAWL_API_URL is not a valid URL: {}", firecrawl_api_url))?;

        Ok(Self {
            firecrawl_api_key,
            firecrawl_api_url,
        })
    }

    /// Immutable client configuration handed to the Firecrawl client
    pub fn firecrawl_config(&self) -> FirecrawlConfig {
        FirecrawlConfig::with_api_url(self.firecrawl_api_key.as_str(), &self.firecrawl_api_url)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("firecrawl_api_key", &"[REDACTED]")
            .field("firecrawl_api_url", &self.firecrawl_api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_api_key_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("FIRECRAWL_API_KEY"));

        assert!(Config::from_lookup(lookup(&[("FIRECRAWL_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_api_url_defaults_to_hosted_service() {
        let config = Config::from_lookup(lookup(&[("FIRECRAWL_API_KEY", "fc-key")])).unwrap();
        assert_eq!(config.firecrawl_api_url, DEFAULT_API_URL);
        assert_eq!(
            config.firecrawl_config().scrape_endpoint(),
            "https://api.firecrawl.dev/v1/scrape"
        );
    }

    #[test]
    fn test_custom_api_url() {
        let config = Config::from_lookup(lookup(&[
            ("FIRECRAWL_API_KEY", "fc-key"),
            ("FIRECRAWL_API_URL", "http://localhost:3002/"),
        ]))
        .unwrap();
        assert_eq!(
            config.firecrawl_config().scrape_endpoint(),
            "http://localhost:3002/v1/scrape"
        );
    }

    #[test]
    fn test_invalid_api_url_is_rejected() {
        let result = Config::from_lookup(lookup(&[
            ("FIRECRAWL_API_KEY", "fc-key"),
            ("FIRECRAWL_API_URL", "not a url"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[("FIRECRAWL_API_KEY", "fc-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("fc-secret"));
    }
}
