use std::env;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";
pub const DEFAULT_NUM_RESULTS: u32 = 100;
pub const MAX_RENDERED_RESULTS: usize = 50;

/// Settings for the web search tool. Built once at the edge of the program
/// and handed to the tool; nothing below this reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    /// Result-count hint sent to the provider as `num`.
    pub num_results: u32,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            num_results: DEFAULT_NUM_RESULTS,
            max_results: MAX_RENDERED_RESULTS,
        }
    }
}

impl SearchConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SearchConfig::default();

        if let Some(api_key) = lookup("SERPAPI_KEY") {
            config.api_key = Some(api_key);
        }
        if let Some(endpoint) = lookup("SERPAPI_ENDPOINT") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.endpoint = endpoint.to_string();
            }
        }
        if let Some(num) = lookup("SERPAPI_NUM") {
            config.num_results =
                num.trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidNumber {
                        var: "SERPAPI_NUM",
                        value: num.clone(),
                        source,
                    })?;
        }

        Ok(config)
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = SearchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.endpoint, "https://serpapi.com/search");
        assert_eq!(config.num_results, 100);
        assert_eq!(config.max_results, 50);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_reads_key_and_overrides() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            ("SERPAPI_KEY", "secret"),
            ("SERPAPI_ENDPOINT", "http://localhost:9000/search"),
            ("SERPAPI_NUM", "20"),
        ]))
        .unwrap();
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.endpoint, "http://localhost:9000/search");
        assert_eq!(config.num_results, 20);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = SearchConfig::with_api_key("   ");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_invalid_num_is_an_error() {
        let result = SearchConfig::from_lookup(lookup_from(&[("SERPAPI_NUM", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { var: "SERPAPI_NUM", .. })
        ));
    }
}
