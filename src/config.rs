use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the recipe search engine.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Base URL of the upstream recipe API
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECEITAS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECEITAS__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECEITAS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let settings = Config::builder()
            .set_override("base_url", "https://api.example.com")
            .unwrap()
            .build()
            .unwrap();
        let config: SearchConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_config_requires_base_url() {
        let settings = Config::builder().build().unwrap();
        let result: Result<SearchConfig, _> = settings.try_deserialize();
        assert!(result.is_err());
    }
}
