use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for talking to the recipe API and caching images
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the API; endpoint names are joined onto it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Category passed to the list endpoint
    #[serde(default = "default_category")]
    pub category: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum number of images kept in memory
    #[serde(default = "default_image_cache_capacity")]
    pub image_cache_capacity: usize,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            category: default_category(),
            timeout: default_timeout(),
            image_cache_capacity: default_image_cache_capacity(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1/".to_string()
}

fn default_category() -> String {
    "Dessert".to_string()
}

fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_image_cache_capacity() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("dessertly/{}", env!("CARGO_PKG_VERSION"))
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with DESSERTLY__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: DESSERTLY__IMAGE_CACHE_CAPACITY
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("DESSERTLY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
