//! Application configuration loaded from environment variables.

/// Host configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `MONGO_URI`: MongoDB connection string; customers are kept in memory when unset
/// - `CUSTOMER_NAME`: name of the demo customer (default: `"Percy"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: Option<String>,
    pub customer_name: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            mongo_uri: lookup("MONGO_URI").filter(|uri| !uri.is_empty()),
            customer_name: lookup("CUSTOMER_NAME").unwrap_or(defaults.customer_name),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns true when customers should be stored in MongoDB.
    pub fn uses_mongo(&self) -> bool {
        self.mongo_uri.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: None,
            customer_name: "Percy".to_string(),
            log_level: "info".to_string(),
        }
    }
}
