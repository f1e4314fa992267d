//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Ledger validation policy.
    #[serde(default)]
    pub ledger: LedgerPolicy,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory SQLite database.
    ///
    /// The pool is pinned to a single connection because every SQLite
    /// in-memory connection opens its own empty database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://fintrack.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

/// Tunables for the ledger validation rules and dashboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LedgerPolicy {
    /// How many calendar years ahead a savings goal may target.
    #[serde(default = "default_savings_horizon_years")]
    pub savings_horizon_years: u32,
    /// Number of rows shown in "recent" lists.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u64,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            savings_horizon_years: default_savings_horizon_years(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_savings_horizon_years() -> u32 {
    5
}

fn default_recent_limit() -> u64 {
    5
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `FINTRACK__*` variables
    /// (e.g. `FINTRACK__DATABASE__URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINTRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
