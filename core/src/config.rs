use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of random customers added when nothing overrides it.
pub const NUM_CUSTOMERS_TO_ADD: usize = 100;

/// Balances are drawn as whole dollars in this range, then stored as cents.
pub const MIN_BALANCE_DOLLARS: i64 = 100;
pub const MAX_BALANCE_DOLLARS: i64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path, `:memory:`, or a `file:` URI.
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "testudo_bank.db".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default = "default_num_customers")]
    pub num_customers_to_add: usize,
    /// Master seed. `None` means derive one from the clock at startup.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Issue the CREATE TABLE sequence before inserting.
    #[serde(default = "default_true")]
    pub create_schema: bool,
    /// Optional JSON file of hand-specified customers.
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

fn default_num_customers() -> usize {
    NUM_CUSTOMERS_TO_ADD
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            num_customers_to_add: NUM_CUSTOMERS_TO_ADD,
            seed: None,
            create_schema: true,
            fixtures_path: None,
        }
    }
}

impl SeedConfig {
    /// Load from a JSON config file.
    /// In tests, use SeedConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SeedConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            log::info!("config file {path} not found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Config with hardcoded defaults for use in tests: in-memory database,
    /// fixed seed, smaller population.
    pub fn default_test() -> Self {
        Self {
            database: DatabaseConfig {
                path: ":memory:".into(),
            },
            num_customers_to_add: 50,
            seed: Some(42),
            create_schema: true,
            fixtures_path: None,
        }
    }
}
