use contracts::shared::list::SortSpec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub latency: LatencyConfig,
    pub balance: BalanceConfig,
    pub lists: ListsConfig,
}

/// Simulated network delays, milliseconds
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LatencyConfig {
    pub load_ms: u32,
    pub login_ms: u32,
    pub register_ms: u32,
    pub save_ms: u32,
    pub delete_ms: u32,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            load_ms: 1000,
            login_ms: 1000,
            register_ms: 1500,
            save_ms: 1500,
            delete_ms: 300,
        }
    }
}

/// Initial seller balance shown on the withdrawals page
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BalanceConfig {
    pub available: f64,
    pub pending: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            available: 1700.5,
            pending: 750.25,
        }
    }
}

/// Default sort per list
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub products: SortSpec,
    pub sales: SortSpec,
    pub withdrawals: SortSpec,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            products: SortSpec::desc("dateAdded"),
            sales: SortSpec::desc("date"),
            withdrawals: SortSpec::desc("date"),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[latency]
load_ms = 1000
login_ms = 1000
register_ms = 1500
save_ms = 1500
delete_ms = 300

[balance]
available = 1700.5
pending = 750.25

[lists]
products = { field = "dateAdded", direction = "desc" }
sales = { field = "date", direction = "desc" }
withdrawals = { field = "date", direction = "desc" }
"#;

impl DashboardConfig {
    /// Parse configuration; missing sections and keys take their defaults
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

/// Load configuration
///
/// Uses the provided TOML overrides when they parse, otherwise
/// falls back to the embedded default config
pub fn load_config(overrides: Option<&str>) -> DashboardConfig {
    if let Some(contents) = overrides {
        match DashboardConfig::from_toml_str(contents) {
            Ok(config) => {
                log::info!("Using dashboard config overrides");
                return config;
            }
            Err(err) => {
                log::warn!("Invalid dashboard config, using defaults: {}", err);
            }
        }
    }

    log::info!("Using default embedded configuration");
    DashboardConfig::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::SortDirection;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let config = load_config(Some(
            r#"
            [latency]
            delete_ms = 0

            [lists]
            sales = { field = "amount", direction = "asc" }
            "#,
        ));
        assert_eq!(config.latency.delete_ms, 0);
        assert_eq!(config.latency.load_ms, 1000);
        assert_eq!(config.lists.sales.field, "amount");
        assert_eq!(config.lists.sales.direction, SortDirection::Asc);
        assert_eq!(config.lists.products, SortSpec::desc("dateAdded"));
        assert_eq!(config.balance, BalanceConfig::default());
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = load_config(Some(
            "[lists]\nsales = { field = \"date\", direction = \"sideways\" }",
        ));
        assert_eq!(config, DashboardConfig::default());
    }
}
