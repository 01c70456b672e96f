//! Configuration types for persistence.toml

use serde::{Deserialize, Serialize};

use persistence_core::{Database, DialectResolution, ResolutionError};

/// Database connection configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database location; `:memory:` opens a private in-memory database
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    ":memory:".to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl ConnectionConfig {
    pub fn is_in_memory(&self) -> bool {
        self.url == ":memory:"
    }
}

/// Main configuration struct for persistence.toml
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// Database product name, resolved through the database registry
    #[serde(default = "default_database")]
    pub database: String,
    /// Log every generated statement at info level
    #[serde(default)]
    pub show_sql: bool,
    /// Database connection configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionConfig>,
}

fn default_database() -> String {
    Database::SQLite.name().to_string()
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            show_sql: false,
            connection: None,
        }
    }
}

impl PersistenceConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn resolution(&self) -> DialectResolution {
        DialectResolution::new(self.database.as_str())
    }

    /// Resolve the configured product name to a registered database
    pub fn database(&self) -> Result<Database, ConfigError> {
        Ok(Database::from(&self.resolution())?)
    }

    /// The configured connection, or an in-memory one
    pub fn connection(&self) -> ConnectionConfig {
        self.connection.clone().unwrap_or_default()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence_core::Dialect;

    #[test]
    fn test_parse_config() {
        let toml = r#"
database = "H2"
show_sql = true

[connection]
url = "./dev.db"
"#;

        let config = PersistenceConfig::parse(toml).unwrap();
        assert_eq!(config.database, "H2");
        assert!(config.show_sql);
        assert_eq!(config.connection().url, "./dev.db");
        assert_eq!(config.database().unwrap().dialect(), Dialect::H2);
    }

    #[test]
    fn test_default_config() {
        let config = PersistenceConfig::default();
        assert_eq!(config.database().unwrap(), Database::SQLite);
        assert!(!config.show_sql);
        assert!(config.connection().is_in_memory());
    }

    #[test]
    fn test_optional_keys_default() {
        let config = PersistenceConfig::parse(r#"database = "PostgreSQL""#).unwrap();
        assert!(!config.show_sql);
        assert!(config.connection.is_none());
        assert_eq!(config.resolution().database_name(), "PostgreSQL");
    }

    #[test]
    fn test_unknown_database() {
        let config = PersistenceConfig::parse(r#"database = "Oracle""#).unwrap();
        assert!(matches!(
            config.database(),
            Err(ConfigError::Resolution(
                ResolutionError::DialectNotFoundForProduct { .. }
            ))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            PersistenceConfig::parse("database = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
