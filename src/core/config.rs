//! Configuration - Caricamento della configurazione dalle variabili d'ambiente

use super::error::ConfigError;
use dotenv::dotenv;
use std::env;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub app_env: String,
    pub log_level: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid {
                name: "MAX_DB_CONNECTIONS",
                reason: "must be a positive number",
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            database_url,
            max_connections,
            app_env,
            log_level,
        })
    }

    /// Logga la configurazione (nascondendo le credenziali)
    pub fn log_info(&self) {
        info!(
            environment = %self.app_env,
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            "Configuration loaded"
        );
    }

    /// Maschera l'URL del database per il logging
    pub fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.rfind('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_database_url() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/tickets")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/tickets");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.app_env, "development");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_max_connections() {
        for bad in ["zero", "-1", "0"] {
            let result = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://localhost/tickets"),
                ("MAX_DB_CONNECTIONS", bad),
            ]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::Invalid {
                        name: "MAX_DB_CONNECTIONS",
                        ..
                    })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/tickets"),
            ("MAX_DB_CONNECTIONS", "20"),
            ("APP_ENV", "production"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 20);
        assert_eq!(config.app_env, "production");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_mask_url_hides_credentials() {
        assert_eq!(
            Config::mask_url("postgres://user:secret@db:5432/tickets"),
            "postgres://***@db:5432/tickets"
        );
        assert_eq!(Config::mask_url("not a url"), "***");
    }
}
