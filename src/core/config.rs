use crate::core::auth::DEFAULT_BCRYPT_COST;
use dotenv::dotenv;
use std::env;
use tracing::info;

#[derive(Clone)]
pub struct Config {
    pub api_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub bcrypt_cost: u32,
    pub app_env: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_secret", &"***")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("app_env", &self.app_env)
            .finish()
    }
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_secret = lookup("API_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| "API_SECRET must be set to a non-empty value".to_string())?;

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or_else(|| "Invalid BCRYPT_COST: must be a number between 4-31".to_string())?,
            None => DEFAULT_BCRYPT_COST,
        };

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            api_secret,
            server_host,
            server_port,
            bcrypt_cost,
            app_env,
        })
    }

    /// Logs the configuration, never the secret itself.
    pub fn print_info(&self) {
        info!("Environment: {}", self.app_env);
        info!("Server Address: {}:{}", self.server_host, self.server_port);
        info!("bcrypt cost: {}", self.bcrypt_cost);
        info!("API secret: configured ({} bytes)", self.api_secret.len());
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
    fn defaults_apply_when_only_secret_is_set() {
        let config = Config::from_lookup(lookup_from(&[("API_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.api_secret, "s3cret");
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.bcrypt_cost, 14);
        assert_eq!(config.app_env, "development");
    }

    #[test]
    fn missing_or_empty_secret_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        let err = Config::from_lookup(lookup_from(&[("API_SECRET", "")])).unwrap_err();
        assert!(err.contains("API_SECRET"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_SECRET", "s3cret"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("BCRYPT_COST", "10"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.app_env, "production");
    }

    #[test]
    fn bad_numbers_are_rejected() {
        for (key, value) in [
            ("SERVER_PORT", "70000"),
            ("SERVER_PORT", "http"),
            ("BCRYPT_COST", "3"),
            ("BCRYPT_COST", "32"),
            ("BCRYPT_COST", "high"),
        ] {
            let result = Config::from_lookup(lookup_from(&[("API_SECRET", "s"), (key, value)]));
            assert!(result.is_err(), "{key}={value} should be rejected");
        }
    }

    #[test]
    fn debug_hides_secret() {
        let config = Config::from_lookup(lookup_from(&[("API_SECRET", "s3cret")])).unwrap();
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
