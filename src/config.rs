use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_on_start: bool,
    pub max_concurrent_requests: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        Ok(Self::from_lookup(database_url, |key| env::var(key).ok()))
    }

    fn from_lookup(database_url: String, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let seed_on_start = lookup("SEED_ON_START")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);
        let max_concurrent_requests = lookup("MAX_CONCURRENT_REQUESTS")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(100);
        Self {
            database_url,
            host,
            port,
            seed_on_start,
            max_concurrent_requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup("sqlite::memory:".into(), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_with(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(!config.seed_on_start);
        assert_eq!(config.max_concurrent_requests, 100);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_with(&[
            ("APP_PORT", "not-a-port"),
            ("SEED_ON_START", "yes"),
            ("MAX_CONCURRENT_REQUESTS", "0"),
        ]);
        assert_eq!(config.port, 3000);
        assert!(!config.seed_on_start);
        assert_eq!(config.max_concurrent_requests, 100);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = config_with(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "8001"),
            ("SEED_ON_START", "true"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8001);
        assert!(config.seed_on_start);
    }
}
