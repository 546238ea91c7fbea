use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::modules::contact::application::use_cases::submit_contact::DEFAULT_SUBMIT_DELAY;
use crate::modules::portfolio::application::services::portfolio_store::DEFAULT_STORAGE_KEY;
use crate::modules::portfolio::application::shortcut::{ChordParseError, KeyChord};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid CONTACT_DELAY_MS value: {0}")]
    InvalidContactDelay(String),

    #[error("Invalid ADMIN_CHORD value: {0}")]
    InvalidAdminChord(#[from] ChordParseError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory for the file-backed document store. Memory storage when unset.
    pub storage_dir: Option<PathBuf>,
    pub storage_key: String,
    pub contact_delay: Duration,
    pub admin_chord: KeyChord,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let contact_delay = match non_empty("CONTACT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidContactDelay(raw))?,
            None => DEFAULT_SUBMIT_DELAY,
        };

        let admin_chord = match non_empty("ADMIN_CHORD") {
            Some(raw) => raw.parse::<KeyChord>()?,
            None => KeyChord::default(),
        };

        Ok(Self {
            host,
            port,
            storage_dir: non_empty("STORAGE_DIR").map(PathBuf::from),
            storage_key: non_empty("STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            contact_delay,
            admin_chord,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn config_from(vars: HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(HashMap::new()).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.storage_dir, None);
        assert_eq!(config.storage_key, "portfolio_data");
        assert_eq!(config.contact_delay, Duration::from_millis(1000));
        assert_eq!(config.admin_chord, KeyChord::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(hashmap! {
            "HOST" => "0.0.0.0",
            "PORT" => "9000",
            "STORAGE_DIR" => "/var/lib/portfolio",
            "STORAGE_KEY" => "site",
            "CONTACT_DELAY_MS" => "0",
            "ADMIN_CHORD" => "Alt+P",
        })
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/var/lib/portfolio")));
        assert_eq!(config.storage_key, "site");
        assert_eq!(config.contact_delay, Duration::ZERO);
        assert!(config.admin_chord.alt);
        assert!(!config.admin_chord.ctrl);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(hashmap! { "PORT" => "eighty" }),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(hashmap! { "CONTACT_DELAY_MS" => "-5" }),
            Err(ConfigError::InvalidContactDelay(_))
        ));
        assert!(matches!(
            config_from(hashmap! { "ADMIN_CHORD" => "Hyper+Q" }),
            Err(ConfigError::InvalidAdminChord(_))
        ));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(hashmap! { "STORAGE_DIR" => "  ", "PORT" => "" }).unwrap();

        assert_eq!(config.storage_dir, None);
        assert_eq!(config.port, 8080);
    }
}
