//! Panel configuration: which field leads each listing row.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Primary attribute the listing is keyed by. Selects which content field
/// gets the fixed or flexible width share of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    Address,
    Hostname,
    Fingerprint,
    #[default]
    Nickname,
}

impl ListingMode {
    /// Parse a listing mode from a string, case-insensitively.
    pub fn from_str_lc(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "address" => Ok(ListingMode::Address),
            "hostname" => Ok(ListingMode::Hostname),
            "fingerprint" => Ok(ListingMode::Fingerprint),
            "nickname" => Ok(ListingMode::Nickname),
            _ => Err(format!("unknown listing mode: '{s}'")),
        }
    }
}

impl fmt::Display for ListingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingMode::Address => write!(f, "address"),
            ListingMode::Hostname => write!(f, "hostname"),
            ListingMode::Fingerprint => write!(f, "fingerprint"),
            ListingMode::Nickname => write!(f, "nickname"),
        }
    }
}

/// Errors from loading panel configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Display settings for the circuit listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Primary field for each row.
    pub listing_mode: ListingMode,
    /// Append the relay's locale to address labels when it is known.
    pub include_locale: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            listing_mode: ListingMode::Nickname,
            include_locale: true,
        }
    }
}

impl PanelConfig {
    /// Parse a config from YAML text. Missing keys take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_nickname_with_locale() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.listing_mode, ListingMode::Nickname);
        assert!(cfg.include_locale);
    }

    #[test]
    fn from_yaml_full() {
        let cfg = PanelConfig::from_yaml("listing_mode: fingerprint\ninclude_locale: false\n")
            .unwrap();
        assert_eq!(cfg.listing_mode, ListingMode::Fingerprint);
        assert!(!cfg.include_locale);
    }

    #[test]
    fn from_yaml_partial_takes_defaults() {
        let cfg = PanelConfig::from_yaml("listing_mode: address\n").unwrap();
        assert_eq!(cfg.listing_mode, ListingMode::Address);
        assert!(cfg.include_locale);
    }

    #[test]
    fn from_yaml_rejects_unknown_mode() {
        assert!(PanelConfig::from_yaml("listing_mode: latency\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listing_mode: hostname").unwrap();
        let cfg = PanelConfig::load(file.path()).unwrap();
        assert_eq!(cfg.listing_mode, ListingMode::Hostname);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = PanelConfig::load(Path::new("/nonexistent/panel.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn mode_from_str() {
        assert_eq!(ListingMode::from_str_lc("ADDRESS").unwrap(), ListingMode::Address);
        assert_eq!(ListingMode::from_str_lc("nickname").unwrap(), ListingMode::Nickname);
        assert!(ListingMode::from_str_lc("latency").is_err());
    }
}
