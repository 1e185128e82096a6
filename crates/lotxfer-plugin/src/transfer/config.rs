//! Plugin configuration.
//!
//! Read from the optional configuration string of the plugin line:
//!
//! ```text
//! plugin "lotxfer.transfer" "{\"narration\": \"Move lots\", \"link\": true}"
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Configuration of the transfer plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransferConfig {
    /// Custom directive type the plugin acts on.
    pub custom_type: String,
    /// Narration of synthesized transactions.
    pub narration: String,
    /// Flag of synthesized transactions.
    pub flag: char,
    /// Tags added to synthesized transactions.
    pub tags: Vec<String>,
    /// Add a `transfer-<date>-<n>` link to synthesized transactions.
    pub link: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            custom_type: "transfer".to_string(),
            narration: "Transfer".to_string(),
            flag: '*',
            tags: Vec::new(),
            link: false,
        }
    }
}

/// Invalid plugin configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`TransferConfig`].
    #[error("Invalid transfer plugin configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured custom directive type is empty.
    #[error("Invalid transfer plugin configuration: custom_type must not be empty")]
    EmptyCustomType,
}

impl TransferConfig {
    /// Parse the plugin configuration string; absent or blank means defaults.
    pub fn parse(config: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(s) => serde_json::from_str::<Self>(s)?,
        };
        if config.custom_type.is_empty() {
            return Err(ConfigError::EmptyCustomType);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_config_is_default() {
        assert_eq!(TransferConfig::parse(None).unwrap(), TransferConfig::default());
        assert_eq!(TransferConfig::parse(Some("  ")).unwrap(), TransferConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config =
            TransferConfig::parse(Some(r#"{"narration": "Move lots", "tags": ["xfer"]}"#)).unwrap();
        assert_eq!(config.narration, "Move lots");
        assert_eq!(config.tags, vec!["xfer"]);
        assert_eq!(config.custom_type, "transfer");
        assert_eq!(config.flag, '*');
        assert!(!config.link);
    }

    #[test]
    fn test_flag() {
        let config = TransferConfig::parse(Some(r#"{"flag": "!"}"#)).unwrap();
        assert_eq!(config.flag, '!');
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TransferConfig::parse(Some(r#"{"narations": "typo"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("Invalid transfer plugin configuration"));
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(TransferConfig::parse(Some("narration=Move")).is_err());
    }

    #[test]
    fn test_empty_custom_type_rejected() {
        let err = TransferConfig::parse(Some(r#"{"custom_type": ""}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCustomType));
    }
}
