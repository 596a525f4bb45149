//! Application settings persistence
//!
//! Handles saving and loading user preferences and service endpoints.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Hosted backend (auth + data)
    #[serde(default)]
    pub backend: BackendSettings,
    /// Payment preference service
    #[serde(default)]
    pub payment: PaymentSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language code ("en" or "es")
    pub language: String,
}

/// Hosted backend settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anonymous key sent as `apikey`
    pub anon_key: String,
}

impl BackendSettings {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

/// Payment preference service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// API base, e.g. `https://api.mercadopago.com`
    pub endpoint: String,
    /// Seller access token
    pub access_token: String,
    /// ISO currency for line items
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Where the payer lands after paying
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub failure_url: Option<String>,
}

impl PaymentSettings {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.access_token.trim().is_empty()
    }
}

fn default_currency() -> String {
    "ARS".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.mercadopago.com".to_string(),
            access_token: String::new(),
            currency: default_currency(),
            success_url: None,
            failure_url: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "voyago", "Voyago")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path().map(|path| Self::load_from_file(&path)) {
            Some(Ok(settings)) => settings,
            Some(Err(SettingsError::Io(e))) => {
                tracing::debug!("No settings file, using defaults: {}", e);
                Self::default()
            }
            Some(Err(e)) => {
                tracing::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("voyago-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("round-trip");
        let mut settings = Settings::default();
        settings.display.language = "es".to_string();
        settings.backend.url = "https://demo.supabase.co".to_string();
        settings.backend.anon_key = "anon".to_string();

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();

        assert_eq!(loaded.display.language, "es");
        assert!(loaded.backend.is_configured());
        assert!(!loaded.payment.is_configured());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"display": {"dark_mode": false, "language": "en"}}"#).unwrap();
        assert!(!settings.display.dark_mode);
        assert!(!settings.backend.is_configured());
        assert_eq!(settings.payment.currency, "ARS");
        assert_eq!(settings.payment.endpoint, "https://api.mercadopago.com");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load_from_file(&temp_path("missing")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn garbage_is_parse_error() {
        let path = temp_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
