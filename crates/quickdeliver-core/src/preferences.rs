//! User preferences persistence
//!
//! Stores UI preferences (theme, default delivery tier, notification toggles)
//! in `<data_dir>/quickdeliver-preferences.json`.

use crate::error::{CoreError, Result};
use crate::pricing::DeliveryTier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PREFERENCES_FILE: &str = "quickdeliver-preferences.json";

/// Color scheme for the terminal host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default): Black bg, White fg
    #[default]
    Dark,
    /// Light theme: White bg, Black fg
    Light,
}

impl ColorScheme {
    pub fn toggled(&self) -> ColorScheme {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }
}

/// Notification switches shown on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub order_updates: bool,
    pub promotions: bool,
    pub new_stores: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            order_updates: true,
            promotions: true,
            new_stores: false,
        }
    }
}

/// QuickDeliver user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub color_scheme: ColorScheme,
    pub default_tier: DeliveryTier,
    pub notifications: NotificationSettings,
}

impl Preferences {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    /// Read preferences, failing on I/O or parse errors
    pub fn read(data_dir: &Path) -> Result<Self> {
        let path = Self::path(data_dir);
        let content = std::fs::read_to_string(&path).map_err(|source| CoreError::FileRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
            message: source.to_string(),
            path,
            source,
        })
    }

    /// Load preferences; returns defaults on any I/O or parse error
    pub fn load(data_dir: &Path) -> Self {
        match Self::read(data_dir) {
            Ok(prefs) => prefs,
            Err(CoreError::FileRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!("no preferences file yet, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Persist preferences as pretty JSON
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir).map_err(|source| CoreError::FileWrite {
            path: data_dir.to_path_buf(),
            source,
        })?;
        let path = Self::path(data_dir);
        let content = serde_json::to_string_pretty(self).map_err(|source| CoreError::JsonParse {
            message: source.to_string(),
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, content).map_err(|source| CoreError::FileWrite { path, source })
    }
}

/// `dirs::config_dir()/quickdeliver`
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("quickdeliver"))
        .ok_or(CoreError::DataDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(dir.path());
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.notifications.order_updates);
        assert!(!prefs.notifications.new_stores);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        let prefs = Preferences {
            color_scheme: ColorScheme::Light,
            default_tier: DeliveryTier::Express,
            ..Preferences::default()
        };
        prefs.save(&nested).unwrap();
        assert_eq!(Preferences::load(&nested), prefs);
    }

    #[test]
    fn test_corrupt_file_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Preferences::path(dir.path()), "{ not json").unwrap();

        assert!(matches!(
            Preferences::read(dir.path()),
            Err(CoreError::JsonParse { .. })
        ));
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            Preferences::path(dir.path()),
            r#"{ "color_scheme": "light" }"#,
        )
        .unwrap();
        let prefs = Preferences::load(dir.path());
        assert_eq!(prefs.color_scheme, ColorScheme::Light);
        assert_eq!(prefs.default_tier, DeliveryTier::Standard);
    }
}
