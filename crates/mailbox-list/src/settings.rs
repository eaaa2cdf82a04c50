//! Host settings.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mailbox_list_core::MessageLocation;

/// Default tracing filter when neither `RUST_LOG` nor the settings set one.
pub const DEFAULT_LOG_FILTER: &str = "mailbox_list=debug,mailbox_list_core=debug";

/// Host settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Location the list opens on.
    pub location: MessageLocation,
    /// Tracing filter directive.
    pub log_filter: String,
    /// JSON mailbox fixture to load instead of the built-in mailbox.
    pub fixture: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            location: MessageLocation::Inbox,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fixture: None,
        }
    }
}

/// Location of the settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailbox-list")
        .join("settings.json")
}

/// Load settings from `path`, falling back to defaults if it does not exist.
pub async fn load_settings(path: &Path) -> anyhow::Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading settings from {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("parsing settings in {}", path.display()))
}

/// Save settings to `path`, creating its directory.
pub async fn save_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing settings to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            location: MessageLocation::Sent,
            log_filter: "mailbox_list=trace".into(),
            fixture: Some(PathBuf::from("/tmp/mailbox.json")),
        };

        save_settings(&path, &settings).await.unwrap();

        assert_eq!(load_settings(&path).await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{ "location": "archive" }"#)
            .await
            .unwrap();

        let settings = load_settings(&path).await.unwrap();
        assert_eq!(settings.location, MessageLocation::Archive);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(settings.fixture, None);
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = load_settings(&path).await.unwrap_err();
        assert!(err.to_string().contains("parsing settings"));
    }
}
