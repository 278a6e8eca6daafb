//! File-backed store for user settings and the script text.
//!
//! Both live under the data directory as plain files. Reads degrade to
//! defaults rather than erroring: a missing or unparseable settings file
//! means the speaker gets the stock setup, not a failure.

use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::{Result, Script};

const SETTINGS_FILE: &str = "settings.json";
const SCRIPT_FILE: &str = "script.txt";

#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn script_path(&self) -> PathBuf {
        self.data_dir.join(SCRIPT_FILE)
    }

    /// Load settings, substituting defaults when the file is missing or
    /// malformed. Never fails.
    pub async fn load_settings(&self) -> Settings {
        let path = self.settings_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Malformed settings in {}: {e}; using defaults", path.display());
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                tracing::warn!("Cannot read {}: {e}; using defaults", path.display());
                Settings::default()
            }
        }
    }

    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.ensure_data_dir().await?;
        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(self.settings_path(), json).await?;
        tracing::debug!("Settings saved to {}", self.settings_path().display());
        Ok(())
    }

    /// Load the script text verbatim; a missing file is an empty script
    pub async fn load_script(&self) -> Script {
        match tokio::fs::read_to_string(self.script_path()).await {
            Ok(text) => Script::from_text(&text),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Cannot read script: {e}; starting empty");
                }
                Script::default()
            }
        }
    }

    /// Load a script from an explicit path (CLI argument), bypassing the
    /// data dir. This one does fail loudly: the user named the file.
    pub async fn load_script_from(path: &Path) -> Result<Script> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(Script::from_text(&text))
    }

    pub async fn save_script(&self, text: &str) -> Result<()> {
        self.ensure_data_dir().await?;
        tokio::fs::write(self.script_path(), text).await?;
        Ok(())
    }

    async fn ensure_data_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Contrast;

    fn temp_store(tag: &str) -> Store {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "prompterm-test-{tag}-{}-{nanos}",
            std::process::id()
        ));
        // A leftover dir from an earlier run must not leak state in
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    #[tokio::test]
    async fn test_missing_settings_yield_defaults() {
        let store = temp_store("missing");
        let settings = store.load_settings().await;
        assert_eq!(settings.speed, 2.0);
        assert_eq!(settings.contrast, Contrast::YellowOnBlack);
    }

    #[tokio::test]
    async fn test_malformed_settings_yield_defaults() {
        let store = temp_store("malformed");
        tokio::fs::create_dir_all(&store.data_dir).await.unwrap();
        tokio::fs::write(store.settings_path(), "{ not json")
            .await
            .unwrap();
        let settings = store.load_settings().await;
        assert_eq!(settings.speed, 2.0);
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let store = temp_store("roundtrip");
        let mut settings = Settings::default();
        settings.speed = 3.5;
        settings.mirror_h = true;
        settings.contrast = Contrast::Light;
        store.save_settings(&settings).await.unwrap();

        let loaded = store.load_settings().await;
        assert_eq!(loaded.speed, 3.5);
        assert!(loaded.mirror_h);
        assert_eq!(loaded.contrast, Contrast::Light);
    }

    #[tokio::test]
    async fn test_script_round_trip() {
        let store = temp_store("script");
        store.save_script("hello\n\nworld\n").await.unwrap();
        let script = store.load_script().await;
        assert_eq!(script.lines(), &["hello", "", "world"]);
    }

    #[tokio::test]
    async fn test_missing_script_is_empty() {
        let store = temp_store("noscript");
        assert!(store.load_script().await.is_empty());
    }
}
