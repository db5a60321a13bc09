use std::fs;
use std::path::Path;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use docchat_engine::ApiSettings;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "docchat.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ApiSettings::default()
        }
    }
}

/// Loads `docchat.ron` from `dir`. Missing or malformed files fall back to
/// defaults; only unexpected read errors are worth a warning.
pub fn load(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            client_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            client_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            client_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        assert_eq!(load(dir.path()), Settings::default());
    }

    #[test]
    fn valid_file_is_loaded() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            r#"(base_url: "http://backend:9000", request_timeout_secs: 5)"#,
        )
        .expect("write settings");

        let settings = load(dir.path());
        assert_eq!(settings.base_url, "http://backend:9000");
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(SETTINGS_FILENAME), "not ron at all {")
            .expect("write settings");

        assert_eq!(load(dir.path()), Settings::default());
    }

    #[test]
    fn api_settings_carry_the_timeout() {
        let settings = Settings {
            request_timeout_secs: 5,
            ..Settings::default()
        };
        assert_eq!(
            settings.api_settings().request_timeout,
            Duration::from_secs(5)
        );
    }
}
