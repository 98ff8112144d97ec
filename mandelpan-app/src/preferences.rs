use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use mandelpan_render::EngineConfig;

/// Startup settings read from `preferences.json`.
///
/// Only tuning lives here; the view itself always starts from the home
/// position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_window_width() -> f32 {
    1000.0
}
fn default_window_height() -> f32 {
    800.0
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            engine: EngineConfig::default(),
        }
    }
}

impl AppPreferences {
    /// Load preferences next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        let prefs = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => prefs,
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                    return Self::default();
                }
            },
            Err(e) => {
                error!("Failed to read preferences file: {e}");
                return Self::default();
            }
        };
        if let Err(e) = prefs.engine.validate() {
            error!("Ignoring engine settings from {}: {e}", path.display());
            return Self {
                engine: EngineConfig::default(),
                ..prefs
            };
        }
        info!("Loaded preferences from {}", path.display());
        prefs
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mandelpan-prefs-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let prefs = AppPreferences::load_from(Path::new("/nonexistent/mandelpan/prefs.json"));
        assert_eq!(prefs.engine, EngineConfig::default());
        assert_eq!(prefs.window_width, 1000.0);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = write_temp("partial", r#"{"engine": {"worker_count": 2}}"#);
        let prefs = AppPreferences::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(prefs.engine.worker_count, 2);
        assert_eq!(prefs.engine.iteration_cap, 4000);
        assert_eq!(prefs.window_height, 800.0);
    }

    #[test]
    fn invalid_engine_settings_replaced() {
        let path = write_temp(
            "invalid",
            r#"{"window_width": 640.0, "engine": {"iteration_cap": 0}}"#,
        );
        let prefs = AppPreferences::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(prefs.window_width, 640.0);
        assert_eq!(prefs.engine, EngineConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = write_temp("malformed", "{ not json");
        let prefs = AppPreferences::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(prefs.engine, EngineConfig::default());
    }
}
