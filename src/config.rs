use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_JSON_FILE: &str = "converted_concerts.json";
pub const DEFAULT_JS_FILE: &str = "converted_concerts.js";
pub const DEFAULT_JS_BINDING: &str = "concertsData";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub json_file: String,
    pub js_file: String,
    pub js_binding: String,
    /// Event list to convert instead of the built-in one.
    pub events_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            json_file: DEFAULT_JSON_FILE.to_string(),
            js_file: DEFAULT_JS_FILE.to_string(),
            js_binding: DEFAULT_JS_BINDING.to_string(),
            events_path: None,
        }
    }
}

impl AppConfig {
    /// Defaults when `path` is `None` or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => read_config(path),
            None => Ok(Self::default()),
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn js_path(&self) -> PathBuf {
        self.output_dir.join(&self.js_file)
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(dir.path().join("absent.json").as_path())).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.json_path(), Path::new(".").join("converted_concerts.json"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "output_dir": "site/js/data", "js_binding": "shows" }"#).unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site/js/data"));
        assert_eq!(config.js_binding, "shows");
        assert_eq!(config.js_file, DEFAULT_JS_FILE);
        assert_eq!(config.js_path(), PathBuf::from("site/js/data/converted_concerts.js"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(ConfigError::Parse { .. })
        ));
    }
}
