//! Configuration management module.
//!
//! This module handles loading and saving application configuration,
//! currently the base URL of the stable service.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/stajnia-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Config {
    /// Return a new instance pointing at the default service address.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            base_url: default_base_url(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. If no file exists yet, initialize one with default
    /// values at the default file path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
        } else {
            self.create_file()?;
        }

        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    fn create_file(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        let data = FileSpec {
            base_url: self.base_url.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_base_url() {
        let config = Config::new();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn load_creates_file_with_defaults() {
        let dir = std::env::temp_dir().join("stajnia-tui-test-create");
        let _ = fs::remove_dir_all(&dir);

        let mut config = Config::new();
        config
            .load(Some(dir.to_str().unwrap()))
            .expect("load should succeed");

        let contents = fs::read_to_string(dir.join(FILE_NAME)).expect("file should exist");
        assert!(contents.contains("http://localhost:8000"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = std::env::temp_dir().join("stajnia-tui-test-read");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "base_url: http://stajnia.local:9000\n").unwrap();

        let mut config = Config::new();
        config
            .load(Some(dir.to_str().unwrap()))
            .expect("load should succeed");
        assert_eq!(config.base_url, "http://stajnia.local:9000");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_defaults_missing_base_url_field() {
        let dir = std::env::temp_dir().join("stajnia-tui-test-empty");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "{}\n").unwrap();

        let mut config = Config::new();
        config
            .load(Some(dir.to_str().unwrap()))
            .expect("load should succeed");
        assert_eq!(config.base_url, "http://localhost:8000");

        let _ = fs::remove_dir_all(&dir);
    }
}
