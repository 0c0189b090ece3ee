//! Configuration management module.
//!
//! This module handles loading, saving, and managing the controller
//! configuration: the form layout, the tracked inputs, the submission target
//! and the logging level.

mod error;

pub use error::ConfigError;

use crate::controller::{default_tracked_inputs, ControllerOptions};
use crate::error::AppError;
use crate::transport::{parse_method, Method};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/formctl";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub fields: Vec<String>, // Form field names in document order
    pub tracked_inputs: Vec<String>,
    pub action: Option<String>,
    pub method: String,
    pub send_body: bool,
    pub max_progress_retries: Option<u32>,
    pub request_timeout_ms: Option<u64>,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_tracked_inputs")]
    pub tracked_inputs: Vec<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub send_body: bool,
    #[serde(default)]
    pub max_progress_retries: Option<u32>,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_fields() -> Vec<String> {
    vec!["fio".to_string(), "email".to_string(), "phone".to_string()]
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            fields: default_fields(),
            tracked_inputs: default_tracked_inputs(),
            action: None,
            method: default_method(),
            send_body: false,
            max_progress_retries: None,
            request_timeout_ms: None,
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place;
    /// the file path is remembered for a later save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.fields = data.fields;
            self.tracked_inputs = data.tracked_inputs;
            self.action = data.action;
            self.method = data.method;
            self.send_body = data.send_body;
            self.max_progress_retries = data.max_progress_retries;
            self.request_timeout_ms = data.request_timeout_ms;
            self.log_level = data.log_level;
        }

        Ok(())
    }

    /// Serialize the current configuration and write it to the disk,
    /// creating the directory if needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            fields: self.fields.clone(),
            tracked_inputs: self.tracked_inputs.clone(),
            action: self.action.clone(),
            method: self.method.clone(),
            send_body: self.send_body,
            max_progress_retries: self.max_progress_retries,
            request_timeout_ms: self.request_timeout_ms,
            log_level: self.log_level.clone(),
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

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the configured HTTP method.
    ///
    pub fn method(&self) -> Result<Method, ConfigError> {
        parse_method(&self.method).ok_or_else(|| ConfigError::InvalidMethod(self.method.clone()))
    }

    /// Return the configured form action.
    ///
    pub fn action(&self) -> Result<&str, ConfigError> {
        self.action.as_deref().ok_or(ConfigError::ActionNotSet)
    }

    /// Return the configured log level filter.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Return the controller options described by this configuration.
    ///
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            tracked_inputs: self.tracked_inputs.clone(),
            send_body: self.send_body,
            max_progress_retries: self.max_progress_retries,
        }
    }

    /// Returns the path buffer for the default configuration directory or
    /// an error if the home directory could not be found.
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
