//! Configuration handling for the generator.
//! Covers the optional project configuration file and the explicit runtime
//! settings threaded into every generation.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::constants::{CONFIG_FILES, DEFAULT_PLUGINS_DIR};
use crate::error::{Error, Result};

/// Project-level defaults read from `kothi.json`, `kothi.yml` or `kothi.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Author written into manifests when none is given on the command line.
    pub author: Option<String>,
}

/// Runtime settings for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory that holds one sub-directory per plugin.
    pub plugins_root: PathBuf,
    /// Overwrite an existing plugin directory without asking.
    pub force: bool,
}

impl Settings {
    pub fn new<P: Into<PathBuf>>(plugins_root: P, force: bool) -> Self {
        Self {
            plugins_root: plugins_root.into(),
            force,
        }
    }

    /// Settings for the standard monorepo layout under `project_root`.
    pub fn for_project<P: AsRef<Path>>(project_root: P, force: bool) -> Self {
        Self::new(project_root.as_ref().join(DEFAULT_PLUGINS_DIR), force)
    }
}

/// Parses configuration content according to the file name's extension.
///
/// # Errors
/// * `Error::Config` if the content is not valid for its format
pub fn parse_config(content: &str, file_name: &str) -> Result<ProjectConfig> {
    if file_name.ends_with(".json") {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid {file_name}: {e}")))
    } else {
        // An empty YAML document means "no overrides".
        if content.trim().is_empty() {
            return Ok(ProjectConfig::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid {file_name}: {e}")))
    }
}

/// Loads the project configuration, trying each supported file name in turn.
///
/// # Returns
/// * `Result<ProjectConfig>` - The first configuration found, or defaults
///
/// # Errors
/// * `Error::FileSystem` if a configuration file exists but cannot be read
/// * `Error::Config` if it cannot be parsed
pub fn load_config<P: AsRef<Path>>(project_root: P) -> Result<ProjectConfig> {
    for file in CONFIG_FILES {
        let config_path = project_root.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| Error::file_system(&config_path, e))?;
            return parse_config(&content, file);
        }
    }

    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(ProjectConfig::default())
}
