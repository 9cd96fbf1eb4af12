use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    /// Height of each grid row, in lines
    pub row_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_file: None, log_level: Some("info".to_owned()), row_height: 1 }
    }
}

impl Config {
    /// Loads `path`, or the default location when `None`.
    ///
    /// A missing default file is created from the bundled one; a missing explicit file is an error.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file `{}` not found", path.display());
                }
                Self::load(&path)?
            }
            None => {
                let path = get_config_path()?;
                if path.is_file() {
                    Self::load(&path)?
                } else {
                    fs::write(&path, DEFAULT_CONFIG)
                        .with_context(|| format!("Fail to write file `{}`", path.display()))?;
                    Self::bundled()?
                }
            }
        };
        Ok(config.sanitized())
    }

    fn bundled() -> Result<Self> {
        serde_yaml_ng::from_str(DEFAULT_CONFIG).context("Fail to deserialize bundled config")
    }

    fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("Fail to open file `{}`", path.display()))?;
        serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", path.display()))
    }

    fn sanitized(mut self) -> Self {
        self.row_height = self.row_height.max(1);
        self
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_project_dir()?.config_dir().to_owned();
    if !dir.is_dir() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }

    Ok(dir.join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}
