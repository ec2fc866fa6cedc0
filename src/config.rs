//! Global timeblock configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

static DEFAULT_SCHEDULE_PATH: &str = "schedule.json";

/// Configuration at ~/.config/timeblock/config.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TimeblockConfig {
    /// Where the schedule lives when --file is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_path: Option<String>,
}

impl TimeblockConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("timeblock");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config file at {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Could not parse config file at {}", path.display()))
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> Result<()> {
        let contents = "\
# timeblock configuration

# Where your schedule lives when --file is not passed:
# schedule_path = \"~/schedule.json\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Could not create config directory at {}", parent.display())
            })?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file at {}", path.display()))?;

        Ok(())
    }
}

/// Resolve the schedule file for this invocation: the --file flag wins,
/// then the configured path, then ./schedule.json.
pub fn schedule_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let config = TimeblockConfig::load()?;
    match config.schedule_path {
        Some(configured) => Ok(PathBuf::from(
            shellexpand::tilde(&configured).into_owned(),
        )),
        None => Ok(PathBuf::from(DEFAULT_SCHEDULE_PATH)),
    }
}
