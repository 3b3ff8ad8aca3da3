use crate::error::{Result, RosterError};
use crate::store::validate_slot_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SESSION: &str = "default";

/// Configuration for roster, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Session used when none is given on the command line
    #[serde(default = "default_session")]
    pub default_session: String,
}

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_session: default_session(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        validate_slot_name(&config.default_session).map_err(|e| {
            RosterError::Config(format!("{}: default_session: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
