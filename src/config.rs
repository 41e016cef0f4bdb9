pub mod global;

use crate::config::global::AppConfig;
use crate::models::error::{AppError, Phase};
use crate::models::paths::AppPathRules;
use crate::utils::json::Json;
use crate::utils::path::to_utf8;
use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use tracing::{debug, info};

pub const APP_NAME: &str = "gestor-xampp";

/// Loads and stores `config.json`. No locking: the last writer wins.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    dir: Utf8PathBuf,
    paths: AppPathRules,
}

impl ConfigStore {
    /// `<user-config-root>/gestor-xampp`.
    pub fn platform() -> Result<Self, AppError> {
        let dirs = BaseDirs::new().ok_or(AppError::NoConfigDir)?;
        Ok(Self::at(to_utf8(dirs.config_dir().join(APP_NAME))?))
    }

    pub fn at(dir: impl Into<Utf8PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            paths: AppPathRules::new(&dir),
            dir,
        }
    }

    pub fn config_file(&self) -> &Utf8Path {
        &self.paths.config_file
    }

    pub fn log_dir(&self) -> &Utf8Path {
        &self.paths.logs
    }

    /// Creates the config directory. Run once at startup.
    pub fn ensure_dir(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| AppError::io(Phase::Config, &self.dir, e))
    }

    /// Reads the stored document, or defaults when none exists yet. Never writes.
    pub fn load(&self) -> Result<AppConfig, AppError> {
        let file = self.config_file();
        if !file.exists() {
            debug!("No config at {file}, using defaults");
            return Ok(AppConfig::default());
        }
        Json::read(file)
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), AppError> {
        self.ensure_dir()?;
        Json::write(self.config_file(), config)?;
        debug!("Config saved to {}", self.config_file());
        Ok(())
    }

    /// Overwrites the stored document with defaults, e.g. to recover from a corrupt file.
    pub fn reset(&self) -> Result<AppConfig, AppError> {
        let config = AppConfig::default();
        self.save(&config)?;
        info!("Config reset at {}", self.config_file());
        Ok(config)
    }
}
