use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{Config, ConfigError};

/// Overrides the base directory, mainly for scripted runs and tests.
pub const HOME_ENV_VAR: &str = "FINWISE_HOME";
const APP_DIR: &str = "finwise";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes the single `config.json` of a Finwise home directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves `$FINWISE_HOME`, then the platform config dir, then `./finwise`.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let base = match env::var_os(HOME_ENV_VAR) {
            Some(home) if !home.is_empty() => PathBuf::from(home),
            _ => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        };
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// A missing file yields [`Config::default`]; a malformed one is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Writes next to the target first and renames over it, so readers never
    /// observe a half-written file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = self.config_path.with_extension("json.tmp");
        let written = write_staged(&staging, config)
            .and_then(|()| fs::rename(&staging, &self.config_path).map_err(ConfigError::from));
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written
    }
}

fn write_staged(staging: &Path, config: &impl Serialize) -> Result<(), ConfigError> {
    let mut writer = BufWriter::new(File::create(staging)?);
    serde_json::to_writer_pretty(&mut writer, config)
        .map_err(|err| ConfigError::Serde(err.to_string()))?;
    writer.write_all(b"\n")?;
    writer.into_inner().map_err(|err| err.into_error())?.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join(CONFIG_FILE));
        fs::write(manager.config_path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }

    #[test]
    fn save_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("nested").join(CONFIG_FILE));
        manager.save(&Config::default()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(CONFIG_FILE);
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();

        let manager = ConfigManager::new(target.clone());
        assert!(manager.save(&Config::default()).is_err());
        assert!(!target.with_extension("json.tmp").exists());
    }
}
