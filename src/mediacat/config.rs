use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SNAPSHOT: &str = "catalog.json";

/// Configuration for mediacat, stored as config.json in the platform
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MediaConfig {
    /// Snapshot file the CLI operates on when `--catalog` is not given.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl MediaConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: MediaConfig = serde_json::from_str(&content).map_err(CatalogError::Decode)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Decode)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    /// The snapshot to operate on: the configured one, or the default
    /// name under the given data directory.
    pub fn snapshot_path(&self, data_dir: &Path) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_SNAPSHOT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MediaConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, MediaConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = MediaConfig {
            catalog: Some(PathBuf::from("/tmp/media.json")),
        };
        config.save(dir.path()).unwrap();

        let loaded = MediaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn snapshot_path_defaults_into_the_data_dir() {
        let config = MediaConfig::default();
        let path = config.snapshot_path(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/catalog.json"));

        let configured = MediaConfig {
            catalog: Some(PathBuf::from("/elsewhere/c.json")),
        };
        assert_eq!(
            configured.snapshot_path(Path::new("/data")),
            PathBuf::from("/elsewhere/c.json")
        );
    }
}
