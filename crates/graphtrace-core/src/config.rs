//! Engine configuration for graphtrace
//!
//! Configuration is read from TOML. Lookup order: an explicit path, then
//! `$GRAPHTRACE_CONFIG_DIR/config.toml`, then `graphtrace/config.toml` under
//! the platform config directory. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::algos::BellmanFordOptions;
use crate::error::{GraphTraceError, Result};
use crate::pert::PertOptions;

pub use types::{
    EngineConfig, OutputConfig, PertConfig, ShortestPathConfig, CONFIG_FORMAT_VERSION,
    DEFAULT_CRITICAL_TOLERANCE,
};

const CONFIG_DIR: &str = "graphtrace";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHTRACE_CONFIG_DIR";

impl EngineConfig {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphTraceError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphTraceError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if present
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "config_dir_unavailable");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            tracing::trace!(path = %path.display(), "config_not_found_using_defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphTraceError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no algorithm can work with
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.pert.critical_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            crate::bail_invalid!("pert.critical_tolerance", tolerance);
        }
        if self.version > CONFIG_FORMAT_VERSION {
            crate::bail_invalid!("config version", self.version);
        }
        Ok(())
    }

    pub fn bellman_ford_options(&self) -> BellmanFordOptions {
        BellmanFordOptions {
            early_exit: self.shortest_path.bellman_ford_early_exit,
        }
    }

    pub fn pert_options(&self) -> PertOptions {
        PertOptions {
            critical_tolerance: self.pert.critical_tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.shortest_path.bellman_ford_early_exit);
        assert_eq!(config.pert.critical_tolerance, DEFAULT_CRITICAL_TOLERANCE);
        assert!(config.output.default_format.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = EngineConfig::default();
        config.shortest_path.bellman_ford_early_exit = false;
        config.pert.critical_tolerance = 0.001;
        config.output.default_format = Some(OutputFormat::Json);
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pert]\ncritical_tolerance = 0.5\n").unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.pert.critical_tolerance, 0.5);
        assert!(loaded.shortest_path.bellman_ford_early_exit);
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pert]\ncritical_tolerance = -1.0\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphTraceError::InvalidValue { .. }));
    }

    #[test]
    fn test_discover_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(EngineConfig::discover(Some(&missing)).is_err());
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = EngineConfig::default();
        config.shortest_path.bellman_ford_early_exit = false;
        config.pert.critical_tolerance = 0.25;
        assert!(!config.bellman_ford_options().early_exit);
        assert_eq!(config.pert_options().critical_tolerance, 0.25);
    }
}
