//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default tolerance under which a PERT float counts as zero
pub const DEFAULT_CRITICAL_TOLERANCE: f64 = 1e-6;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Shortest-path settings
    #[serde(default)]
    pub shortest_path: ShortestPathConfig,

    /// PERT scheduling settings
    #[serde(default)]
    pub pert: PertConfig,

    /// Output settings for the CLI
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for shortest-path algorithms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathConfig {
    /// Stop Bellman-Ford passes once a full pass relaxes nothing
    #[serde(default = "default_early_exit")]
    pub bellman_ford_early_exit: bool,
}

/// Configuration for the PERT scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertConfig {
    /// Absolute tolerance under which a total float counts as zero
    #[serde(default = "default_critical_tolerance")]
    pub critical_tolerance: f64,
}

/// Configuration for CLI output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<OutputFormat>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_early_exit() -> bool {
    true
}

fn default_critical_tolerance() -> f64 {
    DEFAULT_CRITICAL_TOLERANCE
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        ShortestPathConfig {
            bellman_ford_early_exit: default_early_exit(),
        }
    }
}

impl Default for PertConfig {
    fn default() -> Self {
        PertConfig {
            critical_tolerance: default_critical_tolerance(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            version: CONFIG_FORMAT_VERSION,
            shortest_path: ShortestPathConfig::default(),
            pert: PertConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
