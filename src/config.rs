//! Configuration for DexKV
//!
//! Centralized configuration with sensible defaults, consumed by the
//! CLI driver. The library itself takes explicit arguments everywhere.

use std::path::PathBuf;

use crate::store::BackendKind;

/// Main configuration for a DexKV catalog session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Which backend the factory should construct
    pub backend: BackendKind,

    // -------------------------------------------------------------------------
    // Loader Configuration
    // -------------------------------------------------------------------------
    /// CSV file the catalog is loaded from
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Instrumentation
    // -------------------------------------------------------------------------
    /// Wrap the store in the timing decorator
    pub timed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Hash,
            data_file: PathBuf::from("data/pokemon.csv"),
            timed: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backend kind
    pub fn backend(mut self, kind: BackendKind) -> Self {
        self.config.backend = kind;
        self
    }

    /// Set the CSV data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable the timing decorator
    pub fn timed(mut self, timed: bool) -> Self {
        self.config.timed = timed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
