//! TOML configuration for the `prism` binary.
//!
//! ```toml
//! [output]
//! color = true
//! precision = 6
//!
//! [optics]
//! density = 1.5
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prism_math::Real;
use serde::Deserialize;

/// Top-level configuration. Missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Result formatting.
    pub output: OutputConfig,
    /// Physical defaults.
    pub optics: OpticsConfig,
}

/// How results are printed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Colour result labels with ANSI codes.
    pub color: bool,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            precision: 6,
        }
    }
}

/// Defaults for the optics commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpticsConfig {
    /// Refractive index of the far medium relative to the near one.
    pub density: Real,
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self { density: 1.5 }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("invalid configuration")?;
        if !(config.optics.density > 0.0 && config.optics.density.is_normal()) {
            anyhow::bail!(
                "optics.density must be a positive normal number, got {}",
                config.optics.density
            );
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
