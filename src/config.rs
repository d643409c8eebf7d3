//! Clusterizer parameters.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the gap clusterizer.
///
/// Field names serialize in camelCase so parameter sets written for the
/// `zSeparation` / `verbose` convention load unchanged:
///
/// ```rust
/// use zvertex::GapConfig;
///
/// let config = GapConfig::from_json(r#"{ "zSeparation": 0.5, "verbose": true }"#).unwrap();
/// assert_eq!(config.z_separation, 0.5);
/// assert!(config.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GapConfig {
    /// Minimum gap between z-ordered neighbours that starts a new cluster.
    pub z_separation: f64,

    /// Emit per-cluster and per-vertex diagnostics. Never changes results.
    pub verbose: bool,
}

impl GapConfig {
    /// Create a config with the given gap threshold and diagnostics off.
    pub fn new(z_separation: f64) -> Self {
        Self {
            z_separation,
            verbose: false,
        }
    }

    /// Set the verbose flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the gap threshold.
    pub fn with_z_separation(mut self, z_separation: f64) -> Self {
        self.z_separation = z_separation;
        self
    }

    /// Check that the gap threshold is a finite positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.z_separation.is_finite() {
            return Err(Error::InvalidParameter {
                name: "z_separation",
                message: "must be finite",
            });
        }
        if self.z_separation <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "z_separation",
                message: "must be positive",
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON parameter set. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}
