//! Run configuration loaded from TOML.
//!
//! Every field has a default, so a file only needs the keys it changes:
//!
//! ```toml
//! bodies = 500
//! seed = 42
//! distribution = "sphere"   # or "cube"
//! max_mass = 100.0
//! gravity = 6.674e-11
//! time_scale = 1000.0       # simulated seconds per wall-clock second
//! merge = true
//! coincident = "skip"       # or "propagate"
//! frame_rate = 60.0
//! frames = 600
//! report_every = 60
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::integrator::Coincident;
use crate::prelude::*;
use crate::scatter::Distribution;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Bodies created on (re)initialization.
    pub bodies: usize,
    /// Fixed seed for the initial scatter; random when absent.
    pub seed: Option<u64>,
    pub distribution: Distribution,
    /// Upper mass bound for the sphere distribution.
    pub max_mass: Scalar,
    pub gravity: Scalar,
    pub time_scale: Scalar,
    /// Run the coalescing pass before every step.
    pub merge: bool,
    pub coincident: Coincident,
    pub frame_rate: Scalar,
    /// Frames to run before exiting; 0 runs forever.
    pub frames: u64,
    /// Log a summary every this many frames; 0 disables it.
    pub report_every: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bodies: 1000,
            seed: None,
            distribution: Distribution::Cube,
            max_mass: 100.0,
            gravity: G,
            time_scale: 1000.0,
            merge: true,
            coincident: Coincident::Propagate,
            frame_rate: 60.0,
            frames: 600,
            report_every: 60,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Config::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_mass.is_finite() && self.max_mass > 0.0) {
            return Err(Error::Invalid(format!("max_mass must be positive, got {}", self.max_mass)));
        }
        if !self.gravity.is_finite() {
            return Err(Error::Invalid(format!("gravity must be finite, got {}", self.gravity)));
        }
        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            return Err(Error::Invalid(format!("time_scale must be non-negative, got {}", self.time_scale)));
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(Error::Invalid(format!("frame_rate must be positive, got {}", self.frame_rate)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::parse(
            r#"
            bodies = 12
            seed = 3
            distribution = "sphere"
            coincident = "skip"
            merge = false
            "#,
        )
        .unwrap();

        assert_eq!(config.bodies, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.distribution, Distribution::Sphere);
        assert_eq!(config.coincident, Coincident::Skip);
        assert!(!config.merge);
        assert_eq!(config.time_scale, 1000.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(Config::parse("max_mass = 0.0"), Err(Error::Invalid(_))));
        assert!(matches!(Config::parse("frame_rate = -1.0"), Err(Error::Invalid(_))));
        assert!(matches!(Config::parse("bodies = \"many\""), Err(Error::Parse(_))));
    }
}
