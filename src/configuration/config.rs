//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and trail settings
//! - [`EngineConfig`]     – step cadence and force pass options
//! - [`SceneConfig`]      – random scene generation (canvas, stars, planets)
//! - [`BodyConfig`]       – explicitly placed bodies, added after the random ones
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every section is optional and falls back to the defaults below.
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 0.005                # gravitational constant
//!   trail_quality: 4        # sample trails every 4th step
//!   trail_length: 100       # segment lifetime in sampling ticks
//!   min_distance: 1.0e-3    # clamp for the pair distance
//!
//! engine:
//!   step_interval_ms: 10    # wall-clock time between steps
//!   parallel: false         # rayon force pass
//!   start_paused: false
//!
//! scene:
//!   width: 1860.0
//!   height: 930.0
//!   stars: 1000
//!   planets: 200
//!   speed: 0.2              # initial speed of every random planet
//!   mass_min: 20.0
//!   mass_max: 1000.0
//!   seed: 42                # omit for a different scene every run
//!
//! bodies:
//!   - x: [ 930.0, 465.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 5000.0
//!     color: { hue: 50.0, saturation: 0.9, lightness: 0.6 }
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::states::Hsl;

/// Physical constants and trail settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,             // gravitational constant
    pub trail_quality: u64, // sampling stride, >= 1
    pub trail_length: u32,  // segment lifetime in sampling ticks
    pub min_distance: f64,  // lower clamp on pair distance
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: 0.005,
            trail_quality: 4,
            trail_length: 100,
            min_distance: 1.0e-3,
        }
    }
}

/// How the engine is driven
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub step_interval_ms: u64, // wall-clock cadence of the scheduler
    pub parallel: bool,        // split the force pass across threads
    pub start_paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 10,
            parallel: false,
            start_paused: false,
        }
    }
}

/// Random scene generation
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f64,        // canvas width in world units (pixels)
    pub height: f64,       // canvas height
    pub stars: usize,      // background stars, render only
    pub planets: usize,    // random bodies
    pub speed: f64,        // initial speed of random bodies
    pub mass_min: f64,     // random mass lower bound (inclusive)
    pub mass_max: f64,     // random mass upper bound (exclusive)
    pub seed: Option<u64>, // fixed seed for a reproducible scene
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1860.0,
            height: 930.0,
            stars: 1000,
            planets: 200,
            speed: 0.2,
            mass_min: 20.0,
            mass_max: 1000.0,
            seed: None,
        }
    }
}

/// An explicitly placed body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2],        // initial position
    pub v: [f64; 2],        // initial velocity
    pub m: f64,             // mass
    pub color: Option<Hsl>, // white when omitted
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub engine: EngineConfig,
    pub scene: SceneConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks what scene generation relies on. Body masses and physical
    /// parameters are checked again when the simulation is initialized
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scene;
        if !(s.width > 0.0 && s.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scene size must be positive, got {} x {}",
                s.width, s.height
            )));
        }
        if !(s.mass_min > 0.0 && s.mass_min < s.mass_max) {
            return Err(ConfigError::Invalid(format!(
                "mass range must satisfy 0 < mass_min < mass_max, got [{}, {})",
                s.mass_min, s.mass_max
            )));
        }
        if !s.speed.is_finite() {
            return Err(ConfigError::Invalid(format!("speed {} is not finite", s.speed)));
        }
        if self.engine.step_interval_ms == 0 {
            return Err(ConfigError::Invalid("step_interval_ms must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Errors that can occur while loading a scenario file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file.
    Io(std::io::Error),
    /// The file is not valid scenario YAML.
    Yaml(serde_yaml::Error),
    /// Well-formed but unusable values.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read scenario file: {}", e),
            ConfigError::Yaml(e) => write!(f, "Failed to parse scenario: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}
