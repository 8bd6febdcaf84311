//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the `Simulation` seeded with random and explicit bodies
//! - the static starfield drawn behind it
//! - canvas size and engine settings for the viewer
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and drawing systems

use std::f64::consts::PI;

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, EngineConfig, ScenarioConfig, SceneConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimulationError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodySeed, Hsl, NVec2};

/// A background point, never touched by the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: NVec2,
    pub color: Hsl,
}

#[derive(Resource)]
pub struct Scenario {
    pub width: f64,
    pub height: f64,
    pub engine: EngineConfig,
    pub stars: Vec<Star>,
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        let mut rng = match cfg.scene.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stars = generate_stars(&cfg.scene, &mut rng);

        // Random planets first, then the hand-placed bodies
        let mut seeds = generate_planets(&cfg.scene, &mut rng);
        seeds.extend(cfg.bodies.iter().map(|bc: &BodyConfig| BodySeed {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            color: bc.color.unwrap_or(Hsl::new(0.0, 0.0, 1.0)),
        }));

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            trail_quality: p_cfg.trail_quality,
            trail_length: p_cfg.trail_length,
            min_distance: p_cfg.min_distance,
            parallel: cfg.engine.parallel,
        };

        let mut simulation = Simulation::initialize(seeds, parameters)?;
        simulation.set_paused(cfg.engine.start_paused);

        log::info!(
            "scenario built: {} x {} canvas, {} stars, seed {:?}",
            cfg.scene.width,
            cfg.scene.height,
            stars.len(),
            cfg.scene.seed
        );

        Ok(Self {
            width: cfg.scene.width,
            height: cfg.scene.height,
            engine: cfg.engine,
            stars,
            simulation,
        })
    }
}

/// Uniform points on whole pixels, bluish grey of random lightness
pub fn generate_stars(scene: &SceneConfig, rng: &mut impl Rng) -> Vec<Star> {
    (0..scene.stars)
        .map(|_| Star {
            x: NVec2::new(
                (rng.gen::<f64>() * scene.width).floor(),
                (rng.gen::<f64>() * scene.height).floor(),
            ),
            color: Hsl::new(250.0, 0.5, rng.gen::<f32>()),
        })
        .collect()
}

/// Uniform positions on the canvas, fixed speed in a random direction,
/// uniform mass and a random pastel hue
pub fn generate_planets(scene: &SceneConfig, rng: &mut impl Rng) -> Vec<BodySeed> {
    (0..scene.planets)
        .map(|_| {
            let angle = rng.gen::<f64>() * 2.0 * PI;
            let x = NVec2::new(rng.gen::<f64>() * scene.width, rng.gen::<f64>() * scene.height);
            BodySeed {
                x,
                v: NVec2::new(angle.sin(), angle.cos()) * scene.speed,
                m: rng.gen_range(scene.mass_min..scene.mass_max),
                color: Hsl::new(rng.gen_range(0.0..360.0), 0.6, 0.7),
            }
        })
        .collect()
}
