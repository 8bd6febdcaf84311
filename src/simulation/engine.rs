//! The simulation engine
//!
//! Owns the live `Scene` and runs the step pipeline:
//! force -> integrate -> collide -> trails.
//! A step always runs to completion before anyone can read the scene.

use crate::simulation::clock::SimulationClock;
use crate::simulation::collisions::resolve_collisions;
use crate::simulation::error::SimulationError;
use crate::simulation::forces::{ForceField, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodySeed, BodySnapshot, Scene, TrailSnapshot};
use crate::simulation::trails::update_trails;

pub struct Simulation {
    scene: Scene,
    parameters: Parameters,
    forces: ForceField,
    clock: SimulationClock,
    paused: bool,
}

impl Simulation {
    /// Validate the seeds and parameters and build the initial scene
    pub fn initialize(seeds: Vec<BodySeed>, parameters: Parameters) -> Result<Self, SimulationError> {
        validate_parameters(&parameters)?;

        for (index, seed) in seeds.iter().enumerate() {
            if !seed.m.is_finite() || seed.m <= 0.0 {
                return Err(SimulationError::InvalidMass { index, mass: seed.m });
            }
            if !(seed.x.iter().all(|c| c.is_finite()) && seed.v.iter().all(|c| c.is_finite())) {
                return Err(SimulationError::NonFiniteState { index });
            }
        }

        let bodies: Vec<Body> = seeds.into_iter().map(Body::from).collect();

        let forces = ForceField::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
            parallel: parameters.parallel,
        });

        log::info!(
            "simulation initialized: {} bodies, G = {}, trail quality = {}, trail length = {}",
            bodies.len(),
            parameters.g,
            parameters.trail_quality,
            parameters.trail_length
        );

        Ok(Self {
            scene: Scene {
                bodies,
                trails: Vec::new(),
            },
            parameters,
            forces,
            clock: SimulationClock::new(),
            paused: false,
        })
    }

    /// Run exactly one step, regardless of the pause flag
    pub fn step(&mut self) {
        self.clock.advance();

        let Simulation {
            scene,
            parameters,
            forces,
            clock,
            ..
        } = self;

        forces.accumulate_forces(&mut scene.bodies);
        euler_integrator(&mut scene.bodies);

        let merges = resolve_collisions(&mut scene.bodies);
        if merges > 0 {
            log::debug!(
                "step {}: {} merges, {} bodies left",
                clock.steps(),
                merges,
                scene.bodies.len()
            );
        }

        if clock.is_sampling_step(parameters.trail_quality) {
            update_trails(
                &scene.bodies,
                &mut scene.trails,
                parameters.trail_quality,
                parameters.trail_length,
            );
        }

        log::trace!(
            "step {} done: {} bodies, {} trail segments",
            clock.steps(),
            scene.bodies.len(),
            scene.trails.len()
        );
    }

    /// One scheduling tick: steps unless paused. Returns whether a step ran
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.step();
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            log::info!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn clock(&self) -> u64 {
        self.clock.steps()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn body_snapshots(&self) -> Vec<BodySnapshot> {
        self.scene
            .bodies
            .iter()
            .map(|b| BodySnapshot {
                position: b.x,
                radius: b.radius(),
                color: b.color,
            })
            .collect()
    }

    pub fn trail_snapshots(&self) -> Vec<TrailSnapshot> {
        self.scene
            .trails
            .iter()
            .map(|t| TrailSnapshot {
                start: t.start,
                end: t.end,
                color: t.color,
            })
            .collect()
    }
}

fn validate_parameters(p: &Parameters) -> Result<(), SimulationError> {
    if p.trail_quality == 0 {
        return Err(SimulationError::InvalidTrailQuality);
    }
    if !p.g.is_finite() {
        return Err(SimulationError::InvalidGravitationalConstant(p.g));
    }
    if !p.min_distance.is_finite() || p.min_distance <= 0.0 {
        return Err(SimulationError::InvalidMinDistance(p.min_distance));
    }
    Ok(())
}
