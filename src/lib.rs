pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodySeed, BodySnapshot, Hsl, NVec2, Scene, TrailSegment, TrailSnapshot};
pub use simulation::engine::Simulation;
pub use simulation::error::SimulationError;
pub use simulation::params::Parameters;
pub use simulation::forces::{Force, ForceField, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::collisions::{impact, resolve_collisions};
pub use simulation::scenario::{Scenario, Star};

pub use configuration::config::{ScenarioConfig, ParametersConfig, EngineConfig, SceneConfig, BodyConfig, ConfigError};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_forces, bench_step};
