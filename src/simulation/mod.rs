pub mod states;
pub mod params;
pub mod error;
pub mod clock;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod trails;
pub mod scenario;
