//! Errors raised when a simulation is built from malformed input.
//!
//! Stepping never fails; everything here is caught at construction time.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Mass must be finite and strictly positive.
    InvalidMass { index: usize, mass: f64 },
    /// Position or velocity contains NaN or infinity.
    NonFiniteState { index: usize },
    /// Trail sampling stride of zero.
    InvalidTrailQuality,
    /// Gravitational constant is NaN or infinite.
    InvalidGravitationalConstant(f64),
    /// Distance clamp must be finite and strictly positive.
    InvalidMinDistance(f64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidMass { index, mass } => {
                write!(f, "Body {} has invalid mass {} (must be finite and > 0)", index, mass)
            }
            SimulationError::NonFiniteState { index } => {
                write!(f, "Body {} has a non-finite position or velocity", index)
            }
            SimulationError::InvalidTrailQuality => write!(f, "Trail quality must be at least 1"),
            SimulationError::InvalidGravitationalConstant(g) => {
                write!(f, "Gravitational constant {} is not finite", g)
            }
            SimulationError::InvalidMinDistance(d) => {
                write!(f, "Minimum distance {} must be finite and > 0", d)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
