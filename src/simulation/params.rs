//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and the distance clamp `min_distance`,
//! - trail sampling stride and segment lifetime,
//! - whether the force pass runs in parallel

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,             // gravitational constant
    pub trail_quality: u64, // sample every n-th step, >= 1
    pub trail_length: u32,  // lifetime of a new segment, in sampling ticks
    pub min_distance: f64,  // lower clamp on pair distance
    pub parallel: bool,     // rayon force pass
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 0.005,
            trail_quality: 4,
            trail_length: 100,
            min_distance: 1.0e-3,
            parallel: false,
        }
    }
}
