//! Fixed unit-step time integrator
//!
//! Semi-implicit Euler: the velocity is kicked by the accumulated force first,
//! then the position drifts with the new velocity. First order, no energy
//! correction.

use super::states::{Body, NVec2};

/// Advance every body by one unit step and clear its force accumulator
pub fn euler_integrator(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        // Kick: v_n+1 = v_n + F / m
        b.v += b.f / b.mass();

        // Drift: x_n+1 = x_n + v_n+1
        b.x += b.v;

        b.f = NVec2::zeros();
    }
}
