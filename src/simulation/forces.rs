//! Force contributors for the simulation
//!
//! Defines the [`Force`] trait, the [`ForceField`] that sums every term into
//! the bodies' force accumulators, and direct Newtonian gravity

use rayon::prelude::*;

use crate::simulation::states::{Body, NVec2};

/// Trait for force sources
/// Implementations add their contribution into `out[i]` for each body and
/// must only read `bodies`
pub trait Force {
    fn force(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Collection of force terms
/// Each term implements [`Force`]; their contributions are summed per body
/// into a scratch buffer and then added to the body's accumulator
pub struct ForceField {
    terms: Vec<Box<dyn Force + Send + Sync>>,
    scratch: Vec<NVec2>,
}

impl ForceField {
    /// Create an empty force field
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total force on every body and add it to `b.f`
    pub fn accumulate_forces(&mut self, bodies: &mut [Body]) {
        let n = bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Zero buffer
        self.scratch.clear();
        self.scratch.resize(n, NVec2::zeros());

        // Read-only pass over the bodies, each term writes into the buffer
        for term in &self.terms {
            term.force(&*bodies, &mut self.scratch);
        }

        for (b, f) in bodies.iter_mut().zip(self.scratch.iter()) {
            b.f += *f;
        }
    }
}

impl Default for ForceField {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct O(n^2) Newtonian gravity
/// The pair distance is clamped from below by `min_distance`; exactly
/// coincident bodies have no defined direction and exert nothing on each other
pub struct NewtonianGravity {
    pub g: f64,            // gravitational constant
    pub min_distance: f64, // distance clamp
    pub parallel: bool,    // split the outer loop across rayon workers
}

impl NewtonianGravity {
    /// Sum of the pulls of every other body on body `i`
    fn pull_on(&self, i: usize, bodies: &[Body]) -> NVec2 {
        let bi = &bodies[i];
        let mut total = NVec2::zeros();

        for (j, bj) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }

            // r points from i to j, i is pulled along +r
            let r = bj.x - bi.x;
            let d = r.norm();
            if d == 0.0 {
                continue;
            }

            let dc = d.max(self.min_distance);
            let magnitude = self.g * bi.mass() * bj.mass() / (dc * dc);

            total += (r / d) * magnitude;
        }

        total
    }
}

impl Force for NewtonianGravity {
    fn force(&self, bodies: &[Body], out: &mut [NVec2]) {
        if bodies.is_empty() {
            return;
        }

        // Every entry only depends on the shared positions, so the outer
        // loop splits cleanly. Same summation order either way.
        if self.parallel {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(i, f)| *f += self.pull_on(i, bodies));
        } else {
            for (i, f) in out.iter_mut().enumerate() {
                *f += self.pull_on(i, bodies);
            }
        }
    }
}
