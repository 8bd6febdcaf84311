use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{Force, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodySeed, Hsl, NVec2};

/// Deterministic spread of `n` light bodies, no rand needed
fn make_seeds(n: usize) -> Vec<BodySeed> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            BodySeed {
                x: NVec2::new((i_f * 0.37).sin() * 900.0 + 930.0, (i_f * 0.13).cos() * 450.0 + 465.0),
                v: NVec2::zeros(),
                m: 1.0,
                color: Hsl::new(0.0, 0.0, 1.0),
            }
        })
        .collect()
}

/// Time the direct force pass, sequential against rayon
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let params = Parameters::default();

    println!("N,sequential_ms,parallel_ms");

    for n in ns {
        let bodies: Vec<Body> = make_seeds(n).into_iter().map(Body::from).collect();
        let mut out = vec![NVec2::zeros(); n];

        let sequential = NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
            parallel: false,
        };
        let parallel = NewtonianGravity {
            parallel: true,
            ..sequential
        };

        // Warm up
        sequential.force(&bodies, &mut out);
        parallel.force(&bodies, &mut out);

        let t0 = Instant::now();
        sequential.force(&bodies, &mut out);
        let ms_seq = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        parallel.force(&bodies, &mut out);
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_par);
    }
}

/// Time full pipeline steps (force, integrate, collide, trails)
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 20;

    println!("N,step_ms,bodies_left");

    for n in ns {
        let params = Parameters {
            trail_quality: 1, // worst case, trails every step
            ..Parameters::default()
        };

        let Ok(mut sim) = Simulation::initialize(make_seeds(n), params) else {
            log::error!("benchmark scene with {} bodies rejected", n);
            continue;
        };

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{}", n, ms, sim.scene().bodies.len());
    }
}
