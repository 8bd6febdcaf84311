//! Collision detection and inelastic merging
//!
//! Overlapping bodies merge into one that keeps the total mass, the total
//! momentum and the barycenter of the pair.
//!
//! Scan order:
//! - bodies are visited in index order as the absorbed candidate `i`
//! - the partner `j` is the lowest-index live body overlapping `i`
//! - `i` is merged into `j` and flagged dead; indices do not shift while
//!   scanning, the live list is rebuilt once at the end
//! - a body that survived a merge this step is settled: it can absorb more
//!   bodies but is not scanned as a candidate again until the next step

use super::states::Body;

/// Merge `absorbed` into `survivor`
///
/// Position and velocity become the mass-weighted averages of the pair, the
/// mass becomes the sum (radius follows). The survivor keeps its color unless
/// the absorbed body was strictly heavier.
pub fn impact(absorbed: &Body, survivor: &mut Body) {
    let m_a = absorbed.mass();
    let m_s = survivor.mass();
    let total = m_a + m_s;

    survivor.x = (absorbed.x * m_a + survivor.x * m_s) / total;
    survivor.v = (absorbed.v * m_a + survivor.v * m_s) / total;

    if m_a > m_s {
        survivor.color = absorbed.color;
    }

    survivor.set_mass(total);
}

/// Resolve every overlap in `bodies`, returns the number of merges
pub fn resolve_collisions(bodies: &mut Vec<Body>) -> usize {
    let n = bodies.len();
    if n < 2 {
        return 0;
    }

    let mut alive = vec![true; n];
    let mut settled = vec![false; n];
    let mut merges = 0;

    for i in 0..n {
        if !alive[i] || settled[i] {
            continue;
        }

        let partner = (0..n).find(|&j| j != i && alive[j] && bodies[i].collides_with(&bodies[j]));

        if let Some(j) = partner {
            let absorbed = bodies[i].clone();
            impact(&absorbed, &mut bodies[j]);
            alive[i] = false;
            settled[j] = true;
            merges += 1;

            log::debug!(
                "body {} (m = {:.2}) merged into body {}, now m = {:.2}",
                i,
                absorbed.mass(),
                j,
                bodies[j].mass()
            );
        }
    }

    if merges > 0 {
        // Keep the survivors in their original order
        let kept: Vec<Body> = bodies
            .drain(..)
            .zip(alive)
            .filter_map(|(b, keep)| keep.then_some(b))
            .collect();
        *bodies = kept;
    }

    merges
}
