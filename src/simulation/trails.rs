//! Trail sampling and expiry
//!
//! Both run only on sampling steps (`clock % trail_quality == 0`): existing
//! segments age by one tick first, then every live body leaves a new segment.
//! A segment therefore disappears on the `trail_length`-th sampling tick after
//! the one that created it.

use super::states::{Body, TrailSegment};

/// Decrement every lifetime and drop the segments that ran out,
/// returns how many were dropped
pub fn age_trails(trails: &mut Vec<TrailSegment>) -> usize {
    let before = trails.len();
    trails.retain_mut(|t| {
        t.remaining_lifetime = t.remaining_lifetime.saturating_sub(1);
        t.remaining_lifetime > 0
    });
    before - trails.len()
}

/// Append one segment per body, spanning the distance covered since the
/// previous sampling step (extrapolated from the current velocity)
pub fn sample_trails(bodies: &[Body], trails: &mut Vec<TrailSegment>, trail_quality: u64, trail_length: u32) {
    let stride = trail_quality as f64;
    trails.extend(bodies.iter().map(|b| TrailSegment {
        start: b.x - b.v * stride,
        end: b.x,
        color: b.color,
        remaining_lifetime: trail_length,
    }));
}

/// One sampling-step update: age, then sample
pub fn update_trails(bodies: &[Body], trails: &mut Vec<TrailSegment>, trail_quality: u64, trail_length: u32) {
    let expired = age_trails(trails);
    if expired > 0 {
        log::trace!("{} trail segments expired", expired);
    }
    sample_trails(bodies, trails, trail_quality, trail_length);
}
