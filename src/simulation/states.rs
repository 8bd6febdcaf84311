//! Core state types for the simulation.
//!
//! - `Body`: one massive particle (position, velocity, force accumulator, mass)
//! - `TrailSegment`: a fading line left behind by a body
//! - `Scene`: the live collection of bodies and trail segments
//!
//! Positions are world coordinates; one step is one unit of time.

use std::f64::consts::PI;

use nalgebra::Vector2;
use serde::Deserialize;

pub type NVec2 = Vector2<f64>;

/// Opaque color token. The simulation copies it around but never reads it
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,        // degrees, [0, 360)
    pub saturation: f32, // [0, 1]
    pub lightness: f32,  // [0, 1]
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }
}

/// Radius of a unit-density sphere of the given mass
pub fn radius_for_mass(m: f64) -> f64 {
    (m * 3.0 / (4.0 * PI)).cbrt()
}

/// Initial state of a body, as handed over by scene generation
#[derive(Debug, Clone)]
pub struct BodySeed {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64,   // mass
    pub color: Hsl,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // force accumulator
    m: f64,       // mass
    radius: f64,  // derived from mass
    pub color: Hsl,
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, color: Hsl) -> Self {
        Self {
            x,
            v,
            f: NVec2::zeros(),
            m,
            radius: radius_for_mass(m),
            color,
        }
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Only way to change the mass, keeps the radius in sync
    pub fn set_mass(&mut self, m: f64) {
        self.m = m;
        self.radius = radius_for_mass(m);
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }

    /// Strict overlap: touching bodies do not collide
    pub fn collides_with(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }
}

impl From<BodySeed> for Body {
    fn from(seed: BodySeed) -> Self {
        Body::new(seed.x, seed.v, seed.m, seed.color)
    }
}

/// A short line showing where a body went during one sampling interval.
/// Detached from its body once created
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSegment {
    pub start: NVec2,
    pub end: NVec2,
    pub color: Hsl,
    pub remaining_lifetime: u32, // sampling ticks left
}

/// What the renderer needs to draw a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub position: NVec2,
    pub radius: f64,
    pub color: Hsl,
}

/// What the renderer needs to draw a trail segment
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSnapshot {
    pub start: NVec2,
    pub end: NVec2,
    pub color: Hsl,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub bodies: Vec<Body>,         // live bodies, stable order
    pub trails: Vec<TrailSegment>, // oldest first
}

impl Scene {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
