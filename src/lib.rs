//! Poincaré: Euclidean primitives and geodesics of the Poincaré disk
//!
//! Core library for constructing hyperbolic figures. The Euclidean layer
//! (points, implicit lines, circles and their intersections) carries the
//! hyperbolic layer, where geodesics of the unit disk are either diameters
//! or arcs of circles orthogonal to the unit circle.

pub mod circle;
pub mod curve;
pub mod hyperbolic_line;
pub mod hyperbolic_point;
pub mod line;
pub mod point;

pub use circle::{unit_circle, Circle};
pub use curve::Curve;
pub use hyperbolic_line::HyperbolicLine;
pub use hyperbolic_point::HyperbolicPoint;
pub use line::Line;
pub use point::Point;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Maximum distance from the origin of the chord through two endpoints
/// for their geodesic to be classified as a diameter.
pub const STRAIGHT_LINE_TOLERANCE: f64 = 1e-9;

/// Tolerance on `measured + |angle| = π` when picking the endpoint of a
/// geodesic built by [`HyperbolicLine::line_at_angle`].
pub const ANGLE_MATCH_TOLERANCE: f64 = 1e-4;

/// Geometry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    #[error("Point ({x}, {y}) lies outside the open unit disk")]
    OutsideDisk { x: f64, y: f64 },

    #[error("No geodesic meets the anchor at angle {angle} with length {length}")]
    Unsatisfiable { angle: f64, length: f64 },
}

/// Numeric thresholds used by the hyperbolic constructions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Chord-to-origin distance under which a geodesic is a diameter
    pub straight_line: f64,
    /// Accepted error on the supplementary angle in `line_at_angle`
    pub angle_match: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            straight_line: STRAIGHT_LINE_TOLERANCE,
            angle_match: ANGLE_MATCH_TOLERANCE,
        }
    }
}

/// Convert angle to range [-π, π]
pub fn normalize_angle(theta: f64) -> f64 {
    let mut result = theta % (2.0 * PI);
    if result > PI {
        result -= 2.0 * PI;
    } else if result < -PI {
        result += 2.0 * PI;
    }
    result
}
