//! Lines and circles behind a single intersection interface

use crate::circle::Circle;
use crate::line::Line;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Either a Euclidean line or a Euclidean circle.
///
/// Geodesics of the Poincaré disk are represented by one or the other, so
/// intersection queries take a `Curve` operand and dispatch on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    Line(Line),
    Circle(Circle),
}

impl Curve {
    /// All intersection points with another curve (0, 1 or 2 points).
    pub fn intersection(&self, other: &Curve) -> Vec<Point> {
        match self {
            Curve::Line(line) => line.intersection(other),
            Curve::Circle(circle) => circle.intersection(other),
        }
    }

    pub fn contains(&self, p: &Point, tolerance: f64) -> bool {
        match self {
            Curve::Line(line) => line.contains(p, tolerance),
            Curve::Circle(circle) => circle.contains(p, tolerance),
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Curve::Line(line) => Some(line),
            Curve::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Line(_) => None,
            Curve::Circle(circle) => Some(circle),
        }
    }
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Curve::Line(line)
    }
}

impl From<Circle> for Curve {
    fn from(circle: Circle) -> Self {
        Curve::Circle(circle)
    }
}
