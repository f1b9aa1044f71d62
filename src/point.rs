//! Euclidean plane points
//!
//! `Point` is a plain coordinate pair used both as a position and as a
//! vector. The `*` operator only scales; the dot product has its own name.

use crate::GeometryError;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or vector) in the Euclidean plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Euclidean distance from origin
    pub fn distance_to_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x-axis, in (-π, π]
    pub fn azimuth(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate counter-clockwise by `angle` radians around `anchor`.
    pub fn rotated_point(&self, anchor: &Self, angle: f64) -> Self {
        let offset = Complex64::new(self.x - anchor.x, self.y - anchor.y);
        let rotated = offset * Complex64::from_polar(1.0, angle);
        Self {
            x: rotated.re + anchor.x,
            y: rotated.im + anchor.y,
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(&self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
        }
    }

    /// Divide both coordinates by `k`; fails when `k` is zero.
    pub fn divide(&self, k: f64) -> Result<Self, GeometryError> {
        if k == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self {
            x: self.x / k,
            y: self.y / k,
        })
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        self.scale(k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p.scale(self)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
