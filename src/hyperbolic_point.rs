//! Points of the Poincaré disk
//!
//! A `HyperbolicPoint` wraps a Euclidean [`Point`]. Nothing stops it from
//! holding coordinates outside the unit disk; hyperbolic operations check
//! validity where they need it (see [`HyperbolicLine::new`]).

use crate::circle::Circle;
use crate::hyperbolic_line::HyperbolicLine;
use crate::line::Line;
use crate::point::Point;
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// A point in the Poincaré disk model of hyperbolic space.
/// The disk is the unit disk {z ∈ ℂ : |z| < 1}.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HyperbolicPoint {
    pub point: Point,
}

impl HyperbolicPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
        }
    }

    /// Create a point from polar coordinates (r, θ).
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Origin of the Poincaré disk
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Polar angle θ
    pub fn azimuth(&self) -> f64 {
        self.point.azimuth()
    }

    /// Euclidean distance from origin (|z|)
    pub fn euclidean_distance_to_origin(&self) -> f64 {
        self.point.distance_to_origin()
    }

    /// Check if the point lies strictly inside the unit disk
    pub fn is_in_unit_disk(&self) -> bool {
        self.euclidean_distance_to_origin() < 1.0
    }

    /// Inversion in the unit circle: z / |z|².
    /// Undefined at the origin.
    pub fn inverse(&self) -> Result<Self, GeometryError> {
        let d_sq = self.point.dot(&self.point);
        Ok(self.point.divide(d_sq)?.into())
    }

    /// Hyperbolic distance to the origin: 2·atanh(|z|).
    /// Infinite for points on or outside the unit circle.
    pub fn distance_to_origin(&self) -> f64 {
        let r = self.euclidean_distance_to_origin();
        if r >= 1.0 {
            return f64::INFINITY;
        }
        2.0 * r.atanh()
    }

    /// Hyperbolic distance between two points of the disk, measured as the
    /// length of the geodesic segment joining them.
    pub fn distance(&self, other: &Self) -> Result<f64, GeometryError> {
        if self.point == other.point {
            return Ok(0.0);
        }
        Ok(HyperbolicLine::new(*self, *other)?.length())
    }

    /// Hyperbolic distance from the closed form
    /// d_H(z1, z2) = arcosh(1 + 2|z1 - z2|² / ((1 - |z1|²)(1 - |z2|²)))
    pub fn closed_form_distance(&self, other: &Self) -> f64 {
        let diff = self.point - other.point;
        let diff_sq = diff.dot(&diff);

        let norm1_sq = self.point.dot(&self.point);
        let norm2_sq = other.point.dot(&other.point);

        let denom = (1.0 - norm1_sq) * (1.0 - norm2_sq);
        if denom <= 0.0 {
            return f64::INFINITY;
        }

        let arg = 1.0 + 2.0 * diff_sq / denom;
        if arg < 1.0 {
            0.0
        } else {
            arg.acosh()
        }
    }

    /// Polar line: locus of the centers of all circles orthogonal to the
    /// unit circle that pass through this point,
    /// `2x·X + 2y·Y = 1 + x² + y²`. Degenerate at the origin.
    pub fn polar_line(&self) -> Result<Line, GeometryError> {
        let (x, y) = (self.x(), self.y());
        Line::from_coefficients(2.0 * x, 2.0 * y, 1.0 + x * x + y * y)
    }

    /// Angle at `p2` formed by `p1`, `p2` and `p3`, in [0, π], from the
    /// hyperbolic law of cosines.
    pub fn angle_between_three_points(p1: &Self, p2: &Self, p3: &Self) -> Result<f64, GeometryError> {
        let a = p1.distance(p2)?;
        let b = p2.distance(p3)?;
        let c = p1.distance(p3)?;

        let denom = a.sinh() * b.sinh();
        if denom == 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "angle at {} needs two distinct neighbours, got {} and {}",
                p2, p1, p3
            )));
        }

        // Rounding on a triangle whose vertices share a geodesic can leave
        // [-1, 1]: past 1 the neighbours lie on the same side of p2, past -1
        // on opposite sides
        let cos_angle = (a.cosh() * b.cosh() - c.cosh()) / denom;
        Ok(cos_angle.clamp(-1.0, 1.0).acos())
    }

    /// Euclidean circle holding all points at hyperbolic distance `radius`
    /// from this point.
    pub fn hyperbolic_circle(&self, radius: f64) -> Circle {
        let r = self.euclidean_distance_to_origin();
        if r == 0.0 {
            return Circle::new(Point::origin(), (radius / 2.0).tanh());
        }

        // Signed Euclidean offsets of the nearest and farthest points of the
        // circle along the ray from the origin through this point
        let center_distance = 2.0 * r.atanh();
        let near = (0.5 * (center_distance - radius)).tanh();
        let far = (0.5 * (center_distance + radius)).tanh();

        let near_point = self.point * (near / r);
        let far_point = self.point * (far / r);

        Circle::new(
            near_point.midpoint(&far_point),
            near_point.distance(&far_point) / 2.0,
        )
    }
}

impl From<Point> for HyperbolicPoint {
    fn from(point: Point) -> Self {
        Self { point }
    }
}

impl From<HyperbolicPoint> for Point {
    fn from(p: HyperbolicPoint) -> Self {
        p.point
    }
}

impl std::fmt::Display for HyperbolicPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_unit_disk_membership() {
        assert!(HyperbolicPoint::new(0.0, 0.0).is_in_unit_disk());
        assert!(HyperbolicPoint::new(0.5, 0.5).is_in_unit_disk());
        assert!(!HyperbolicPoint::new(1.0, 0.0).is_in_unit_disk()); // On boundary
        assert!(!HyperbolicPoint::new(0.8, 0.8).is_in_unit_disk()); // Outside
    }

    #[test]
    fn test_distance_to_origin() {
        let p = HyperbolicPoint::new(0.5, 0.0);
        // d_H(0, r) = 2 * arctanh(r) = ln((1+r)/(1-r))
        let expected: f64 = ((1.0 + 0.5) / (1.0 - 0.5_f64)).ln();
        assert!((p.distance_to_origin() - expected).abs() < 1e-12);
        assert!((HyperbolicPoint::origin().distance(&p).unwrap() - expected).abs() < 1e-10);
        assert_eq!(HyperbolicPoint::new(1.0, 0.0).distance_to_origin(), f64::INFINITY);
    }

    #[test]
    fn test_inverse() {
        let p = HyperbolicPoint::new(0.3, 0.4);
        let inv = p.inverse().unwrap();
        assert!((inv.x() - 1.2).abs() < 1e-12);
        assert!((inv.y() - 1.6).abs() < 1e-12);
        assert!((inv.euclidean_distance_to_origin() * p.euclidean_distance_to_origin() - 1.0).abs() < 1e-12);
        assert_eq!(HyperbolicPoint::origin().inverse(), Err(GeometryError::DivisionByZero));
    }

    #[test]
    fn test_distance_matches_closed_form() {
        let p1 = HyperbolicPoint::new(0.1, -0.5);
        let p2 = HyperbolicPoint::new(0.2, 0.6);
        let p3 = HyperbolicPoint::new(0.4, 0.8);

        assert!((p1.distance(&p2).unwrap() - 2.55828).abs() < 1e-5);
        assert!((p1.distance(&p3).unwrap() - 3.91378).abs() < 1e-5);
        assert!((p1.distance(&p2).unwrap() - p1.closed_form_distance(&p2)).abs() < 1e-9);
        assert!((p1.distance(&p3).unwrap() - p1.closed_form_distance(&p3)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_self() {
        let p = HyperbolicPoint::new(0.3, 0.4);
        assert_eq!(p.distance(&p).unwrap(), 0.0);
        assert!(p.closed_form_distance(&p) < 1e-12);
    }

    #[test]
    fn test_distance_outside_disk() {
        let inside = HyperbolicPoint::new(0.3, 0.4);
        let outside = HyperbolicPoint::new(0.9, 0.9);
        assert!(matches!(
            inside.distance(&outside),
            Err(GeometryError::OutsideDisk { .. })
        ));
    }

    #[test]
    fn test_polar_line() {
        let p = HyperbolicPoint::new(0.5, 0.0);
        let polar = p.polar_line().unwrap();
        assert_eq!(polar, Line::new(1.0, 0.0, 1.25));
        assert!(HyperbolicPoint::origin().polar_line().is_err());
    }

    #[test]
    fn test_angle_between_three_points_at_origin() {
        // The disk is conformal, and geodesics through the origin are
        // diameters, so the angle at the origin is the Euclidean one.
        let p1 = HyperbolicPoint::new(0.5, 0.0);
        let p3 = HyperbolicPoint::from_polar(0.3, PI / 3.0);
        let angle =
            HyperbolicPoint::angle_between_three_points(&p1, &HyperbolicPoint::origin(), &p3).unwrap();
        assert!((angle - PI / 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_angle_between_collinear_points() {
        let p1 = HyperbolicPoint::new(-0.5, 0.0);
        let p2 = HyperbolicPoint::new(0.0, 0.0);
        let p3 = HyperbolicPoint::new(0.5, 0.0);
        let straight = HyperbolicPoint::angle_between_three_points(&p1, &p2, &p3).unwrap();
        assert!((straight - PI).abs() < 1e-6);

        let folded = HyperbolicPoint::angle_between_three_points(&p1, &p3, &p2).unwrap();
        assert!(folded.abs() < 1e-6);
    }

    #[test]
    fn test_angle_with_near_neighbour_between() {
        // p1 sits between p2 and p3, so p1-p3 is longer than p1-p2 while
        // both neighbours leave p2 in the same direction
        let p1 = HyperbolicPoint::new(0.2, 0.0);
        let p3 = HyperbolicPoint::new(0.9, 0.0);
        let angle = HyperbolicPoint::angle_between_three_points(&p1, &HyperbolicPoint::origin(), &p3).unwrap();
        assert!(angle.abs() < 1e-6);

        let off_axis = HyperbolicPoint::angle_between_three_points(
            &HyperbolicPoint::new(0.35, 0.0),
            &HyperbolicPoint::new(0.3, 0.0),
            &HyperbolicPoint::new(0.8, 0.0),
        )
        .unwrap();
        assert!(off_axis.abs() < 1e-6);
    }

    #[test]
    fn test_angle_between_coincident_points() {
        let p = HyperbolicPoint::new(0.2, 0.1);
        let q = HyperbolicPoint::new(-0.2, 0.4);
        assert!(matches!(
            HyperbolicPoint::angle_between_three_points(&p, &p, &q),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn test_hyperbolic_circle_at_origin() {
        let circle = HyperbolicPoint::origin().hyperbolic_circle(1.0);
        assert_eq!(circle.center, Point::origin());
        assert!((circle.radius - 0.5_f64.tanh()).abs() < 1e-15);
    }

    #[test]
    fn test_hyperbolic_circle_points_at_radius() {
        let center = HyperbolicPoint::new(0.3, -0.4);
        let circle = center.hyperbolic_circle(0.8);
        for k in 0..12 {
            let theta = k as f64 * PI / 6.0;
            let on_circle = HyperbolicPoint::from(Point::new(
                circle.center.x + circle.radius * theta.cos(),
                circle.center.y + circle.radius * theta.sin(),
            ));
            assert!((center.closed_form_distance(&on_circle) - 0.8).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hyperbolic_circle_around_center_crossing_origin() {
        // Radius larger than the distance to the origin: the near point
        // ends up on the other side of the origin
        let center = HyperbolicPoint::new(0.1, 0.0);
        let circle = center.hyperbolic_circle(1.5);
        let near = HyperbolicPoint::new(circle.center.x - circle.radius, 0.0);
        assert!(near.x() < 0.0);
        assert!((center.closed_form_distance(&near) - 1.5).abs() < 1e-9);
    }
}
