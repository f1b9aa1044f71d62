//! Euclidean circles

use crate::curve::Curve;
use crate::line::Line;
use crate::point::Point;
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// The unit circle, boundary of the Poincaré disk
pub fn unit_circle() -> Circle {
    Circle::new(Point::origin(), 1.0)
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle through three points (circumcircle).
    /// Returns an error if the points are collinear.
    pub fn from_three_points(p1: &Point, p2: &Point, p3: &Point) -> Result<Self, GeometryError> {
        let cycles = [(p1, p2, p3), (p2, p3, p1), (p3, p1, p2)];

        let denominator = 2.0 * cycles.iter().map(|(a, b, c)| a.x * (b.y - c.y)).sum::<f64>();
        if denominator == 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "points {}, {} and {} are collinear",
                p1, p2, p3
            )));
        }

        let center_x = cycles
            .iter()
            .map(|(a, b, c)| (a.x * a.x + a.y * a.y) * (b.y - c.y))
            .sum::<f64>()
            / denominator;
        let center_y = cycles
            .iter()
            .map(|(a, b, c)| (a.x * a.x + a.y * a.y) * (c.x - b.x))
            .sum::<f64>()
            / denominator;

        let center = Point::new(center_x, center_y);
        Ok(Self {
            center,
            radius: center.distance(p1),
        })
    }

    /// Whether `p` lies on the circle within `tolerance`.
    pub fn contains(&self, p: &Point, tolerance: f64) -> bool {
        (self.center.distance(p) - self.radius).abs() < tolerance
    }

    /// Intersection with a line or a circle.
    pub fn intersection(&self, other: &Curve) -> Vec<Point> {
        match other {
            Curve::Line(line) => line.intersection_with_circle(self),
            Curve::Circle(circle) => self.intersection_with_circle(circle),
        }
    }

    /// Intersection points of two circles, via their radical line.
    /// Returns no points when the circles are apart, nested or concentric.
    pub fn intersection_with_circle(&self, other: &Circle) -> Vec<Point> {
        let (x0, y0, r0) = (self.center.x, self.center.y, self.radius);
        let (x1, y1, r1) = (other.center.x, other.center.y, other.radius);

        let d_sq = (x0 - x1).powi(2) + (y0 - y1).powi(2);
        if d_sq == 0.0 {
            return Vec::new();
        }

        let product = ((r1 + r0).powi(2) - d_sq) * (d_sq - (r1 - r0).powi(2));
        if product < 0.0 {
            return Vec::new();
        }

        // Foot of the radical line on the line of centers
        let base_x = 0.5 * (x0 + x1) + 0.5 * (x0 - x1) * (r1 * r1 - r0 * r0) / d_sq;
        let base_y = 0.5 * (y0 + y1) + 0.5 * (y0 - y1) * (r1 * r1 - r0 * r0) / d_sq;

        let root = product.sqrt();
        let offset_x = 0.5 * (y1 - y0) / d_sq * root;
        let offset_y = 0.5 * (x1 - x0) / d_sq * root;

        vec![
            Point::new(base_x + offset_x, base_y - offset_y),
            Point::new(base_x - offset_x, base_y + offset_y),
        ]
    }

    /// Angle between two circles at their first intersection point, in
    /// [0, π]. Returns None if the circles do not cross.
    pub fn angle_between(&self, other: &Circle) -> Option<f64> {
        let crossing = *self.intersection_with_circle(other).first()?;
        let to_self = Line::from_points(&crossing, &self.center).ok()?;
        let to_other = Line::from_points(&crossing, &other.center).ok()?;
        Some(to_self.angle_between(&to_other))
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "circle(center={}, r={:.4})", self.center, self.radius)
    }
}
