//! Euclidean lines in implicit form `a·x + b·y = c`

use crate::circle::Circle;
use crate::curve::Curve;
use crate::point::Point;
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Line `a·x + b·y = c`, with `(a, b) ≠ (0, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Build a line from its coefficients without checking them.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Build a line from its coefficients.
    /// Returns an error if `a` and `b` are both zero.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "line {}x + {}y = {} has no normal direction",
                a, b, c
            )));
        }
        Ok(Self { a, b, c })
    }

    /// Line through two distinct points.
    pub fn from_points(p1: &Point, p2: &Point) -> Result<Self, GeometryError> {
        if p1 == p2 {
            return Err(GeometryError::Degenerate(format!(
                "cannot draw a line through coincident points {}",
                p1
            )));
        }
        Ok(Self::through(p1, p2))
    }

    fn through(p1: &Point, p2: &Point) -> Self {
        let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);
        Self {
            a: y2 - y1,
            b: x1 - x2,
            c: x1 * (y2 - y1) - y1 * (x2 - x1),
        }
    }

    /// Whether `p` satisfies the line equation within `tolerance`
    /// (measured as a Euclidean distance).
    pub fn contains(&self, p: &Point, tolerance: f64) -> bool {
        self.distance_to_point(p) < tolerance
    }

    /// Intersection with a line or a circle.
    pub fn intersection(&self, other: &Curve) -> Vec<Point> {
        match other {
            Curve::Line(line) => self.intersection_with_line(line).into_iter().collect(),
            Curve::Circle(circle) => self.intersection_with_circle(circle),
        }
    }

    /// Intersection point of two lines.
    /// Returns None if the lines are parallel or identical.
    pub fn intersection_with_line(&self, other: &Line) -> Option<Point> {
        let (a1, b1, c1) = (self.a, self.b, self.c);
        let (a2, b2, c2) = (other.a, other.b, other.c);

        let denom = a2 * b1 - b2 * a1;
        if denom == 0.0 {
            return None;
        }

        let x = (c2 * b1 - b2 * c1) / denom;
        // Solve for y with whichever equation is better conditioned
        let y = if b2.abs() > b1.abs() {
            (c2 - a2 * x) / b2
        } else {
            (c1 - a1 * x) / b1
        };

        if x.is_finite() && y.is_finite() {
            Some(Point::new(x, y))
        } else {
            None
        }
    }

    /// Intersection points with a circle.
    /// Returns no points if the line misses the circle, two (possibly
    /// equal) points otherwise.
    pub fn intersection_with_circle(&self, circle: &Circle) -> Vec<Point> {
        let (x0, y0, r0) = (circle.center.x, circle.center.y, circle.radius);
        let (a, b) = (self.a, self.b);
        // Move the circle center to the origin
        let c = self.c - a * x0 - b * y0;
        let norm_sq = a * a + b * b;

        let discriminant = r0 * r0 * norm_sq - c * c;
        if discriminant < 0.0 || norm_sq == 0.0 {
            return Vec::new();
        }

        let root_term = discriminant.sqrt() / norm_sq;
        let foot_x = a * c / norm_sq;
        let foot_y = b * c / norm_sq;

        vec![
            Point::new(x0 + foot_x + b * root_term, y0 + foot_y - a * root_term),
            Point::new(x0 + foot_x - b * root_term, y0 + foot_y + a * root_term),
        ]
    }

    /// Line through `p` perpendicular to this one.
    pub fn orthogonal_line_at_point(&self, p: &Point) -> Line {
        Line::new(-self.b, self.a, self.a * p.y - self.b * p.x)
    }

    /// Euclidean distance between `p` and its foot on the line.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        let orthogonal = self.orthogonal_line_at_point(p);
        match self.intersection_with_line(&orthogonal) {
            Some(foot) => p.distance(&foot),
            None => (self.a * p.x + self.b * p.y - self.c).abs() / self.a.hypot(self.b),
        }
    }

    pub fn distance_to_origin(&self) -> f64 {
        self.distance_to_point(&Point::origin())
    }

    /// Rotate the line counter-clockwise by `angle` around `anchor`.
    pub fn rotated_line(&self, anchor: &Point, angle: f64) -> Line {
        let (a, b, c) = (self.a, self.b, self.c);
        // Sample two points one unit apart along the dominant axis
        let (p1, p2) = if a.abs() > b.abs() {
            (Point::new(c / a, 0.0), Point::new((c - b) / a, 1.0))
        } else {
            (Point::new(0.0, c / b), Point::new(1.0, (c - a) / b))
        };

        Line::through(
            &p1.rotated_point(anchor, angle),
            &p2.rotated_point(anchor, angle),
        )
    }

    /// Angle between the normals of two lines, in [0, π].
    pub fn angle_between(&self, other: &Line) -> f64 {
        let (a1, b1, a2, b2) = (self.a, self.b, other.a, other.b);
        let cos_angle = (a1 * a2 + b1 * b2) / ((a1 * a1 + b1 * b1) * (a2 * a2 + b2 * b2)).sqrt();
        cos_angle.clamp(-1.0, 1.0).acos()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}x + {:.4}y = {:.4}", self.a, self.b, self.c)
    }
}
