//! Geodesics of the Poincaré disk
//!
//! A geodesic through two disk points is one of:
//! - a diameter, the Euclidean line `x0·X + y0·Y = 0` through the origin;
//! - an arc of the circle centered at `(x0, y0)` with
//!   `radius² = x0² + y0² - 1`, which meets the unit circle at right angles.
//!
//! The arc center is the intersection of the polar lines of the two
//! points. [`HyperbolicLine::line_at_angle`] grows new geodesics from the
//! second endpoint, which is how figures are built outward from a seed.

use crate::circle::{unit_circle, Circle};
use crate::curve::Curve;
use crate::hyperbolic_point::HyperbolicPoint;
use crate::line::Line;
use crate::point::Point;
use crate::{normalize_angle, GeometryError, Tolerances};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::{debug, trace, warn};

/// Which Euclidean curve carries the geodesic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Geodesic {
    /// Diameter `normal.x·X + normal.y·Y = 0`
    Diameter { normal: Point },
    /// Arc of the circle orthogonal to the unit circle centered at `center`
    Arc { center: Point },
}

/// A geodesic of the Poincaré disk with two distinguished points bounding
/// a finite segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HyperbolicLine {
    end_points: [HyperbolicPoint; 2],
    geodesic: Geodesic,
    tolerances: Tolerances,
}

impl HyperbolicLine {
    /// Geodesic segment between two points of the open unit disk.
    pub fn new(point_a: HyperbolicPoint, point_b: HyperbolicPoint) -> Result<Self, GeometryError> {
        Self::with_tolerances(point_a, point_b, Tolerances::default())
    }

    /// Same as [`HyperbolicLine::new`] with explicit numeric tolerances.
    /// Lines built from this one by `line_at_angle` keep them.
    pub fn with_tolerances(
        point_a: HyperbolicPoint,
        point_b: HyperbolicPoint,
        tolerances: Tolerances,
    ) -> Result<Self, GeometryError> {
        for p in [&point_a, &point_b] {
            if !p.is_in_unit_disk() {
                return Err(GeometryError::OutsideDisk { x: p.x(), y: p.y() });
            }
        }

        let geodesic = Self::classify(&point_a, &point_b, &tolerances);
        debug!(
            point_a = %point_a,
            point_b = %point_b,
            geodesic = ?geodesic,
            "Constructed hyperbolic line"
        );

        Ok(Self {
            end_points: [point_a, point_b],
            geodesic,
            tolerances,
        })
    }

    fn classify(a: &HyperbolicPoint, b: &HyperbolicPoint, tolerances: &Tolerances) -> Geodesic {
        // Coincident points: any geodesic through them will do
        let chord = match Line::from_points(&a.point, &b.point) {
            Ok(chord) => chord,
            Err(_) => return Self::diameter_through(a, b),
        };
        if chord.distance_to_origin() < tolerances.straight_line {
            return Self::diameter_through(a, b);
        }

        // Polar lines of points on a common diameter are parallel
        let center = a
            .polar_line()
            .ok()
            .zip(b.polar_line().ok())
            .and_then(|(polar_a, polar_b)| polar_a.intersection_with_line(&polar_b));

        match center {
            Some(center) => Geodesic::Arc { center },
            None => Self::diameter_through(a, b),
        }
    }

    /// Diameter through the endpoint farther from the origin.
    fn diameter_through(a: &HyperbolicPoint, b: &HyperbolicPoint) -> Geodesic {
        let far = if a.euclidean_distance_to_origin() > b.euclidean_distance_to_origin() {
            a
        } else {
            b
        };

        if far.euclidean_distance_to_origin() == 0.0 {
            // Both endpoints at the origin: use the x-axis
            return Geodesic::Diameter {
                normal: Point::new(0.0, 1.0),
            };
        }
        Geodesic::Diameter {
            normal: Point::new(far.y(), -far.x()),
        }
    }

    pub fn end_points(&self) -> &[HyperbolicPoint; 2] {
        &self.end_points
    }

    /// Whether the geodesic is a diameter of the disk
    pub fn is_a_straight_line(&self) -> bool {
        matches!(self.geodesic, Geodesic::Diameter { .. })
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// The Euclidean line (diameter case) or circle (arc case) carrying
    /// the geodesic.
    pub fn representation(&self) -> Curve {
        match self.geodesic {
            Geodesic::Diameter { normal } => Curve::Line(Line::new(normal.x, normal.y, 0.0)),
            Geodesic::Arc { center } => {
                let radius = (center.dot(&center) - 1.0).max(0.0).sqrt();
                Curve::Circle(Circle::new(center, radius))
            }
        }
    }

    /// Hyperbolic length of the segment between the end points, from the
    /// cross-ratio with the two ideal points of the geodesic.
    pub fn length(&self) -> f64 {
        let [p, q] = self.end_points;
        if p.point == q.point {
            return 0.0;
        }

        let ideal_points = self.representation().intersection(&Curve::Circle(unit_circle()));
        let (mut a, mut b) = match ideal_points.as_slice() {
            [a, b] => (*a, *b),
            _ => {
                debug!(
                    line = ?self,
                    "Geodesic lost its ideal points, using closed form distance"
                );
                return p.closed_form_distance(&q);
            }
        };

        // a is the ideal point on p's side
        if a.distance(&q.point) < a.distance(&p.point) {
            std::mem::swap(&mut a, &mut b);
        }

        let ratio = (a.distance(&q.point) * p.point.distance(&b))
            / (a.distance(&p.point) * q.point.distance(&b));
        ratio.ln()
    }

    /// Intersection point of two geodesics inside the disk, if any.
    pub fn intersection(&self, other: &HyperbolicLine) -> Option<HyperbolicPoint> {
        self.representation()
            .intersection(&other.representation())
            .into_iter()
            .map(HyperbolicPoint::from)
            .find(|p| p.is_in_unit_disk())
    }

    /// Geodesic segment starting at this line's second end point, turning
    /// by `angle` radians from the current direction and having hyperbolic
    /// `length`.
    ///
    /// An `angle` of 0 continues straight ahead. The angle measured at the
    /// anchor between the first end point and the new end point is
    /// `π - |angle|`.
    pub fn line_at_angle(&self, angle: f64, length: f64) -> Result<HyperbolicLine, GeometryError> {
        let angle = normalize_angle(angle);
        let [first, anchor] = self.end_points;

        let carrier = match self.geodesic {
            Geodesic::Diameter { normal } => {
                let tangent = Line::new(normal.x, normal.y, 0.0).rotated_line(&anchor.point, angle);
                let normal_line = tangent.orthogonal_line_at_point(&anchor.point);
                self.carrier_from_normal(&normal_line, &anchor)?
            }
            Geodesic::Arc { center } => {
                let normal_line =
                    Line::from_points(&center, &anchor.point)?.rotated_line(&anchor.point, angle);
                self.carrier_from_normal(&normal_line, &anchor)?
            }
        };

        // Very long segments round onto the unit circle
        let candidates: Vec<HyperbolicPoint> = anchor
            .hyperbolic_circle(length)
            .intersection(&carrier)
            .into_iter()
            .map(HyperbolicPoint::from)
            .filter(HyperbolicPoint::is_in_unit_disk)
            .collect();

        if angle == 0.0 {
            // Straight ahead: away from the first end point
            let ahead = candidates.into_iter().max_by(|c1, c2| {
                first
                    .closed_form_distance(c1)
                    .partial_cmp(&first.closed_form_distance(c2))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            if let Some(end_point) = ahead {
                return Self::with_tolerances(anchor, end_point, self.tolerances);
            }
        } else {
            for candidate in candidates {
                let measured = HyperbolicPoint::angle_between_three_points(&first, &anchor, &candidate)?;
                trace!(
                    candidate = %candidate,
                    measured,
                    expected = PI - angle.abs(),
                    "Checking line_at_angle candidate"
                );
                if (measured + angle.abs() - PI).abs() < self.tolerances.angle_match {
                    return Self::with_tolerances(anchor, candidate, self.tolerances);
                }
            }
        }

        warn!(
            anchor = %anchor,
            angle,
            length,
            "No geodesic satisfies the requested angle"
        );
        Err(GeometryError::Unsatisfiable { angle, length })
    }

    /// Geodesic through `anchor` whose Euclidean normal at `anchor` is
    /// `normal_line`. When the tangent passes through the origin, within the
    /// straight line tolerance, it is a diameter. Otherwise the center lies
    /// where the normal meets the anchor's polar line.
    fn carrier_from_normal(&self, normal_line: &Line, anchor: &HyperbolicPoint) -> Result<Curve, GeometryError> {
        let tangent = normal_line.orthogonal_line_at_point(&anchor.point);
        if tangent.distance_to_origin() < self.tolerances.straight_line {
            debug!(anchor = %anchor, "Growing along a diameter");
            return Ok(Curve::Line(tangent));
        }

        let polar = anchor.polar_line()?;
        match normal_line.intersection_with_line(&polar) {
            Some(center) => {
                debug!(center = %center, "Growing along an arc");
                Ok(Curve::Circle(Circle::new(center, center.distance(&anchor.point))))
            }
            None => {
                debug!(anchor = %anchor, "Normal parallel to the polar line, growing along a diameter");
                Ok(Curve::Line(tangent))
            }
        }
    }
}

impl std::fmt::Display for HyperbolicLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [p, q] = self.end_points;
        match self.geodesic {
            Geodesic::Diameter { .. } => write!(f, "diameter {} -> {}", p, q),
            Geodesic::Arc { center } => write!(f, "arc {} -> {} around {}", p, q, center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_THRESHOLD: f64 = 1e-9;

    #[test]
    fn test_arc_representation() {
        let p1 = HyperbolicPoint::new(0.1, -0.5);
        let p2 = HyperbolicPoint::new(0.2, 0.6);
        let line = HyperbolicLine::new(p1, p2).unwrap();

        assert!(!line.is_a_straight_line());
        let circle = *line.representation().as_circle().unwrap();
        assert!((circle.center.x - 4.55).abs() < TEST_THRESHOLD);
        assert!((circle.center.y + 0.35).abs() < TEST_THRESHOLD);
        assert!(circle.contains(&p1.point, TEST_THRESHOLD));
        assert!(circle.contains(&p2.point, TEST_THRESHOLD));

        let angle = unit_circle().angle_between(&circle).unwrap();
        assert!((angle - PI / 2.0).abs() < TEST_THRESHOLD);
    }

    #[test]
    fn test_near_diameter_is_straight() {
        let line = HyperbolicLine::new(HyperbolicPoint::new(0.0, 0.0), HyperbolicPoint::new(0.99, 0.0001))
            .unwrap();
        assert!(line.is_a_straight_line());
        let diameter = line.representation();
        assert!(diameter.contains(&Point::origin(), TEST_THRESHOLD));
        assert!(diameter.contains(&Point::new(0.99, 0.0001), TEST_THRESHOLD));
    }

    #[test]
    fn test_points_outside_disk_rejected() {
        let inside = HyperbolicPoint::new(0.1, 0.1);
        let boundary = HyperbolicPoint::new(0.0, 1.0);
        assert_eq!(
            HyperbolicLine::new(inside, boundary),
            Err(GeometryError::OutsideDisk { x: 0.0, y: 1.0 })
        );
        assert!(HyperbolicLine::new(HyperbolicPoint::new(2.0, 0.0), inside).is_err());
    }

    #[test]
    fn test_coincident_end_points() {
        let p = HyperbolicPoint::new(0.3, -0.2);
        let line = HyperbolicLine::new(p, p).unwrap();
        assert!(line.is_a_straight_line());
        assert_eq!(line.length(), 0.0);
        assert!(line.representation().contains(&p.point, TEST_THRESHOLD));

        let at_origin = HyperbolicLine::new(HyperbolicPoint::origin(), HyperbolicPoint::origin()).unwrap();
        assert_eq!(at_origin.representation(), Curve::Line(Line::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_length_along_radius() {
        let p = HyperbolicPoint::new(0.2, 0.2);
        let q = HyperbolicPoint::new(0.5, 0.5);
        let line = HyperbolicLine::new(p, q).unwrap();
        assert!(line.is_a_straight_line());
        let expected = (p.distance_to_origin() - q.distance_to_origin()).abs();
        assert!((line.length() - expected).abs() < TEST_THRESHOLD);
    }

    #[test]
    fn test_length_through_origin() {
        let p = HyperbolicPoint::new(-0.3, 0.0);
        let q = HyperbolicPoint::new(0.6, 0.0);
        let line = HyperbolicLine::new(p, q).unwrap();
        let expected = p.distance_to_origin() + q.distance_to_origin();
        assert!((line.length() - expected).abs() < TEST_THRESHOLD);
    }

    #[test]
    fn test_length_is_symmetric() {
        let p = HyperbolicPoint::new(0.1, -0.5);
        let q = HyperbolicPoint::new(0.4, 0.8);
        let forward = HyperbolicLine::new(p, q).unwrap().length();
        let backward = HyperbolicLine::new(q, p).unwrap().length();
        assert!((forward - backward).abs() < TEST_THRESHOLD);
        assert!((forward - p.closed_form_distance(&q)).abs() < TEST_THRESHOLD);
    }

    #[test]
    fn test_intersection_of_arcs() {
        let p1 = HyperbolicPoint::new(0.1, -0.5);
        let l1 = HyperbolicLine::new(p1, HyperbolicPoint::new(0.2, 0.6)).unwrap();
        let l2 = HyperbolicLine::new(p1, HyperbolicPoint::new(0.4, 0.8)).unwrap();
        let meet = l1.intersection(&l2).unwrap();
        assert!((meet.point - p1.point).distance_to_origin() < TEST_THRESHOLD);
    }

    #[test]
    fn test_intersection_of_diameters() {
        let l1 = HyperbolicLine::new(HyperbolicPoint::new(-0.5, 0.0), HyperbolicPoint::new(0.5, 0.0)).unwrap();
        let l2 = HyperbolicLine::new(HyperbolicPoint::new(0.0, -0.5), HyperbolicPoint::new(0.0, 0.5)).unwrap();
        let meet = l1.intersection(&l2).unwrap();
        assert!(meet.euclidean_distance_to_origin() < TEST_THRESHOLD);
    }

    #[test]
    fn test_disjoint_geodesics() {
        let l1 = HyperbolicLine::new(HyperbolicPoint::new(0.5, 0.5), HyperbolicPoint::new(0.6, 0.2)).unwrap();
        let l2 = HyperbolicLine::new(HyperbolicPoint::new(-0.5, -0.5), HyperbolicPoint::new(-0.6, -0.2)).unwrap();
        assert!(l1.intersection(&l2).is_none());
    }

    #[test]
    fn test_display() {
        let line = HyperbolicLine::new(HyperbolicPoint::origin(), HyperbolicPoint::new(0.5, 0.0)).unwrap();
        assert_eq!(line.to_string(), "diameter (0.0000, 0.0000) -> (0.5000, 0.0000)");
    }
}
