use std::f64::consts::TAU;

use crate::cartesian::{Orientation, Point2};

const COLLINEAR_EPSILON: f64 = 1e-12;

/// Circular arc through three points: start, any point on the arc, end.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircularArc {
    /// First point of the arc.
    pub start: Point2,
    /// Any point between the start and the end.
    pub mid: Point2,
    /// Last point of the arc.
    pub end: Point2,
}

impl CircularArc {
    /// Creates a new arc.
    pub fn new(start: Point2, mid: Point2, end: Point2) -> Self {
        Self { start, mid, end }
    }

    /// Center of the circle through the three points. `None` if the points are collinear.
    pub fn center(&self) -> Option<Point2> {
        let (a, b, c) = (self.start, self.mid, self.end);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if !d.is_finite() || d.abs() < COLLINEAR_EPSILON {
            return None;
        }

        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;

        Some(Point2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        ))
    }

    /// Radius of the circle through the three points.
    pub fn radius(&self) -> Option<f64> {
        let center = self.center()?;
        Some((self.start - center).norm())
    }

    /// Direction in which the arc is traversed.
    pub fn orientation(&self) -> Orientation {
        Orientation::triplet(&self.start, &self.mid, &self.end)
    }

    /// Approximates the arc with `segments` straight segments.
    ///
    /// The first and the last returned points are exactly the start and the end of the arc.
    /// A degenerate arc is returned as its three points.
    pub fn linearize(&self, segments: usize) -> Vec<Point2> {
        let (Some(center), Some(sweep)) = (self.center(), self.sweep()) else {
            return vec![self.start, self.mid, self.end];
        };

        let segments = segments.max(2);
        let radius = (self.start - center).norm();
        let start_angle = angle(center, self.start);

        let mut points = Vec::with_capacity(segments + 1);
        points.push(self.start);
        for i in 1..segments {
            let a = start_angle + sweep * i as f64 / segments as f64;
            points.push(Point2::new(
                center.x + radius * a.cos(),
                center.y + radius * a.sin(),
            ));
        }
        points.push(self.end);

        points
    }

    /// Signed angle swept from the start to the end, positive for counterclockwise arcs.
    pub fn sweep(&self) -> Option<f64> {
        let center = self.center()?;
        let start = angle(center, self.start);
        let end = angle(center, self.end);

        match self.orientation() {
            Orientation::Counterclockwise => Some(positive_angle(end - start)),
            Orientation::Clockwise => Some(-positive_angle(start - end)),
            Orientation::Collinear => None,
        }
    }

    /// Closed circular ring through three points on a circle.
    ///
    /// Returns the three points followed by the middle of the arc leading from the third point
    /// back to the first one, and the first point again. `None` if the points are collinear.
    pub fn circle(p0: Point2, p1: Point2, p2: Point2) -> Option<[Point2; 5]> {
        let closing = Self::new(p2, p1, p0);
        let center = closing.center()?;
        let radius = (p0 - center).norm();

        let from = angle(center, p2);
        let to = angle(center, p0);
        let middle = match Orientation::triplet(&p0, &p1, &p2) {
            Orientation::Counterclockwise => from + positive_angle(to - from) / 2.0,
            Orientation::Clockwise => from - positive_angle(from - to) / 2.0,
            Orientation::Collinear => return None,
        };

        let mid = Point2::new(
            center.x + radius * middle.cos(),
            center.y + radius * middle.sin(),
        );

        Some([p0, p1, p2, mid, p0])
    }
}

fn angle(center: Point2, p: Point2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Normalizes an angle into `(0, TAU]`.
fn positive_angle(a: f64) -> f64 {
    let a = a % TAU;
    if a <= 0.0 {
        a + TAU
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn half_circle() -> CircularArc {
        CircularArc::new(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        )
    }

    #[test]
    fn center_and_radius() {
        let arc = half_circle();
        assert_abs_diff_eq!(arc.center().unwrap(), Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.radius().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_arc() {
        let arc = CircularArc::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert_eq!(arc.center(), None);
        assert_eq!(arc.linearize(8).len(), 3);
    }

    #[test]
    fn sweep_direction() {
        assert_abs_diff_eq!(half_circle().sweep().unwrap(), PI, epsilon = 1e-12);

        let cw = CircularArc::new(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        );
        assert_abs_diff_eq!(cw.sweep().unwrap(), -PI, epsilon = 1e-12);
    }

    #[test]
    fn linearize_stays_on_circle() {
        let points = half_circle().linearize(16);
        assert_eq!(points.len(), 17);
        assert_eq!(points[0], Point2::new(1.0, 0.0));
        assert_eq!(points[16], Point2::new(-1.0, 0.0));
        for p in &points {
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
            assert!(p.y >= -1e-12);
        }
    }

    #[test]
    fn circle_ring() {
        let ring = CircularArc::circle(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(ring[3], Point2::new(0.0, -1.0), epsilon = 1e-12);
        assert_eq!(ring[4], ring[0]);

        let ring = CircularArc::circle(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(ring[3], Point2::new(0.0, -1.0), epsilon = 1e-12);

        assert!(CircularArc::circle(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        )
        .is_none());
    }
}
