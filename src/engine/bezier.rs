// Position interpolation along the trade route
//
// The route is a quadratic Bézier curve in map space (500 x 300, y grows
// downward). Everything here is pure arithmetic.

/// A point in map space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quadratic Bézier curve defined by its start, control and end points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticBezier {
    pub const fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluate the curve at parameter `t`
    ///
    /// `P(t) = (1-t)² · start + 2(1-t)t · control + t² · end`
    ///
    /// Values of `t` outside [0, 1] extrapolate the same polynomial.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;

        Point {
            x: a * self.start.x + b * self.control.x + c * self.end.x,
            y: a * self.start.y + b * self.control.y + c * self.end.y,
        }
    }

    /// Sample the curve at a list of fixed parameters
    pub fn sample(&self, ts: &[f64]) -> Vec<Point> {
        ts.iter().map(|&t| self.point_at(t)).collect()
    }

    /// Evenly spaced points from start to end inclusive
    ///
    /// Used for drawing the dashed route line. Returns the start point
    /// alone when `segments` is zero.
    pub fn polyline(&self, segments: usize) -> Vec<Point> {
        if segments == 0 {
            return vec![self.start];
        }
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn route() -> QuadraticBezier {
        QuadraticBezier::new(
            Point::new(380.0, 120.0),
            Point::new(300.0, 200.0),
            Point::new(180.0, 180.0),
        )
    }

    #[test]
    fn test_endpoints() {
        let curve = route();
        assert_eq!(curve.point_at(0.0), curve.start);
        assert_eq!(curve.point_at(1.0), curve.end);
    }

    #[test]
    fn test_midpoint() {
        // 0.25 * start + 0.5 * control + 0.25 * end
        let p = route().point_at(0.5);
        assert!((p.x - 290.0).abs() < EPSILON);
        assert!((p.y - 175.0).abs() < EPSILON);
    }

    #[test]
    fn test_extrapolation_does_not_panic() {
        let curve = route();
        let before = curve.point_at(-0.5);
        let after = curve.point_at(1.5);
        assert!(before.x.is_finite() && before.y.is_finite());
        assert!(after.x.is_finite() && after.y.is_finite());
    }

    #[test]
    fn test_sample_fixed_offsets() {
        let curve = route();
        let points = curve.sample(&[0.2, 0.4, 0.6, 0.8]);
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], curve.point_at(0.4));
    }

    #[test]
    fn test_polyline() {
        let curve = route();
        let line = curve.polyline(10);
        assert_eq!(line.len(), 11);
        assert_eq!(line[0], curve.start);
        assert_eq!(line[10], curve.end);
        assert_eq!(curve.polyline(0), vec![curve.start]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Interpolated point matches the closed-form quadratic for any
        /// control points and any t in [0, 1]
        #[test]
        fn prop_matches_closed_form(
            sx in -1000.0f64..1000.0, sy in -1000.0f64..1000.0,
            cx in -1000.0f64..1000.0, cy in -1000.0f64..1000.0,
            ex in -1000.0f64..1000.0, ey in -1000.0f64..1000.0,
            t in 0.0f64..=1.0,
        ) {
            let curve = QuadraticBezier::new(
                Point::new(sx, sy),
                Point::new(cx, cy),
                Point::new(ex, ey),
            );
            let p = curve.point_at(t);
            let x = (1.0 - t).powi(2) * sx + 2.0 * (1.0 - t) * t * cx + t.powi(2) * ex;
            let y = (1.0 - t).powi(2) * sy + 2.0 * (1.0 - t) * t * cy + t.powi(2) * ey;
            prop_assert!((p.x - x).abs() < EPSILON);
            prop_assert!((p.y - y).abs() < EPSILON);
        }

        /// Endpoints are hit exactly regardless of the control point
        #[test]
        fn prop_endpoints_are_exact(
            cx in -1000.0f64..1000.0, cy in -1000.0f64..1000.0,
        ) {
            let curve = QuadraticBezier::new(
                Point::new(10.0, 20.0),
                Point::new(cx, cy),
                Point::new(400.0, 250.0),
            );
            prop_assert_eq!(curve.point_at(0.0), curve.start);
            prop_assert_eq!(curve.point_at(1.0), curve.end);
        }
    }
}
