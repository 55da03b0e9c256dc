use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{closest_parameter_on_segment, point_on_segment};
use crate::math::{is_finite_point, Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// An open polyline through two or more points.
///
/// Each span takes one unit of parameter, so the domain is `[0, n - 1]`
/// for `n` vertices and integer parameters land on vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    /// Creates a new polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, a coordinate is not
    /// finite, or two consecutive points coincide.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(
                GeometryError::Degenerate("polyline needs at least two points".into()).into(),
            );
        }
        if !points.iter().all(is_finite_point) {
            return Err(GeometryError::NotFinite.into());
        }
        if points.windows(2).any(|w| (w[1] - w[0]).norm() < TOLERANCE) {
            return Err(GeometryError::ZeroLength.into());
        }
        Ok(Self { points })
    }

    /// Returns the vertices of the polyline.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of straight spans.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.points.len() - 1
    }
}

impl Curve for Polyline {
    fn evaluate(&self, t: f64) -> Point3 {
        let t = self.domain().clamp(t);
        let last = self.span_count() - 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let span = (t.floor() as usize).min(last);
        #[allow(clippy::cast_precision_loss)]
        let local = t - span as f64;
        point_on_segment(&self.points[span], &self.points[span + 1], local)
    }

    fn domain(&self) -> CurveDomain {
        #[allow(clippy::cast_precision_loss)]
        let t_max = self.span_count() as f64;
        CurveDomain::new(0.0, t_max)
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        let mut best_t = 0.0;
        let mut best_dist = f64::INFINITY;
        for (i, w) in self.points.windows(2).enumerate() {
            let s = closest_parameter_on_segment(&w[0], &w[1], point);
            let d = (point - point_on_segment(&w[0], &w[1], s)).norm();
            if d < best_dist {
                best_dist = d;
                #[allow(clippy::cast_precision_loss)]
                let base = i as f64;
                best_t = base + s;
            }
        }
        best_t
    }

    fn spans(&self) -> Vec<(Point3, Point3)> {
        self.points.windows(2).map(|w| (w[0], w[1])).collect()
    }

    fn start_point(&self) -> Point3 {
        self.points[0]
    }

    fn end_point(&self) -> Point3 {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_shape() -> Polyline {
        Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn single_point_is_rejected() {
        assert!(Polyline::new(vec![Point3::origin()]).is_err());
    }

    #[test]
    fn repeated_vertex_is_rejected() {
        let p = Point3::new(1.0, 0.0, 0.0);
        assert!(Polyline::new(vec![Point3::origin(), p, p]).is_err());
    }

    #[test]
    fn domain_spans_one_unit_per_segment() {
        let pl = l_shape();
        assert_eq!(pl.domain(), CurveDomain::new(0.0, 2.0));
        assert_eq!(pl.start_point(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(pl.end_point(), Point3::new(4.0, 3.0, 0.0));
    }

    #[test]
    fn evaluate_on_second_span() {
        let pl = l_shape();
        let q = pl.evaluate(1.5);
        assert_relative_eq!(q.x, 4.0);
        assert_relative_eq!(q.y, 1.5);
        assert_eq!(pl.evaluate(2.0), Point3::new(4.0, 3.0, 0.0));
    }

    #[test]
    fn closest_parameter_picks_nearest_span() {
        let pl = l_shape();
        assert_relative_eq!(pl.closest_parameter(&Point3::new(2.0, -1.0, 0.0)), 0.5);
        assert_relative_eq!(pl.closest_parameter(&Point3::new(5.0, 2.0, 0.0)), 1.0 + 2.0 / 3.0);
    }
}
