use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{closest_parameter_on_segment, point_on_segment};
use crate::math::{is_finite_point, Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A bounded straight segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or the endpoints coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if !is_finite_point(&start) || !is_finite_point(&end) {
            return Err(GeometryError::NotFinite.into());
        }
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::ZeroLength.into());
        }
        Ok(Self { start, end })
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Point3 {
        point_on_segment(&self.start, &self.end, t.clamp(0.0, 1.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        closest_parameter_on_segment(&self.start, &self.end, point)
    }

    fn spans(&self) -> Vec<(Point3, Point3)> {
        vec![(self.start, self.end)]
    }

    fn start_point(&self) -> Point3 {
        self.start
    }

    fn end_point(&self) -> Point3 {
        self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_length_segment_is_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Segment::new(p, p).is_err());
    }

    #[test]
    fn non_finite_segment_is_rejected() {
        let result = Segment::new(Point3::new(f64::NAN, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn evaluate_at_midpoint() {
        let s = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 2.0)).unwrap();
        let mid = s.evaluate(0.5);
        assert_relative_eq!(mid.x, 2.0);
        assert_relative_eq!(mid.z, 1.0);
        assert_relative_eq!(s.length(), 20.0_f64.sqrt());
    }

    #[test]
    fn closest_parameter_projects_onto_segment() {
        let s = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(s.closest_parameter(&Point3::new(7.0, 3.0, -1.0)), 0.7);
        assert_relative_eq!(s.closest_parameter(&Point3::new(-2.0, 0.0, 0.0)), 0.0);
    }
}
