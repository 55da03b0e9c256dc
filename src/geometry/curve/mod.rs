mod polyline;
mod segment;

pub use polyline::Polyline;
pub use segment::Segment;

use crate::math::intersect_3d::{segment_segment_intersect_3d, SegmentPairRelation};
use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Clamps `t` into the domain.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }
}

/// A single contact found between two curves.
///
/// `point_a` lies on the curve the query was made from. An overlapping
/// interval carries its second end in `point_a2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub point_a: Point3,
    pub point_a2: Option<Point3>,
    pub is_overlap: bool,
}

impl IntersectionEvent {
    /// A single touch or crossing point.
    #[must_use]
    pub fn point(point: Point3) -> Self {
        Self {
            point_a: point,
            point_a2: None,
            is_overlap: false,
        }
    }

    /// An overlapping interval from `start` to `end`.
    #[must_use]
    pub fn overlap(start: Point3, end: Point3) -> Self {
        Self {
            point_a: start,
            point_a2: Some(end),
            is_overlap: true,
        }
    }

    /// Returns the one or two points this event contributes.
    pub fn points(&self) -> impl Iterator<Item = Point3> {
        std::iter::once(self.point_a).chain(self.point_a2)
    }

    fn touches(&self, p: &Point3, tolerance: f64) -> bool {
        self.points().any(|q| (q - p).norm() <= tolerance)
    }
}

/// Trait for bounded curves that can carry a structural member.
pub trait Curve {
    /// Evaluates the curve at parameter `t`. Parameters outside the domain are clamped.
    fn evaluate(&self, t: f64) -> Point3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Parameter of the point on the curve closest to `point`.
    fn closest_parameter(&self, point: &Point3) -> f64;

    /// Straight spans making up the curve, in parameter order.
    fn spans(&self) -> Vec<(Point3, Point3)>;

    /// Returns the point at the start of the domain.
    fn start_point(&self) -> Point3 {
        self.evaluate(self.domain().t_min)
    }

    /// Returns the point at the end of the domain.
    fn end_point(&self) -> Point3 {
        self.evaluate(self.domain().t_max)
    }

    /// Finds every contact between this curve and `other` within `tolerance`.
    ///
    /// Event points are taken on `self`. Contacts that coincide within
    /// `tolerance` with an already reported event are merged into it.
    fn intersect(&self, other: &dyn Curve, tolerance: f64) -> Vec<IntersectionEvent> {
        intersect_spans(&self.spans(), &other.spans(), tolerance)
    }
}

fn intersect_spans(
    spans_a: &[(Point3, Point3)],
    spans_b: &[(Point3, Point3)],
    tolerance: f64,
) -> Vec<IntersectionEvent> {
    let mut events: Vec<IntersectionEvent> = Vec::new();
    for (a0, a1) in spans_a {
        for (b0, b1) in spans_b {
            match segment_segment_intersect_3d(a0, a1, b0, b1, tolerance) {
                SegmentPairRelation::Point { point, .. } => {
                    if !events.iter().any(|e| e.touches(&point, tolerance)) {
                        events.push(IntersectionEvent::point(point));
                    }
                }
                SegmentPairRelation::Overlap { start, end } => {
                    // A touch already reported at one end of the interval is subsumed.
                    events.retain(|e| {
                        e.is_overlap
                            || ((e.point_a - start).norm() > tolerance
                                && (e.point_a - end).norm() > tolerance)
                    });
                    events.push(IntersectionEvent::overlap(start, end));
                }
                SegmentPairRelation::Disjoint => {}
            }
        }
    }
    events
}

/// The curve carried by a structural element.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberCurve {
    /// A straight member.
    Segment(Segment),
    /// A kinked or faceted member.
    Polyline(Polyline),
}

impl Curve for MemberCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        match self {
            Self::Segment(s) => s.evaluate(t),
            Self::Polyline(p) => p.evaluate(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            Self::Segment(s) => s.domain(),
            Self::Polyline(p) => p.domain(),
        }
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        match self {
            Self::Segment(s) => s.closest_parameter(point),
            Self::Polyline(p) => p.closest_parameter(point),
        }
    }

    fn spans(&self) -> Vec<(Point3, Point3)> {
        match self {
            Self::Segment(s) => s.spans(),
            Self::Polyline(p) => p.spans(),
        }
    }
}

impl From<Segment> for MemberCurve {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Polyline> for MemberCurve {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn member_curve_delegates_endpoints() {
        let curve: MemberCurve = Segment::new(p(1.0, 2.0, 3.0), p(4.0, 2.0, 3.0)).unwrap().into();
        assert_eq!(curve.start_point(), p(1.0, 2.0, 3.0));
        assert_eq!(curve.end_point(), p(4.0, 2.0, 3.0));
    }

    #[test]
    fn segment_and_polyline_cross_twice() {
        let beam = Segment::new(p(0.0, 1.0, 0.0), p(10.0, 1.0, 0.0)).unwrap();
        let zigzag =
            Polyline::new(vec![p(2.0, 0.0, 0.0), p(4.0, 2.0, 0.0), p(6.0, 0.0, 0.0)]).unwrap();

        let events = beam.intersect(&zigzag, 1e-6);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| !e.is_overlap));
        assert_abs_diff_eq!(events[0].point_a.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(events[1].point_a.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn polyline_vertex_on_segment_reported_once() {
        let beam = Segment::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)).unwrap();
        let vee =
            Polyline::new(vec![p(3.0, 2.0, 0.0), p(5.0, 0.0, 0.0), p(7.0, 2.0, 0.0)]).unwrap();

        let events = beam.intersect(&vee, 1e-6);
        assert_eq!(events.len(), 1);
        assert_abs_diff_eq!(events[0].point_a.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_members_report_overlap() {
        let a = Segment::new(p(0.0, 0.0, 0.0), p(6.0, 0.0, 0.0)).unwrap();
        let b = Segment::new(p(2.0, 0.0, 0.0), p(9.0, 0.0, 0.0)).unwrap();

        let events = a.intersect(&b, 1e-6);
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert!(event.is_overlap);
        assert_eq!(event.points().count(), 2);
        assert_abs_diff_eq!(event.point_a.x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(event.point_a2.unwrap().x, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn distant_members_have_no_events() {
        let a = Segment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let b = Segment::new(p(0.0, 5.0, 0.0), p(1.0, 5.0, 0.0)).unwrap();
        assert!(a.intersect(&b, 1e-3).is_empty());
    }
}
