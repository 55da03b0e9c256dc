pub mod curve;

pub use curve::{Curve, CurveDomain, IntersectionEvent, MemberCurve, Polyline, Segment};
