use super::{Point3, TOLERANCE};

/// Relationship between two bounded segments in 3D.
#[derive(Debug, Clone, Copy)]
pub enum SegmentPairRelation {
    /// Segments cross or touch at a single point.
    Point {
        /// Contact point, taken on the first segment.
        point: Point3,
        /// Normalized parameter on the first segment.
        t: f64,
        /// Normalized parameter on the second segment.
        u: f64,
    },
    /// Segments are collinear and share an interval of positive length.
    Overlap {
        /// Interval start on the first segment.
        start: Point3,
        /// Interval end on the first segment.
        end: Point3,
    },
    /// No contact within tolerance.
    Disjoint,
}

/// Normalized parameter `t` in `[0, 1]` of the point on `a0 -> a1` closest to `p`.
///
/// A degenerate segment returns `0.0`.
#[must_use]
pub fn closest_parameter_on_segment(a0: &Point3, a1: &Point3, p: &Point3) -> f64 {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }
    ((p - a0).dot(&da) / len_sq).clamp(0.0, 1.0)
}

/// Point on `a0 -> a1` at normalized parameter `t`.
#[must_use]
pub fn point_on_segment(a0: &Point3, a1: &Point3, t: f64) -> Point3 {
    a0 + (a1 - a0) * t
}

/// Bounded segment-segment intersection in 3D.
///
/// Two segments are considered in contact when their closest approach is
/// within `tol` (a distance in model units). Collinear segments report either
/// an [`Overlap`](SegmentPairRelation::Overlap) or, when the shared interval
/// is no longer than `tol`, a single [`Point`](SegmentPairRelation::Point).
#[must_use]
pub fn segment_segment_intersect_3d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
    tol: f64,
) -> SegmentPairRelation {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();

    if len_a < TOLERANCE {
        return point_segment_contact(a0, b0, b1, tol, false);
    }
    if len_b < TOLERANCE {
        return point_segment_contact(b0, a0, a1, tol, true);
    }

    // Both ends of the second segment lying on the first carrier line within
    // `tol` makes the pair collinear, whatever the angle between them.
    let sin_angle = da.cross(&db).norm() / (len_a * len_b);
    let off_line = |q: &Point3| (q - a0).cross(&da).norm() / len_a;
    if sin_angle < 1e-9 || (off_line(b0) <= tol && off_line(b1) <= tol) {
        return collinear_overlap(a0, a1, b0, b1, tol);
    }

    // Closest points of the two carrier lines.
    let w = a0 - b0;
    let a = da.dot(&da);
    let b = da.dot(&db);
    let c = db.dot(&db);
    let d = da.dot(&w);
    let e = db.dot(&w);
    let denom = a * c - b * b;

    let t = (b * e - c * d) / denom;
    let u = (a * e - b * d) / denom;

    let eps_t = tol / len_a;
    let eps_u = tol / len_b;
    if t < -eps_t || t > 1.0 + eps_t || u < -eps_u || u > 1.0 + eps_u {
        return SegmentPairRelation::Disjoint;
    }

    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    let pa = point_on_segment(a0, a1, t);
    let pb = point_on_segment(b0, b1, u);
    if (pa - pb).norm() > tol {
        return SegmentPairRelation::Disjoint;
    }

    SegmentPairRelation::Point { point: pa, t, u }
}

/// Contact between a degenerate segment (a single point) and a segment.
///
/// `swapped` is set when `p` belongs to the second segment of the pair.
fn point_segment_contact(
    p: &Point3,
    s0: &Point3,
    s1: &Point3,
    tol: f64,
    swapped: bool,
) -> SegmentPairRelation {
    let s = closest_parameter_on_segment(s0, s1, p);
    let q = point_on_segment(s0, s1, s);
    if (p - q).norm() > tol {
        return SegmentPairRelation::Disjoint;
    }
    if swapped {
        SegmentPairRelation::Point { point: q, t: s, u: 0.0 }
    } else {
        SegmentPairRelation::Point { point: *p, t: 0.0, u: s }
    }
}

fn collinear_overlap(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
    tol: f64,
) -> SegmentPairRelation {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    let len = len_sq.sqrt();

    // Offset of the second carrier line from the first.
    let gap = (b0 - a0).cross(&da).norm() / len;
    if gap > tol {
        return SegmentPairRelation::Disjoint;
    }

    let s0 = (b0 - a0).dot(&da) / len_sq;
    let s1 = (b1 - a0).dot(&da) / len_sq;
    let lo = s0.min(s1).max(0.0);
    let hi = s0.max(s1).min(1.0);
    let eps = tol / len;

    if hi < lo - eps {
        return SegmentPairRelation::Disjoint;
    }

    if (hi - lo) * len <= tol {
        #[allow(clippy::manual_midpoint)]
        let t = ((lo + hi) / 2.0).clamp(0.0, 1.0);
        let point = point_on_segment(a0, a1, t);
        let u = closest_parameter_on_segment(b0, b1, &point);
        return SegmentPairRelation::Point { point, t, u };
    }

    SegmentPairRelation::Overlap {
        start: point_on_segment(a0, a1, lo),
        end: point_on_segment(a0, a1, hi),
    }
}
