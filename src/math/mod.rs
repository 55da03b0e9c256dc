pub mod intersect_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global numeric tolerance for degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// Default modelling tolerance, in model units, for node matching and
/// curve-curve intersection.
pub const MODEL_TOLERANCE: f64 = 1e-3;

/// Returns `true` if every coordinate of `p` is finite.
#[must_use]
pub fn is_finite_point(p: &Point3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}
