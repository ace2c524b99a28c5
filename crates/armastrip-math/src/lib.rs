#![warn(missing_docs)]

//! Math types for armastrip.
//!
//! Thin wrappers around nalgebra providing the vector helpers used by hole
//! extraction and cutter synthesis: normalization with a zero-vector
//! sentinel, orthonormal basis construction around an extrusion axis, and
//! the tolerance constants shared by the other crates.

use nalgebra::{Vector2, Vector3};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in a 2D profile plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Vectors shorter than this are treated as zero.
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Minimum length of `preferred_up` once projected off the axis.
pub const PROJECTION_LENGTH: f64 = 1e-6;

/// `|axis · ref|` above which a world reference axis counts as near-parallel.
pub const PARALLEL_COSINE: f64 = 0.9;

/// Errors from vector and basis construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The axis normalizes to the zero vector.
    #[error("degenerate geometry: axis {0:?} has zero length")]
    ZeroAxis([f64; 3]),

    /// No usable basis could be derived, even from the world-axis fallback.
    #[error("degenerate geometry: cannot build a basis around axis {0:?}")]
    DegenerateBasis([f64; 3]),
}

/// Normalize `v`, returning the zero vector when `|v| < 1e-9`.
///
/// The zero vector is a sentinel, not an error: callers that need a
/// direction must check [`is_zero`] on the result.
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len < DEGENERATE_LENGTH {
        return Vec3::zeros();
    }
    v / len
}

/// Whether `v` is shorter than [`DEGENERATE_LENGTH`].
pub fn is_zero(v: &Vec3) -> bool {
    v.norm() < DEGENERATE_LENGTH
}

/// An orthonormal frame around an extrusion axis.
///
/// `u`, `v` and `axis` are unit length, mutually perpendicular and
/// right-handed (`u × v = axis`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// In-plane direction perpendicular to `v`.
    pub u: Vec3,
    /// In-plane direction closest to the preferred "up".
    pub v: Vec3,
    /// Normalized extrusion axis.
    pub axis: Vec3,
}

impl Basis {
    /// Map a 2D profile point `(u, v)` to `origin + U·u + V·v`.
    pub fn to_3d(&self, origin: &Point3, p: &Point2) -> Point3 {
        origin + self.u * p.x + self.v * p.y
    }

    /// The XY frame extruded along +Z.
    pub fn world_xy() -> Self {
        Self {
            u: Vec3::x(),
            v: Vec3::y(),
            axis: Vec3::z(),
        }
    }
}

/// Build an orthonormal basis around `axis` with `v` as close to
/// `preferred_up` as possible.
///
/// `v` is `preferred_up` projected perpendicular to the axis. When that
/// projection vanishes (`preferred_up` parallel to the axis), `v` is taken
/// from `axis × ref` where `ref` is world +X, or +Y if the axis is within
/// `acos(0.9)` of X.
///
/// # Errors
///
/// [`MathError::ZeroAxis`] if `axis` has zero length, and
/// [`MathError::DegenerateBasis`] if `u` or `v` stay near-zero after the
/// fallbacks.
pub fn orthonormal_basis(axis: Vec3, preferred_up: Vec3) -> Result<Basis, MathError> {
    let a = normalize(axis);
    if is_zero(&a) {
        return Err(MathError::ZeroAxis(axis.into()));
    }

    let projected = preferred_up - a * preferred_up.dot(&a);
    let mut v = if projected.norm() > PROJECTION_LENGTH {
        normalize(projected)
    } else {
        normalize(a.cross(&reference_axis(&a, Vec3::x(), Vec3::y())))
    };
    let mut u = normalize(v.cross(&a));

    if is_zero(&u) || is_zero(&v) {
        v = normalize(a.cross(&reference_axis(&a, Vec3::y(), Vec3::x())));
        u = normalize(v.cross(&a));
    }

    if is_zero(&u) || is_zero(&v) {
        return Err(MathError::DegenerateBasis(axis.into()));
    }

    Ok(Basis { u, v, axis: a })
}

/// `primary` unless it is nearly parallel to `axis`, then `secondary`.
fn reference_axis(axis: &Vec3, primary: Vec3, secondary: Vec3) -> Vec3 {
    if axis.dot(&primary).abs() > PARALLEL_COSINE {
        secondary
    } else {
        primary
    }
}

/// Distance between two points projected onto the XY plane.
pub fn planar_distance(a: &Point3, b: &Point3) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Tolerance settings for hole detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Planar distance (mm) under which two circle centers are the same hole.
    pub center: f64,
}

impl Tolerance {
    /// Default hole-merge tolerance of 0.1 mm.
    pub const DEFAULT: Self = Self { center: 0.1 };

    /// Whether `a` and `b` coincide in XY. The boundary is inclusive.
    pub fn same_hole(&self, a: &Point3, b: &Point3) -> bool {
        planar_distance(a, b) <= self.center
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
