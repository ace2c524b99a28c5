//! Cutter synthesis: place a profile around a hole center.

use serde::{Deserialize, Serialize};

use armastrip_math::{is_zero, normalize, orthonormal_basis, Basis, MathError, Point2, Point3, Vec3};

use crate::profile::{hex_profile_2d, round_profile, teardrop_profile_2d, CutterProfile};
use crate::{CutterError, CutterSpec};

/// Default tessellation of the teardrop arc.
pub const DEFAULT_TEARDROP_STEPS: u32 = 32;

fn default_teardrop_steps() -> u32 {
    DEFAULT_TEARDROP_STEPS
}

fn default_print_up() -> Vec3 {
    Vec3::y()
}

/// Cross-section used for bolt holes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum HoleShape {
    /// Plain round hole, cut with a cylinder.
    #[default]
    Round,
    /// Teardrop hole with its tip pointing toward `print_up`, to avoid
    /// unsupported overhangs when the hole axis lies flat on the print bed.
    ///
    /// `print_up` is projected off the hole axis. If it is parallel to the
    /// axis the tip direction falls back to a world reference axis, so pick
    /// a direction across the hole (the default, +Y, suits Z-axis holes).
    Teardrop {
        /// Number of arc segments.
        #[serde(default = "default_teardrop_steps")]
        steps: u32,
        /// Build direction the tip should point along.
        #[serde(default = "default_print_up")]
        print_up: Vec3,
    },
}

impl HoleShape {
    /// Cross-section of a hole of `radius` in this shape.
    pub fn profile(&self, radius: f64) -> CutterProfile {
        match self {
            HoleShape::Round => round_profile(radius),
            HoleShape::Teardrop { steps, .. } => {
                CutterProfile::Outline(teardrop_profile_2d(radius, *steps))
            }
        }
    }

    /// Build a cutter of this shape centered on `center` along `axis`.
    pub fn cutter(
        &self,
        center: Point3,
        axis: Vec3,
        radius: f64,
        length: f64,
    ) -> Result<CutterSpec, CutterError> {
        match self.profile(radius) {
            CutterProfile::Round { radius } => make_cylinder_cutter(center, axis, radius, length),
            CutterProfile::Outline(profile) => {
                make_profile_prism(center, axis, self.print_up(), profile, length)
            }
        }
    }

    fn print_up(&self) -> Vec3 {
        match self {
            HoleShape::Round => default_print_up(),
            HoleShape::Teardrop { print_up, .. } => *print_up,
        }
    }
}

/// A cylinder of `radius` centered on `center`, spanning `length` along
/// `axis`.
///
/// # Errors
///
/// Returns [`CutterError::DegenerateGeometry`] if `axis` has zero length.
pub fn make_cylinder_cutter(
    center: Point3,
    axis: Vec3,
    radius: f64,
    length: f64,
) -> Result<CutterSpec, CutterError> {
    let a = normalize(axis);
    if is_zero(&a) {
        return Err(MathError::ZeroAxis(axis.into()).into());
    }
    let base = center - a * (length * 0.5);
    Ok(CutterSpec::Cylinder {
        center,
        base,
        axis: a,
        radius,
        length,
    })
}

/// A teardrop prism centered on `center`, spanning `length` along `axis`,
/// with its tip pointing as close to `preferred_up` as the axis allows.
///
/// # Errors
///
/// Returns [`CutterError::DegenerateGeometry`] if no basis can be built
/// around `axis`.
pub fn make_prism_cutter(
    center: Point3,
    axis: Vec3,
    preferred_up: Vec3,
    radius: f64,
    length: f64,
    steps: u32,
) -> Result<CutterSpec, CutterError> {
    make_profile_prism(
        center,
        axis,
        preferred_up,
        teardrop_profile_2d(radius, steps),
        length,
    )
}

/// Place an arbitrary closed outline perpendicular to `axis` and center the
/// extrusion on `center`.
///
/// # Errors
///
/// Returns [`CutterError::DegenerateGeometry`] if no basis can be built
/// around `axis`.
pub fn make_profile_prism(
    center: Point3,
    axis: Vec3,
    preferred_up: Vec3,
    profile_2d: Vec<Point2>,
    length: f64,
) -> Result<CutterSpec, CutterError> {
    let basis = orthonormal_basis(axis, preferred_up)?;
    let base_center = center - basis.axis * (length * 0.5);
    Ok(make_placed_prism(&basis, base_center, profile_2d, length))
}

/// A hexagonal pocket cutter in the XY plane at `base_center`, extruded +Z
/// by `height`.
pub fn make_hex_pocket_cutter(base_center: Point3, circumradius: f64, height: f64) -> CutterSpec {
    make_placed_prism(
        &Basis::world_xy(),
        base_center,
        hex_profile_2d(circumradius),
        height,
    )
}

/// Place a closed outline on `basis` with its plane through `base_center`,
/// extruded `length` along `basis.axis` (not centered).
pub fn make_placed_prism(
    basis: &Basis,
    base_center: Point3,
    profile_2d: Vec<Point2>,
    length: f64,
) -> CutterSpec {
    let outline = profile_2d
        .iter()
        .map(|p| basis.to_3d(&base_center, p))
        .collect();
    CutterSpec::Prism {
        base_center,
        axis: basis.axis,
        basis_u: basis.u,
        basis_v: basis.v,
        profile_2d,
        outline,
        length,
    }
}
