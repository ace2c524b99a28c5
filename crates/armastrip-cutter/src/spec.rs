//! Placed cutter descriptors handed to the geometry kernel.

use serde::{Deserialize, Serialize};

use armastrip_math::{Point2, Point3, Vec3};

/// Discriminant of a [`CutterSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutterKind {
    /// A circular cylinder.
    Cylinder,
    /// An extruded polygon.
    Prism,
}

/// A placed solid descriptor.
///
/// The kernel builds a solid from each spec and subtracts their union from
/// the target part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CutterSpec {
    /// A cylinder of `radius` from `base` to `base + axis·length`.
    Cylinder {
        /// Midpoint of the cylinder.
        center: Point3,
        /// Center of the start cap (`center − axis·length/2`).
        base: Point3,
        /// Unit axis.
        axis: Vec3,
        /// Cylinder radius.
        radius: f64,
        /// Cylinder length along `axis`.
        length: f64,
    },
    /// A closed outline in the plane through `base_center`, extruded along
    /// `axis·length`.
    Prism {
        /// Origin of the profile plane.
        base_center: Point3,
        /// Unit extrusion axis.
        axis: Vec3,
        /// In-plane U direction.
        basis_u: Vec3,
        /// In-plane V direction.
        basis_v: Vec3,
        /// The outline in `(u, v)` coordinates.
        profile_2d: Vec<Point2>,
        /// The outline mapped to 3D: `base_center + U·u + V·v`.
        outline: Vec<Point3>,
        /// Extrusion length along `axis`.
        length: f64,
    },
}

impl CutterSpec {
    /// Which variant this is.
    pub fn kind(&self) -> CutterKind {
        match self {
            CutterSpec::Cylinder { .. } => CutterKind::Cylinder,
            CutterSpec::Prism { .. } => CutterKind::Prism,
        }
    }

    /// Unit direction the solid extends along.
    pub fn axis(&self) -> Vec3 {
        match self {
            CutterSpec::Cylinder { axis, .. } | CutterSpec::Prism { axis, .. } => *axis,
        }
    }

    /// Length of the solid along its axis.
    pub fn length(&self) -> f64 {
        match self {
            CutterSpec::Cylinder { length, .. } | CutterSpec::Prism { length, .. } => *length,
        }
    }

    /// Start point of the solid along its axis.
    pub fn base(&self) -> Point3 {
        match self {
            CutterSpec::Cylinder { base, .. } => *base,
            CutterSpec::Prism { base_center, .. } => *base_center,
        }
    }

    /// Sweep vector from the base cap to the far cap (`axis·length`).
    pub fn extrusion(&self) -> Vec3 {
        self.axis() * self.length()
    }
}
