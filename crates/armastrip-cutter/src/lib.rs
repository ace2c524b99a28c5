#![warn(missing_docs)]

//! Cutter synthesis for armastrip.
//!
//! Builds kernel-agnostic [`CutterSpec`] descriptors: a cylinder, or a
//! planar profile placed on an orthonormal basis and extruded along an
//! axis. A geometry kernel materializes them; nothing here touches solids.
//!
//! # Example
//!
//! ```
//! use armastrip_cutter::{make_cylinder_cutter, CutterSpec};
//! use armastrip_math::{Point3, Vec3};
//!
//! let cutter = make_cylinder_cutter(Point3::new(5.0, 0.0, 2.0), Vec3::z(), 1.6, 6.0).unwrap();
//! match cutter {
//!     CutterSpec::Cylinder { base, .. } => assert_eq!(base, Point3::new(5.0, 0.0, -1.0)),
//!     CutterSpec::Prism { .. } => unreachable!(),
//! }
//! ```

mod profile;
mod spec;
mod synth;

pub use profile::{
    hex_circumradius, hex_profile_2d, round_profile, teardrop_profile_2d, CutterProfile,
};
pub use spec::{CutterKind, CutterSpec};
pub use synth::{
    make_cylinder_cutter, make_hex_pocket_cutter, make_placed_prism, make_prism_cutter,
    make_profile_prism, HoleShape, DEFAULT_TEARDROP_STEPS,
};

use armastrip_math::MathError;
use thiserror::Error;

/// Errors from cutter synthesis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutterError {
    /// The cutter axis or its basis is degenerate.
    #[error(transparent)]
    DegenerateGeometry(#[from] MathError),
}
