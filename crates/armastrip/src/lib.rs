#![warn(missing_docs)]

//! Fastener cutter planning for perforated ArmaStrip mounting strips.
//!
//! Given the circular edges of a strip and the extent of a target part,
//! plans placed cutters (round or teardrop bolt holes, hex nut pockets) and
//! hands them to a host geometry kernel for a boolean subtraction.
//!
//! # Example
//!
//! ```
//! use armastrip::{plan_bolt_holes, AxisExtent, BoltHoleParams};
//! use armastrip::strip::{plan_strip, StripParams};
//!
//! let strip = plan_strip(&StripParams::default()).unwrap();
//! let cutters = plan_bolt_holes(
//!     &strip.rim_circles(),
//!     AxisExtent::new(0.0, 6.0),
//!     &BoltHoleParams::default(),
//! )
//! .unwrap();
//! assert_eq!(cutters.len(), 3);
//! ```

pub use armastrip_cutter as cutter;
pub use armastrip_holes as holes;
pub use armastrip_math as math;
pub use armastrip_strip as strip;

mod config;
mod error;
mod kernel;
mod ops;
mod plan;

pub use armastrip_cutter::{CutterKind, CutterSpec, HoleShape};
pub use armastrip_holes::{Circle, HoleCenter, SelectionMode};
pub use config::{BoltHoleParams, FastenerConfig, NutPocketParams, PocketSide};
pub use error::{FastenerError, Result};
pub use kernel::{AxisExtent, Bounds3, FastenerContext, KernelError, ShapeQuery, SolidKernel};
pub use ops::{apply_cutters, build_strip, cut_bolt_holes, cut_nut_pockets, CutOutcome};
pub use plan::{plan_bolt_holes, plan_nut_pockets};
