#![warn(missing_docs)]

//! Layout of constant-width perforated strips.
//!
//! A strip is a flat bar in the XY plane, `thickness` thick along +Z, with a
//! row of through-holes on the X axis. Holes sit half a pitch from each cut
//! point so a strip can be shortened between any two holes.
//!
//! # Example
//!
//! ```
//! use armastrip_strip::{plan_strip, StripLayout, StripParams};
//!
//! let params = StripParams {
//!     layout: StripLayout::Holes { count: 4 },
//!     ..Default::default()
//! };
//! let plan = plan_strip(&params).unwrap();
//! assert_eq!(plan.hole_count, 4);
//! assert_eq!(plan.length, 60.0);
//! ```

mod layout;

pub use layout::{plan_strip, StripLayout, StripParams, StripPlan, MAX_HOLES, MAX_LENGTH};

use thiserror::Error;

/// Errors from strip planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StripError {
    /// A strip dimension is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
