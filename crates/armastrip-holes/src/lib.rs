#![warn(missing_docs)]

//! Hole detection for armastrip.
//!
//! Turns the circular boundary edges of a perforated strip into an ordered,
//! de-duplicated list of hole centers, then narrows that list with a
//! [`SelectionMode`].
//!
//! # Example
//!
//! ```
//! use armastrip_holes::{extract_holes, filter_holes, Circle, SelectionMode};
//! use armastrip_math::Point3;
//!
//! // Top and bottom rims of two through-holes.
//! let circles = vec![
//!     Circle::new(Point3::new(0.0, 0.0, 0.0), 2.5),
//!     Circle::new(Point3::new(0.0, 0.0, 10.0), 2.5),
//!     Circle::new(Point3::new(20.0, 0.0, 0.0), 2.5),
//!     Circle::new(Point3::new(20.0, 0.0, 10.0), 2.5),
//! ];
//!
//! let holes = extract_holes(&circles, 0.1).unwrap();
//! assert_eq!(holes.len(), 2);
//!
//! let ends = filter_holes(&holes, SelectionMode::Ends).unwrap();
//! assert_eq!(ends.len(), 2);
//! ```

mod extract;
mod select;

pub use extract::{extract_holes, Circle, HoleCenter};
pub use select::{filter_holes, SelectionMode};

use thiserror::Error;

/// Errors from hole extraction and selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoleError {
    /// The boundary has no circular edges.
    #[error("no circular holes found on the strip")]
    NoHolesFound,

    /// A selection parameter violates its precondition.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
