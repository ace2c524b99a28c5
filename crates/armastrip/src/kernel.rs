//! Geometry-kernel collaborator traits and the selection context.
//!
//! The planner never touches solids. A host implements [`ShapeQuery`] to
//! report a shape's circular edges and bounds, and [`SolidKernel`] to turn
//! [`CutterSpec`]s into solids and subtract them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use armastrip_cutter::CutterSpec;
use armastrip_holes::Circle;
use armastrip_math::Point3;

use crate::error::{FastenerError, Result};

/// A failure reported by the host geometry kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("geometry kernel: {0}")]
pub struct KernelError(pub String);

impl KernelError {
    /// Wrap a kernel failure message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Axis-aligned bounding box of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Bounds3 {
    /// Bounds from two corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Extent along Z, the cut axis for flat strips.
    pub fn z_extent(&self) -> AxisExtent {
        AxisExtent::new(self.min.z, self.max.z)
    }
}

/// Min/max of a shape along the cut axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    /// Lowest coordinate.
    pub min: f64,
    /// Highest coordinate.
    pub max: f64,
}

impl AxisExtent {
    /// Extent from `min` to `max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max − min`.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Halfway between `min` and `max`.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

/// Read-only queries against host shapes.
pub trait ShapeQuery {
    /// The host's shape handle.
    type Shape;

    /// Every circular edge of `shape`.
    fn circular_edges(&self, shape: &Self::Shape) -> std::result::Result<Vec<Circle>, KernelError>;

    /// Axis-aligned bounds of `shape`.
    fn bounds(&self, shape: &Self::Shape) -> std::result::Result<Bounds3, KernelError>;

    /// Whether `shape` is empty or invalid.
    fn is_null(&self, shape: &Self::Shape) -> bool;
}

/// Solid construction and boolean subtraction.
pub trait SolidKernel: ShapeQuery {
    /// Build a solid from a cutter descriptor, dispatching on its kind.
    fn materialize(&self, spec: &CutterSpec) -> std::result::Result<Self::Shape, KernelError>;

    /// Combine solids into one compound.
    fn compound(&self, shapes: Vec<Self::Shape>) -> std::result::Result<Self::Shape, KernelError>;

    /// `target − tool`.
    fn subtract(
        &self,
        target: &Self::Shape,
        tool: &Self::Shape,
    ) -> std::result::Result<Self::Shape, KernelError>;
}

/// The kernel plus the ordered user selection an operation runs against.
///
/// Selection order matters: the target part first, then the strip.
pub struct FastenerContext<'a, K: ShapeQuery> {
    kernel: &'a K,
    selection: &'a [K::Shape],
}

impl<'a, K: ShapeQuery> FastenerContext<'a, K> {
    /// Context over `selection`.
    pub fn new(kernel: &'a K, selection: &'a [K::Shape]) -> Self {
        Self { kernel, selection }
    }

    /// The geometry kernel.
    pub fn kernel(&self) -> &'a K {
        self.kernel
    }

    /// The selected `(part, strip)` pair.
    ///
    /// # Errors
    ///
    /// [`FastenerError::InvalidSelection`] unless exactly two shapes are
    /// selected, [`FastenerError::NullShape`] if either is null.
    pub fn part_and_strip(&self) -> Result<(&'a K::Shape, &'a K::Shape)> {
        let [part, strip] = self.selection else {
            return Err(FastenerError::InvalidSelection {
                count: self.selection.len(),
            });
        };
        if self.kernel.is_null(part) || self.kernel.is_null(strip) {
            return Err(FastenerError::NullShape);
        }
        Ok((part, strip))
    }
}
