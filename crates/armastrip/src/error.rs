//! Error types for fastener operations.

use thiserror::Error;

use armastrip_cutter::CutterError;
use armastrip_holes::HoleError;
use armastrip_math::MathError;
use armastrip_strip::StripError;

use crate::kernel::KernelError;

/// Errors from planning or applying fastener cuts.
///
/// Every error aborts the whole operation before anything is subtracted.
#[derive(Debug, Error)]
pub enum FastenerError {
    /// The strip has no circular edges.
    #[error("no circular holes found on the strip")]
    NoHolesFound,

    /// An axis or derived basis vector is degenerate.
    #[error(transparent)]
    DegenerateGeometry(MathError),

    /// A parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No cutters were produced, so there is nothing to subtract.
    #[error("no cutters were produced; nothing to subtract")]
    EmptyCutterSet,

    /// The selection is not exactly a target part followed by a strip.
    #[error("select the target part first, then the strip (got {count} shapes)")]
    InvalidSelection {
        /// Number of selected shapes.
        count: usize,
    },

    /// A selected shape is null.
    #[error("selection contains an invalid shape")]
    NullShape,

    /// The geometry kernel failed.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// A configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fastener operations.
pub type Result<T> = std::result::Result<T, FastenerError>;

impl From<HoleError> for FastenerError {
    fn from(err: HoleError) -> Self {
        match err {
            HoleError::NoHolesFound => FastenerError::NoHolesFound,
            HoleError::InvalidParameter(msg) => FastenerError::InvalidParameter(msg),
        }
    }
}

impl From<MathError> for FastenerError {
    fn from(err: MathError) -> Self {
        FastenerError::DegenerateGeometry(err)
    }
}

impl From<CutterError> for FastenerError {
    fn from(err: CutterError) -> Self {
        match err {
            CutterError::DegenerateGeometry(e) => FastenerError::DegenerateGeometry(e),
        }
    }
}

impl From<StripError> for FastenerError {
    fn from(err: StripError) -> Self {
        match err {
            StripError::InvalidParameter(msg) => FastenerError::InvalidParameter(msg),
        }
    }
}

impl From<toml::de::Error> for FastenerError {
    fn from(err: toml::de::Error) -> Self {
        FastenerError::Config(err.to_string())
    }
}
