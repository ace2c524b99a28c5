//! Kernel-backed operations: plan, materialize, union and subtract.

use armastrip_cutter::CutterSpec;
use armastrip_strip::{plan_strip, StripParams, StripPlan};

use crate::config::{BoltHoleParams, NutPocketParams};
use crate::error::{FastenerError, Result};
use crate::kernel::{FastenerContext, SolidKernel};
use crate::plan::{plan_bolt_holes, plan_nut_pockets};

/// Result of a cutting operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CutOutcome<S> {
    /// Preview mode: the unioned cutters, nothing subtracted.
    Preview {
        /// Compound of all cutter solids.
        cutters: S,
        /// Number of cutters in the compound.
        count: usize,
    },
    /// The target with every cutter subtracted.
    Cut {
        /// The resulting solid.
        result: S,
        /// Number of cutters subtracted.
        count: usize,
    },
}

impl<S> CutOutcome<S> {
    /// Number of cutters involved.
    pub fn count(&self) -> usize {
        match self {
            CutOutcome::Preview { count, .. } | CutOutcome::Cut { count, .. } => *count,
        }
    }

    /// The produced shape, whichever variant this is.
    pub fn into_shape(self) -> S {
        match self {
            CutOutcome::Preview { cutters, .. } => cutters,
            CutOutcome::Cut { result, .. } => result,
        }
    }
}

/// Cut bolt holes into the selected part at the selected strip's holes.
///
/// The Z extent of the part sets the cutter length and midpoint.
pub fn cut_bolt_holes<K: SolidKernel>(
    ctx: &FastenerContext<'_, K>,
    params: &BoltHoleParams,
) -> Result<CutOutcome<K::Shape>> {
    let (part, strip) = ctx.part_and_strip()?;
    let kernel = ctx.kernel();

    let extent = kernel.bounds(part)?.z_extent();
    let circles = kernel.circular_edges(strip)?;
    let cutters = plan_bolt_holes(&circles, extent, params)?;

    apply_cutters(kernel, part, &cutters, params.preview)
}

/// Cut hex nut pockets into the selected part at the selected strip's holes.
pub fn cut_nut_pockets<K: SolidKernel>(
    ctx: &FastenerContext<'_, K>,
    params: &NutPocketParams,
) -> Result<CutOutcome<K::Shape>> {
    let (part, strip) = ctx.part_and_strip()?;
    let kernel = ctx.kernel();

    let extent = kernel.bounds(part)?.z_extent();
    let circles = kernel.circular_edges(strip)?;
    let cutters = plan_nut_pockets(&circles, extent, params)?;

    apply_cutters(kernel, part, &cutters, params.preview)
}

/// Materialize `cutters`, union them, and subtract the union from `target`
/// unless `preview` is set.
///
/// # Errors
///
/// [`FastenerError::EmptyCutterSet`] if `cutters` is empty; kernel failures
/// are passed through. Nothing is subtracted on error.
pub fn apply_cutters<K: SolidKernel>(
    kernel: &K,
    target: &K::Shape,
    cutters: &[CutterSpec],
    preview: bool,
) -> Result<CutOutcome<K::Shape>> {
    if cutters.is_empty() {
        return Err(FastenerError::EmptyCutterSet);
    }

    let solids = cutters
        .iter()
        .map(|spec| kernel.materialize(spec))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let compound = kernel.compound(solids)?;
    let count = cutters.len();

    if preview {
        tracing::info!("Preview only: {} cutters", count);
        return Ok(CutOutcome::Preview {
            cutters: compound,
            count,
        });
    }

    let result = kernel.subtract(target, &compound)?;
    tracing::info!("Done: subtracted {} cutters", count);
    Ok(CutOutcome::Cut { result, count })
}

/// Plan a strip and build it: body prism minus one cylinder per hole.
pub fn build_strip<K: SolidKernel>(kernel: &K, params: &StripParams) -> Result<(StripPlan, K::Shape)> {
    let plan = plan_strip(params)?;
    let body = kernel.materialize(&plan.body_spec())?;
    let solid = apply_cutters(kernel, &body, &plan.hole_specs(), false)?.into_shape();

    tracing::info!(
        "Built strip: holes={}, pitch={}, length={}, x_offset={}",
        plan.hole_count,
        plan.params.hole_pitch,
        plan.length,
        plan.x_offset
    );
    Ok((plan, solid))
}
