//! Fastener planning: strip circles and part extent in, cutter specs out.

use armastrip_cutter::{make_hex_pocket_cutter, CutterSpec};
use armastrip_holes::{extract_holes, filter_holes, Circle, HoleCenter, SelectionMode};
use armastrip_math::{Point3, Vec3};

use crate::config::{BoltHoleParams, NutPocketParams, PocketSide};
use crate::error::{FastenerError, Result};
use crate::kernel::AxisExtent;

/// Cut axis for flat strips.
const CUT_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Bolt hole cutters through a part of the given Z `extent`.
///
/// Each selected hole gets a cutter of radius `(diameter + clearance) / 2`
/// centered at the extent midpoint, long enough to overshoot both faces by
/// `z_extra`.
///
/// # Errors
///
/// Fails on invalid parameters, when the strip has no holes, when the
/// selection is invalid, or with [`FastenerError::EmptyCutterSet`] when no
/// cutter results.
pub fn plan_bolt_holes(
    circles: &[Circle],
    extent: AxisExtent,
    params: &BoltHoleParams,
) -> Result<Vec<CutterSpec>> {
    params.validate()?;

    let radius = params.hole_radius();
    let length = extent.length() + 2.0 * params.z_extra;
    let mid_z = extent.midpoint();

    let centers = select_centers(circles, params.center_tol, params.selection)?;
    let cutters = centers
        .iter()
        .map(|hole| {
            let center = Point3::new(hole.position.x, hole.position.y, mid_z);
            params.shape.cutter(center, CUT_AXIS, radius, length)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    non_empty(cutters)
}

/// Hex nut pocket cutters sunk into the top or bottom face of a part.
///
/// Every pocket is `depth + offset` tall. A top pocket ends flush with the
/// top face, so `offset` deepens it. A bottom pocket starts `offset` below
/// the bottom face and reaches `depth` into the part.
///
/// # Errors
///
/// Same as [`plan_bolt_holes`].
pub fn plan_nut_pockets(
    circles: &[Circle],
    extent: AxisExtent,
    params: &NutPocketParams,
) -> Result<Vec<CutterSpec>> {
    params.validate()?;

    let circumradius = params.circumradius();
    let height = params.depth + params.offset;
    let base_z = match params.side {
        PocketSide::Top => extent.max - params.depth - params.offset,
        PocketSide::Bottom => extent.min - params.offset,
    };

    let centers = select_centers(circles, params.center_tol, params.selection)?;
    let cutters = centers
        .iter()
        .map(|hole| {
            let base = Point3::new(hole.position.x, hole.position.y, base_z);
            make_hex_pocket_cutter(base, circumradius, height)
        })
        .collect();

    non_empty(cutters)
}

fn select_centers(
    circles: &[Circle],
    center_tol: f64,
    mode: SelectionMode,
) -> Result<Vec<HoleCenter>> {
    let holes = extract_holes(circles, center_tol)?;
    tracing::info!("Detected {} hole centers", holes.len());

    let selected = filter_holes(&holes, mode)?;
    tracing::info!(
        "Using {} of {} detected hole centers (mode: {})",
        selected.len(),
        holes.len(),
        mode.name()
    );
    Ok(selected)
}

fn non_empty(cutters: Vec<CutterSpec>) -> Result<Vec<CutterSpec>> {
    if cutters.is_empty() {
        return Err(FastenerError::EmptyCutterSet);
    }
    Ok(cutters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use armastrip_cutter::{CutterKind, HoleShape};

    fn strip_rims(xs: &[f64]) -> Vec<Circle> {
        xs.iter()
            .flat_map(|&x| {
                [
                    Circle::new(Point3::new(x, 0.0, 0.0), 2.5),
                    Circle::new(Point3::new(x, 0.0, 0.8), 2.5),
                ]
            })
            .collect()
    }

    #[test]
    fn test_bolt_holes_span_part() {
        let circles = strip_rims(&[7.5, 22.5, 37.5]);
        let cutters = plan_bolt_holes(&circles, AxisExtent::new(2.0, 10.0), &BoltHoleParams::default()).unwrap();
        assert_eq!(cutters.len(), 3);

        for (cutter, x) in cutters.iter().zip([7.5, 22.5, 37.5]) {
            let CutterSpec::Cylinder { center, base, radius, length, .. } = cutter else {
                panic!("expected a cylinder");
            };
            assert_abs_diff_eq!(center.x, x);
            assert_abs_diff_eq!(center.z, 6.0);
            assert_abs_diff_eq!(*radius, 1.6);
            // 8 mm part + 1 mm margin each side
            assert_abs_diff_eq!(*length, 10.0);
            assert_abs_diff_eq!(base.z, 1.0);
        }
    }

    #[test]
    fn test_bolt_holes_follow_selection() {
        let circles = strip_rims(&[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let params = BoltHoleParams {
            selection: SelectionMode::step(3, 1),
            ..Default::default()
        };
        let cutters = plan_bolt_holes(&circles, AxisExtent::new(0.0, 5.0), &params).unwrap();
        let xs: Vec<f64> = cutters.iter().map(|c| c.base().x).collect();
        assert_eq!(xs, vec![0.0, 30.0, 60.0]);
    }

    #[test]
    fn test_bolt_holes_teardrop() {
        let params = BoltHoleParams {
            shape: HoleShape::Teardrop { steps: 12, print_up: Vec3::y() },
            ..Default::default()
        };
        let cutters = plan_bolt_holes(&strip_rims(&[5.0]), AxisExtent::new(0.0, 4.0), &params).unwrap();
        assert_eq!(cutters[0].kind(), CutterKind::Prism);
        assert_abs_diff_eq!(cutters[0].base().z, -1.0);
        assert_abs_diff_eq!(cutters[0].length(), 6.0);
    }

    #[test]
    fn test_bolt_holes_errors() {
        let extent = AxisExtent::new(0.0, 1.0);
        assert!(matches!(
            plan_bolt_holes(&[], extent, &BoltHoleParams::default()),
            Err(FastenerError::NoHolesFound)
        ));

        let params = BoltHoleParams {
            selection: SelectionMode::step(3, 3),
            ..Default::default()
        };
        assert!(matches!(
            plan_bolt_holes(&strip_rims(&[0.0, 10.0, 20.0, 30.0]), extent, &params),
            Err(FastenerError::InvalidParameter(_))
        ));

        let params = BoltHoleParams {
            bolt_diameter: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            plan_bolt_holes(&strip_rims(&[0.0]), extent, &params),
            Err(FastenerError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_nut_pockets_top() {
        let params = NutPocketParams {
            offset: 0.5,
            ..Default::default()
        };
        let cutters = plan_nut_pockets(&strip_rims(&[7.5, 22.5]), AxisExtent::new(0.0, 6.0), &params).unwrap();
        assert_eq!(cutters.len(), 2);
        for cutter in &cutters {
            assert_eq!(cutter.kind(), CutterKind::Prism);
            assert_abs_diff_eq!(cutter.base().z, 3.0);
            assert_abs_diff_eq!(cutter.length(), 3.0);
            assert_abs_diff_eq!((cutter.axis() - Vec3::z()).norm(), 0.0);
        }
    }

    #[test]
    fn test_nut_pockets_bottom() {
        let params = NutPocketParams {
            side: PocketSide::Bottom,
            offset: 0.25,
            ..Default::default()
        };
        let cutters = plan_nut_pockets(&strip_rims(&[0.0]), AxisExtent::new(-1.0, 6.0), &params).unwrap();
        assert_abs_diff_eq!(cutters[0].base().z, -1.25);
        assert_abs_diff_eq!(cutters[0].length(), 2.75);

        let CutterSpec::Prism { outline, .. } = &cutters[0] else {
            panic!("expected a prism");
        };
        assert_abs_diff_eq!(outline[0].x, params.circumradius(), epsilon = 1e-12);
    }

    #[test]
    fn test_nut_pockets_ends() {
        let params = NutPocketParams {
            selection: SelectionMode::Ends,
            ..Default::default()
        };
        let cutters = plan_nut_pockets(&strip_rims(&[0.0, 15.0, 30.0, 45.0, 60.0]), AxisExtent::new(0.0, 3.0), &params)
            .unwrap();
        let xs: Vec<f64> = cutters.iter().map(|c| c.base().x).collect();
        assert_eq!(xs, vec![0.0, 60.0]);
    }
}
