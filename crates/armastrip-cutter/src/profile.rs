//! 2D cross-section profiles for cutters.

use std::f64::consts::SQRT_2;

use armastrip_math::Point2;

/// Start of the teardrop arc, in degrees.
const TEARDROP_ARC_START: f64 = 135.0;
/// End of the teardrop arc (360 + 45), in degrees.
const TEARDROP_ARC_END: f64 = 405.0;

/// Cross-section of a cutter.
#[derive(Debug, Clone, PartialEq)]
pub enum CutterProfile {
    /// A true circle; materialized as a cylinder.
    Round {
        /// Circle radius.
        radius: f64,
    },
    /// A closed polyline in profile-plane `(u, v)` coordinates.
    Outline(Vec<Point2>),
}

/// A round profile. Carries only the radius; no polyline is generated.
pub fn round_profile(radius: f64) -> CutterProfile {
    CutterProfile::Round { radius }
}

/// Closed teardrop outline with its tip pointing along +V.
///
/// Samples `steps + 1` points on the 270° arc from 135° to 405°, appends the
/// apex `(0, √2·r)` (where the tangents from the arc ends at 45° meet), and
/// repeats the first point to close the loop. The result has `steps + 3`
/// points.
///
/// `steps` should be at least 1; with fewer than 3 steps the outline
/// degenerates (zero area or self-intersecting). This is not checked.
pub fn teardrop_profile_2d(radius: f64, steps: u32) -> Vec<Point2> {
    let a0 = TEARDROP_ARC_START.to_radians();
    let a1 = TEARDROP_ARC_END.to_radians();
    let steps_f = steps as f64;

    let mut pts: Vec<Point2> = (0..=steps)
        .map(|i| {
            let a = a0 + (a1 - a0) * (i as f64 / steps_f);
            Point2::new(radius * a.cos(), radius * a.sin())
        })
        .collect();

    pts.push(Point2::new(0.0, SQRT_2 * radius));
    pts.push(pts[0]);
    pts
}

/// Closed hexagon outline with vertices at `60°·k` on `circumradius`.
pub fn hex_profile_2d(circumradius: f64) -> Vec<Point2> {
    let mut pts: Vec<Point2> = (0..6)
        .map(|k| {
            let a = (60.0 * k as f64).to_radians();
            Point2::new(circumradius * a.cos(), circumradius * a.sin())
        })
        .collect();
    pts.push(pts[0]);
    pts
}

/// Circumradius of a regular hexagon with the given across-flats width.
pub fn hex_circumradius(across_flats: f64) -> f64 {
    (across_flats / 2.0) / 30f64.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_profile_has_no_outline() {
        assert_eq!(round_profile(2.0), CutterProfile::Round { radius: 2.0 });
    }

    #[test]
    fn test_teardrop_is_closed() {
        for steps in [1, 2, 3, 8, 24, 97] {
            let pts = teardrop_profile_2d(1.75, steps);
            assert_eq!(pts.len(), steps as usize + 3);
            assert_eq!(pts.first(), pts.last());
        }
    }

    #[test]
    fn test_teardrop_arc_and_apex() {
        let r = 2.0;
        let pts = teardrop_profile_2d(r, 6);
        let h = r * SQRT_2 / 2.0;

        assert_abs_diff_eq!(pts[0].x, -h, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[0].y, h, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[6].x, h, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[6].y, h, epsilon = 1e-12);
        // 135° + 3 * 45° = 270°, straight down
        assert_abs_diff_eq!(pts[3].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[3].y, -r, epsilon = 1e-12);

        let apex = pts[7];
        assert_abs_diff_eq!(apex.x, 0.0);
        assert_abs_diff_eq!(apex.y, SQRT_2 * r, epsilon = 1e-12);

        for p in &pts[..7] {
            assert_abs_diff_eq!(p.coords.norm(), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_teardrop_is_symmetric_about_v() {
        let pts = teardrop_profile_2d(3.0, 10);
        for i in 0..=10 {
            let a = pts[i];
            let b = pts[10 - i];
            assert_abs_diff_eq!(a.x, -b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hex_profile() {
        let pts = hex_profile_2d(4.0);
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[0], pts[6]);
        assert_abs_diff_eq!(pts[0].x, 4.0);
        assert_abs_diff_eq!(pts[3].x, -4.0, epsilon = 1e-12);
        for p in &pts {
            assert_abs_diff_eq!(p.coords.norm(), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hex_circumradius() {
        // M3 nut: 5.5 mm across flats
        assert_abs_diff_eq!(hex_circumradius(5.5), 3.175426, epsilon = 1e-6);
        let r = hex_circumradius(10.0);
        let flat_distance = r * 30f64.to_radians().cos();
        assert_abs_diff_eq!(flat_distance, 5.0, epsilon = 1e-12);
    }
}
