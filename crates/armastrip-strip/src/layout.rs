//! Strip parameters and hole layout.

use serde::{Deserialize, Serialize};

use armastrip_cutter::{make_placed_prism, CutterSpec};
use armastrip_holes::Circle;
use armastrip_math::{Basis, Point2, Point3, Vec3};

use crate::StripError;

/// Most holes a strip may have.
pub const MAX_HOLES: usize = 500;

/// Longest strip that may be planned (mm).
pub const MAX_LENGTH: f64 = 5000.0;

/// How the strip length is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StripLayout {
    /// Exactly `count` holes; the strip is `count · pitch` long and both
    /// ends fall midway between holes.
    Holes {
        /// Number of holes (at least one is always made).
        count: usize,
    },
    /// A strip of the given length with as many holes as fit at the pitch,
    /// the pattern centered along the length.
    Length {
        /// Overall strip length (mm).
        length: f64,
    },
}

impl Default for StripLayout {
    fn default() -> Self {
        StripLayout::Holes { count: 3 }
    }
}

/// Strip dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripParams {
    /// Length selection.
    pub layout: StripLayout,
    /// Hole diameter (mm).
    pub hole_diameter: f64,
    /// Center-to-center hole spacing (mm).
    pub hole_pitch: f64,
    /// Extent along Z (mm).
    pub thickness: f64,
    /// Extent along Y (mm).
    pub width: f64,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            layout: StripLayout::default(),
            hole_diameter: 5.0,
            hole_pitch: 15.0,
            thickness: 0.8,
            width: 12.0,
        }
    }
}

impl StripParams {
    /// Check that every dimension is finite and positive, and that the
    /// layout stays within [`MAX_HOLES`] and [`MAX_LENGTH`].
    pub fn validate(&self) -> Result<(), StripError> {
        let positive = [
            ("hole_pitch", self.hole_pitch),
            ("hole_diameter", self.hole_diameter),
            ("thickness", self.thickness),
            ("width", self.width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(StripError::InvalidParameter(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        match self.layout {
            StripLayout::Holes { count } if count > MAX_HOLES => {
                Err(StripError::InvalidParameter(format!(
                    "hole count must be <= {MAX_HOLES}, got {count}"
                )))
            }
            StripLayout::Length { length }
                if !length.is_finite() || length <= 0.0 || length > MAX_LENGTH =>
            {
                Err(StripError::InvalidParameter(format!(
                    "strip length must be in (0, {MAX_LENGTH}], got {length}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A resolved strip layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripPlan {
    /// The parameters this plan was made from.
    pub params: StripParams,
    /// Number of holes.
    pub hole_count: usize,
    /// Final strip length along X (mm).
    pub length: f64,
    /// Shift of the hole pattern from the `count · pitch` band (mm).
    pub x_offset: f64,
}

/// Resolve hole count, strip length and pattern offset.
///
/// In [`StripLayout::Length`] mode the hole count is `length / pitch`
/// rounded half-to-even, never less than one.
///
/// # Errors
///
/// Returns [`StripError::InvalidParameter`] if any dimension is not finite
/// and positive, or if the layout needs more than [`MAX_HOLES`] holes.
pub fn plan_strip(params: &StripParams) -> Result<StripPlan, StripError> {
    params.validate()?;

    let (hole_count, length, x_offset) = match params.layout {
        StripLayout::Holes { count } => {
            let n = count.max(1);
            (n, n as f64 * params.hole_pitch, 0.0)
        }
        StripLayout::Length { length } => {
            let fit = (length / params.hole_pitch).round_ties_even();
            if fit > MAX_HOLES as f64 {
                return Err(StripError::InvalidParameter(format!(
                    "{length} mm at pitch {} needs {fit} holes, more than {MAX_HOLES}",
                    params.hole_pitch
                )));
            }
            let n = (fit as usize).max(1);
            let band = n as f64 * params.hole_pitch;
            (n, length, 0.5 * (length - band))
        }
    };

    Ok(StripPlan {
        params: *params,
        hole_count,
        length,
        x_offset,
    })
}

impl StripPlan {
    /// Hole radius (mm).
    pub fn hole_radius(&self) -> f64 {
        self.params.hole_diameter * 0.5
    }

    /// Hole centers on the bottom face (z = 0), ordered along +X.
    pub fn hole_centers(&self) -> Vec<Point3> {
        (0..self.hole_count)
            .map(|i| {
                let x = self.x_offset + (i as f64 + 0.5) * self.params.hole_pitch;
                Point3::new(x, 0.0, 0.0)
            })
            .collect()
    }

    /// Closed rectangle from `(0, −w/2)` to `(length, w/2)`.
    pub fn outline_2d(&self) -> Vec<Point2> {
        let half = self.params.width * 0.5;
        vec![
            Point2::new(0.0, -half),
            Point2::new(self.length, -half),
            Point2::new(self.length, half),
            Point2::new(0.0, half),
            Point2::new(0.0, -half),
        ]
    }

    /// The strip body before drilling: the outline extruded +Z.
    pub fn body_spec(&self) -> CutterSpec {
        make_placed_prism(
            &Basis::world_xy(),
            Point3::origin(),
            self.outline_2d(),
            self.params.thickness,
        )
    }

    /// One through-hole cylinder per hole, from z = 0 to the top face.
    pub fn hole_specs(&self) -> Vec<CutterSpec> {
        let thickness = self.params.thickness;
        self.hole_centers()
            .into_iter()
            .map(|base| CutterSpec::Cylinder {
                center: base + Vec3::z() * (thickness * 0.5),
                base,
                axis: Vec3::z(),
                radius: self.hole_radius(),
                length: thickness,
            })
            .collect()
    }

    /// Bottom and top rim circles of every hole, as a boundary query of the
    /// drilled strip reports them.
    pub fn rim_circles(&self) -> Vec<Circle> {
        let top = Vec3::z() * self.params.thickness;
        self.hole_centers()
            .into_iter()
            .flat_map(|c| {
                [
                    Circle::new(c, self.hole_radius()),
                    Circle::new(c + top, self.hole_radius()),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use armastrip_cutter::CutterKind;

    fn holes(count: usize) -> StripParams {
        StripParams {
            layout: StripLayout::Holes { count },
            ..Default::default()
        }
    }

    fn length(length: f64) -> StripParams {
        StripParams {
            layout: StripLayout::Length { length },
            ..Default::default()
        }
    }

    #[test]
    fn test_holes_mode() {
        let plan = plan_strip(&holes(3)).unwrap();
        assert_eq!(plan.hole_count, 3);
        assert_abs_diff_eq!(plan.length, 45.0);
        assert_abs_diff_eq!(plan.x_offset, 0.0);

        let xs: Vec<f64> = plan.hole_centers().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![7.5, 22.5, 37.5]);
    }

    #[test]
    fn test_holes_mode_makes_at_least_one() {
        let plan = plan_strip(&holes(0)).unwrap();
        assert_eq!(plan.hole_count, 1);
        assert_abs_diff_eq!(plan.length, 15.0);
    }

    #[test]
    fn test_length_mode_centers_pattern() {
        let plan = plan_strip(&length(50.0)).unwrap();
        // 50 / 15 = 3.33 -> 3 holes in a 45 mm band
        assert_eq!(plan.hole_count, 3);
        assert_abs_diff_eq!(plan.length, 50.0);
        assert_abs_diff_eq!(plan.x_offset, 2.5);
        assert_abs_diff_eq!(plan.hole_centers()[0].x, 10.0);
        assert_abs_diff_eq!(plan.hole_centers()[2].x, 40.0);
    }

    #[test]
    fn test_length_mode_rounds_half_to_even() {
        // 37.5 / 15 = 2.5 -> 2
        let plan = plan_strip(&length(37.5)).unwrap();
        assert_eq!(plan.hole_count, 2);
        // 52.5 / 15 = 3.5 -> 4, pattern overhangs both ends
        let plan = plan_strip(&length(52.5)).unwrap();
        assert_eq!(plan.hole_count, 4);
        assert_abs_diff_eq!(plan.x_offset, -3.75);
    }

    #[test]
    fn test_short_length_keeps_one_hole() {
        let plan = plan_strip(&length(4.0)).unwrap();
        assert_eq!(plan.hole_count, 1);
        assert_abs_diff_eq!(plan.x_offset, -5.5);
    }

    #[test]
    fn test_invalid_dimensions() {
        let bad = StripParams {
            hole_pitch: 0.0,
            ..Default::default()
        };
        assert!(matches!(plan_strip(&bad), Err(StripError::InvalidParameter(_))));

        let bad = StripParams {
            width: -1.0,
            ..Default::default()
        };
        assert!(plan_strip(&bad).is_err());

        assert!(plan_strip(&length(0.0)).is_err());
        let nan = StripParams {
            thickness: f64::NAN,
            ..Default::default()
        };
        assert!(plan_strip(&nan).is_err());
    }

    #[test]
    fn test_unbounded_layouts_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, MAX_LENGTH + 1.0] {
            assert!(matches!(plan_strip(&length(bad)), Err(StripError::InvalidParameter(_))));
        }
        assert!(plan_strip(&length(MAX_LENGTH)).is_ok());

        assert!(matches!(
            plan_strip(&holes(1_000_000_000_000_000)),
            Err(StripError::InvalidParameter(_))
        ));
        assert_eq!(plan_strip(&holes(MAX_HOLES)).unwrap().hole_centers().len(), MAX_HOLES);

        let inf_pitch = StripParams {
            hole_pitch: f64::INFINITY,
            ..Default::default()
        };
        assert!(plan_strip(&inf_pitch).is_err());
    }

    #[test]
    fn test_fine_pitch_cannot_exceed_hole_limit() {
        let params = StripParams {
            layout: StripLayout::Length { length: 100.0 },
            hole_pitch: 0.1,
            ..Default::default()
        };
        assert!(matches!(plan_strip(&params), Err(StripError::InvalidParameter(_))));
    }

    #[test]
    fn test_body_and_hole_specs() {
        let plan = plan_strip(&holes(2)).unwrap();

        let body = plan.body_spec();
        assert_eq!(body.kind(), CutterKind::Prism);
        assert_abs_diff_eq!(body.length(), 0.8);
        let CutterSpec::Prism { outline, .. } = &body else {
            panic!("expected a prism");
        };
        assert_eq!(outline.first(), outline.last());
        assert_abs_diff_eq!(outline[2].x, 30.0);
        assert_abs_diff_eq!(outline[2].y, 6.0);

        let specs = plan.hole_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].base(), Point3::new(22.5, 0.0, 0.0));
        assert_abs_diff_eq!(specs[1].extrusion().z, 0.8);
    }

    #[test]
    fn test_rim_circles() {
        let plan = plan_strip(&holes(2)).unwrap();
        let rims = plan.rim_circles();
        assert_eq!(rims.len(), 4);
        assert_abs_diff_eq!(rims[0].center.z, 0.0);
        assert_abs_diff_eq!(rims[1].center.z, 0.8);
        assert_abs_diff_eq!(rims[3].radius, 2.5);
    }
}
