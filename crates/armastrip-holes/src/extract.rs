//! Hole center extraction from circular boundary edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use armastrip_math::{round_to, Point3, Tolerance};

use crate::HoleError;

/// Decimal places used when ordering hole centers.
const SORT_DECIMALS: i32 = 6;

/// A circular boundary edge of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point3,
    /// Radius of the circle.
    pub radius: f64,
}

impl Circle {
    /// Create a circle from its center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// One physical hole: the merge of every rim circle sharing an XY center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleCenter {
    /// Center of the first circle seen for this hole.
    pub position: Point3,
    /// Smallest radius among the merged circles (the limiting bore).
    pub radius: f64,
}

impl HoleCenter {
    fn sort_key(&self) -> [f64; 3] {
        [
            round_to(self.position.x, SORT_DECIMALS),
            round_to(self.position.y, SORT_DECIMALS),
            round_to(self.position.z, SORT_DECIMALS),
        ]
    }
}

/// Cluster circles into unique hole centers.
///
/// Circles are visited in input order. Each one merges into the *first*
/// accumulated hole whose XY distance is `<= tolerance`, which keeps its
/// position and takes the smaller radius; otherwise it starts a new hole.
/// The result is sorted by `(x, y, z)` rounded to 6 decimals, so identical
/// input always yields identical order.
///
/// Merging is greedy rather than nearest-match: a chain of circles each
/// within `tolerance` of the next can merge differently depending on input
/// order.
///
/// # Errors
///
/// Returns [`HoleError::NoHolesFound`] if `circles` is empty.
pub fn extract_holes(circles: &[Circle], tolerance: f64) -> Result<Vec<HoleCenter>, HoleError> {
    if circles.is_empty() {
        return Err(HoleError::NoHolesFound);
    }

    let tol = Tolerance { center: tolerance };
    let mut holes: Vec<HoleCenter> = Vec::new();

    for circle in circles {
        match holes
            .iter_mut()
            .find(|hole| tol.same_hole(&hole.position, &circle.center))
        {
            Some(hole) => hole.radius = hole.radius.min(circle.radius),
            None => holes.push(HoleCenter {
                position: circle.center,
                radius: circle.radius,
            }),
        }
    }

    holes.sort_by(|a, b| {
        let (ka, kb) = (a.sort_key(), b.sort_key());
        ka.iter()
            .zip(kb.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    Ok(holes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(x: f64, y: f64, z: f64, r: f64) -> Circle {
        Circle::new(Point3::new(x, y, z), r)
    }

    #[test]
    fn test_through_holes_merge_rims() {
        let circles = vec![
            c(0.0, 0.0, 0.0, 2.5),
            c(0.0, 0.0, 10.0, 2.5),
            c(20.0, 0.0, 0.0, 2.5),
            c(20.0, 0.0, 10.0, 2.5),
        ];
        let holes = extract_holes(&circles, 0.1).unwrap();
        assert_eq!(holes.len(), 2);
        assert_abs_diff_eq!(holes[0].position.x, 0.0);
        assert_abs_diff_eq!(holes[1].position.x, 20.0);
        assert_abs_diff_eq!(holes[0].radius, 2.5);
        assert_abs_diff_eq!(holes[1].radius, 2.5);
    }

    #[test]
    fn test_smaller_radius_wins_in_either_order() {
        let forward = extract_holes(&[c(5.0, 5.0, 0.0, 1.5), c(5.0, 5.0, 3.0, 2.0)], 0.1).unwrap();
        let reverse = extract_holes(&[c(5.0, 5.0, 3.0, 2.0), c(5.0, 5.0, 0.0, 1.5)], 0.1).unwrap();
        assert_eq!(forward.len(), 1);
        assert_eq!(reverse.len(), 1);
        assert_abs_diff_eq!(forward[0].radius, 1.5);
        assert_abs_diff_eq!(reverse[0].radius, 1.5);
    }

    #[test]
    fn test_first_seen_position_is_kept() {
        let holes = extract_holes(&[c(1.0, 0.0, 4.0, 1.0), c(1.05, 0.0, 0.0, 1.0)], 0.1).unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].position, Point3::new(1.0, 0.0, 4.0));
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let at = extract_holes(&[c(0.0, 0.0, 0.0, 1.0), c(0.5, 0.0, 0.0, 1.0)], 0.5).unwrap();
        assert_eq!(at.len(), 1);

        let past = extract_holes(&[c(0.0, 0.0, 0.0, 1.0), c(0.5 + 1e-6, 0.0, 0.0, 1.0)], 0.5).unwrap();
        assert_eq!(past.len(), 2);
    }

    #[test]
    fn test_first_match_not_nearest() {
        // Third circle is within tolerance of both; it merges into the first.
        let circles = vec![c(0.0, 0.0, 0.0, 3.0), c(1.5, 0.0, 0.0, 3.0), c(1.0, 0.0, 0.0, 1.0)];
        let holes = extract_holes(&circles, 1.0).unwrap();
        assert_eq!(holes.len(), 2);
        assert_abs_diff_eq!(holes[0].radius, 1.0);
        assert_abs_diff_eq!(holes[1].radius, 3.0);
    }

    #[test]
    fn test_sorted_and_idempotent() {
        let circles = vec![
            c(30.0, 0.0, 0.0, 2.0),
            c(10.0, 5.0, 0.0, 2.0),
            c(10.0, -5.0, 0.0, 2.0),
            c(-4.0, 0.0, 0.0, 2.0),
        ];
        let first = extract_holes(&circles, 0.1).unwrap();
        let second = extract_holes(&circles, 0.1).unwrap();
        assert_eq!(first, second);

        let xs: Vec<(f64, f64)> = first.iter().map(|h| (h.position.x, h.position.y)).collect();
        assert_eq!(xs, vec![(-4.0, 0.0), (10.0, -5.0), (10.0, 5.0), (30.0, 0.0)]);
    }

    #[test]
    fn test_sort_ignores_sub_micron_noise() {
        // Equal after rounding, so the stable sort keeps input order.
        let circles = vec![c(1.0000001, 2.0, 0.0, 1.0), c(1.0, 2.0, 0.0, 1.0)];
        let holes = extract_holes(&circles, 1e-9).unwrap();
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].position.x, 1.0000001);
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(extract_holes(&[], 0.1), Err(HoleError::NoHolesFound));
    }
}
