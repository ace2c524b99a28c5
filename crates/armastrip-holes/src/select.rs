//! Hole selection policies.

use serde::{Deserialize, Serialize};

use crate::HoleError;

/// Which of the detected holes receive a fastener feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionMode {
    /// Every hole.
    #[default]
    All,
    /// The first and last hole only.
    Ends,
    /// Every `every_n`-th hole, starting at the 1-based `start_index`.
    Step {
        /// Spacing between selected holes.
        every_n: usize,
        /// 1-based index of the first selected hole; must be `< every_n`.
        start_index: usize,
    },
}

impl SelectionMode {
    /// Shorthand for [`SelectionMode::Step`].
    pub fn step(every_n: usize, start_index: usize) -> Self {
        Self::Step {
            every_n,
            start_index,
        }
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ends => "ends",
            Self::Step { .. } => "step",
        }
    }
}

/// Apply `mode` to an ordered list, returning the selected sub-sequence.
///
/// Indices are 1-based over the input order. The input is never modified.
///
/// # Errors
///
/// For [`SelectionMode::Step`], returns [`HoleError::InvalidParameter`] if
/// `every_n < 1`, `start_index < 1`, `start_index` exceeds the number of
/// items, or `start_index >= every_n`.
pub fn filter_holes<T: Clone>(items: &[T], mode: SelectionMode) -> Result<Vec<T>, HoleError> {
    match mode {
        SelectionMode::All => Ok(items.to_vec()),
        SelectionMode::Ends => match items {
            [] | [_] => Ok(items.to_vec()),
            [first, .., last] => Ok(vec![first.clone(), last.clone()]),
        },
        SelectionMode::Step {
            every_n,
            start_index,
        } => {
            validate_step(every_n, start_index, items.len())?;
            Ok(items
                .iter()
                .skip(start_index - 1)
                .step_by(every_n)
                .cloned()
                .collect())
        }
    }
}

fn validate_step(every_n: usize, start_index: usize, total: usize) -> Result<(), HoleError> {
    if every_n < 1 {
        return Err(HoleError::InvalidParameter(
            "every-n value must be >= 1".into(),
        ));
    }
    if start_index < 1 {
        return Err(HoleError::InvalidParameter(
            "start hole index must be >= 1".into(),
        ));
    }
    if start_index > total {
        return Err(HoleError::InvalidParameter(format!(
            "start hole index {start_index} exceeds the {total} available holes"
        )));
    }
    if start_index >= every_n {
        return Err(HoleError::InvalidParameter(format!(
            "start hole index {start_index} must be less than every-n value {every_n}"
        )));
    }
    Ok(())
}
