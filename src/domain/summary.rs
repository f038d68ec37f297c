//! Packing progress statistics

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Aggregate packed/unpacked statistics over a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Summary {
    /// Nothing on the list yet; no percentage exists
    Empty,
    Progress {
        count: usize,
        packed_count: usize,
        /// `packed_count / count * 100`, rounded half up
        percentage: u32,
    },
}

impl Summary {
    pub fn of(items: &[Item]) -> Self {
        let count = items.len();
        if count == 0 {
            return Summary::Empty;
        }
        let packed_count = items.iter().filter(|item| item.packed).count();
        Summary::Progress {
            count,
            packed_count,
            percentage: rounded_percentage(packed_count, count),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Summary::Empty => 0,
            Summary::Progress { count, .. } => *count,
        }
    }

    pub fn packed_count(&self) -> usize {
        match self {
            Summary::Empty => 0,
            Summary::Progress { packed_count, .. } => *packed_count,
        }
    }

    /// `None` for an empty list
    pub fn percentage(&self) -> Option<u32> {
        match self {
            Summary::Empty => None,
            Summary::Progress { percentage, .. } => Some(*percentage),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }

    /// Every item is packed.
    ///
    /// Counts only; the stats message goes by the rounded percentage, so
    /// 199 of 200 already reads as done there.
    pub fn is_all_packed(&self) -> bool {
        match self {
            Summary::Empty => false,
            Summary::Progress {
                count,
                packed_count,
                ..
            } => packed_count == count,
        }
    }
}

/// Stats footer text
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty => f.write_str("You can start packing your items!"),
            Summary::Progress {
                percentage: 100, ..
            } => f.write_str("You've got everything! You can go!"),
            Summary::Progress {
                count,
                packed_count,
                percentage,
            } => write!(
                f,
                "You have {count} items on your list, and you already packed {packed_count} ({percentage}%)"
            ),
        }
    }
}

// Integer round-half-up, matching Math.round for non-negative ratios.
fn rounded_percentage(packed: usize, count: usize) -> u32 {
    let scaled = (packed as u64 * 100 + count as u64 / 2) / count as u64;
    scaled as u32
}
