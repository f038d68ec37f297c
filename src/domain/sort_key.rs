//! Sort keys for the list view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// Ordering applied by `ListStore::sorted_view`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Insertion order
    #[default]
    Input,
    /// Ascending by description
    Description,
    /// Unpacked first
    Packed,
}

impl SortKey {
    /// All keys in selector order
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Packed => "packed",
        }
    }

    /// Selector option text
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Input => "Order by input",
            SortKey::Description => "Order by description",
            SortKey::Packed => "Order by packed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown keys are an error, never a silent fallback to `Input`.
impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortKey::Input),
            "description" => Ok(SortKey::Description),
            "packed" => Ok(SortKey::Packed),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}
