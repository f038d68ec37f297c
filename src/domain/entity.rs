//! Domain Layer - Core Entity Trait
//!
//! Every stored record is keyed by an id that never changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for list entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Every variant is recoverable by the caller: nothing is created or changed
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Invalid description: must not be empty")]
    InvalidDescription,
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
    #[error("Duplicate item id: {0}")]
    DuplicateId(u64),
}
