//! Domain Layer
//!
//! Entities, value types and validation rules.
//! No I/O and no dependencies beyond serde and thiserror.

mod entity;
mod item;
mod sort_key;
mod summary;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{
    parse_quantity, validate_description, validate_quantity, Item, ItemId, DEFAULT_QUANTITY,
    QUANTITY_CHOICES,
};
pub use sort_key::SortKey;
pub use summary::Summary;
