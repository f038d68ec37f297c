//! Far Away: packing list core
//!
//! Layered architecture:
//! - domain: items, sort keys, summary and validation rules
//! - store: the in-memory list and its operations
//!
//! A presentation layer owns one [`ListStore`], calls its operations in
//! response to user actions and renders the returned items and [`Summary`].
//! Nothing here performs I/O; log records go through the `log` facade and
//! are only emitted if the host installs a logger.

mod domain;
mod store;

pub use domain::{
    parse_quantity, validate_description, validate_quantity, DomainError, DomainResult, Entity,
    Item, ItemId, SortKey, Summary, DEFAULT_QUANTITY, QUANTITY_CHOICES,
};
pub use store::ListStore;
