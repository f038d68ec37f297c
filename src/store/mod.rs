//! Store Layer
//!
//! The in-memory list and its derived views.

mod collation;
mod list_store;


pub use list_store::ListStore;
