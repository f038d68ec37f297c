//! In-memory packing list
//!
//! Owns the items in insertion order. Mutations take `&mut self`, so the
//! single owner is the only writer.

use std::collections::HashSet;

use log::{debug, trace, warn};

use super::collation::DescriptionCollator;
use crate::domain::{
    validate_description, validate_quantity, DomainError, DomainResult, Entity, Item, ItemId,
    SortKey, Summary,
};

/// The packing list and its operations
#[derive(Debug, Clone)]
pub struct ListStore {
    /// Stored (input) order
    items: Vec<Item>,
    /// Next id to hand out; only ever grows
    next_id: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a list holding `items` in the given order.
    ///
    /// Every item must pass the same checks as `add`, and ids must be
    /// unique. New ids continue after the largest seeded one.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let items: Vec<Item> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id()) {
                return Err(DomainError::DuplicateId(item.id().0));
            }
        }
        let next_id = items.iter().map(|item| item.id().0 + 1).max().unwrap_or(1);
        debug!("Seeded list with {} items, next id {}", items.len(), next_id);
        Ok(Self { items, next_id })
    }

    /// Append a new unpacked item and return it
    pub fn add(&mut self, description: impl Into<String>, quantity: u32) -> DomainResult<Item> {
        let description = description.into();
        if let Err(e) = validate_description(&description).and(validate_quantity(quantity)) {
            warn!("Rejected new item {:?} x{}: {}", description, quantity, e);
            return Err(e);
        }

        let item = Item::new(self.allocate_id(), description, quantity);
        debug!("Added item {} ({})", item.id, item);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Delete the item with `id`; unknown ids are ignored
    pub fn remove(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() < before {
            debug!("Removed item {}", id);
        } else {
            trace!("Remove of unknown item {} ignored", id);
        }
    }

    /// Flip the packed flag of the item with `id`; unknown ids are ignored
    pub fn toggle_packed(&mut self, id: ItemId) {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.packed = !item.packed;
                debug!("Item {} packed = {}", id, item.packed);
            }
            None => trace!("Toggle of unknown item {} ignored", id),
        }
    }

    /// Remove every item. Irreversible.
    pub fn clear(&mut self) {
        debug!("Cleared {} items", self.items.len());
        self.items.clear();
    }

    /// Clear only if `confirm` returns true. Returns whether the list was cleared.
    pub fn clear_confirmed(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            trace!("Clear cancelled");
            return false;
        }
        self.clear();
        true
    }

    /// Items ordered by `key`. The stored order is left untouched.
    pub fn sorted_view(&self, key: SortKey) -> Vec<&Item> {
        trace!("Sorted view by {} over {} items", key, self.items.len());
        let mut view: Vec<&Item> = self.items.iter().collect();
        match key {
            SortKey::Input => {}
            SortKey::Description => {
                let collator = DescriptionCollator::new();
                view.sort_by(|a, b| collator.compare(&a.description, &b.description));
            }
            SortKey::Packed => view.sort_by_key(|item| item.packed),
        }
        view
    }

    pub fn summary(&self) -> Summary {
        let summary = Summary::of(&self.items);
        trace!("Summary: {:?}", summary);
        summary
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items in stored (input) order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}
