//! Item Entity
//!
//! A single packing-list entry.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Quantities offered by the add form
pub const QUANTITY_CHOICES: RangeInclusive<u32> = 1..=20;

/// Quantity the add form resets to after each submit
pub const DEFAULT_QUANTITY: u32 = 1;

/// Unique item identifier, never reused within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to pack
    pub description: String,
    /// How many, always >= 1
    pub quantity: u32,
    /// Whether it is already in the bag
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Check that this item could have been produced by `add`
    pub fn validate(&self) -> DomainResult<()> {
        validate_description(&self.description)?;
        validate_quantity(self.quantity)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Row label: `"2 Passports"`
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.description)
    }
}

/// Reject empty and whitespace-only descriptions
pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::InvalidDescription);
    }
    Ok(())
}

/// Reject a zero quantity; there is no upper bound
pub fn validate_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity(quantity.to_string()));
    }
    Ok(())
}

/// Parse a form field value into a quantity.
///
/// Surrounding whitespace is ignored. Anything that is not a positive
/// integer is rejected; there is no upper bound here, [`QUANTITY_CHOICES`]
/// only limits what the form offers.
pub fn parse_quantity(input: &str) -> DomainResult<u32> {
    let trimmed = input.trim();
    let quantity = trimmed
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidQuantity(trimmed.to_string()))?;
    validate_quantity(quantity)?;
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId(1), "Passports", 2);
        assert_eq!(item.id(), ItemId(1));
        assert_eq!(item.description, "Passports");
        assert_eq!(item.quantity, 2);
        assert!(!item.packed);
    }

    #[test]
    fn test_item_label() {
        let item = Item::new(ItemId(2), "Socks", 12);
        assert_eq!(item.to_string(), "12 Socks");
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Charger").is_ok());
        assert_eq!(validate_description(""), Err(DomainError::InvalidDescription));
        assert_eq!(validate_description(" \t\n"), Err(DomainError::InvalidDescription));
    }

    #[test]
    fn test_validate_item() {
        assert!(Item::new(ItemId(1), "Hat", 1).validate().is_ok());
        assert!(matches!(
            Item::new(ItemId(1), "Hat", 0).validate(),
            Err(DomainError::InvalidQuantity(_))
        ));
        assert_eq!(
            Item::new(ItemId(1), "  ", 3).validate(),
            Err(DomainError::InvalidDescription)
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 20 "), Ok(20));
        // No model-level upper bound
        assert_eq!(parse_quantity("150"), Ok(150));
        assert_eq!(
            parse_quantity("0"),
            Err(DomainError::InvalidQuantity("0".to_string()))
        );
        assert_eq!(
            parse_quantity("-1"),
            Err(DomainError::InvalidQuantity("-1".to_string()))
        );
        assert_eq!(
            parse_quantity("2.5"),
            Err(DomainError::InvalidQuantity("2.5".to_string()))
        );
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_quantity_choices() {
        assert!(QUANTITY_CHOICES.contains(&DEFAULT_QUANTITY));
        assert_eq!(QUANTITY_CHOICES.clone().count(), 20);
        assert_eq!(*QUANTITY_CHOICES.end(), 20);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let item = Item::new(ItemId(5), "Towel", 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 5, "description": "Towel", "quantity": 1, "packed": false })
        );
    }
}
