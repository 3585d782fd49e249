//! Item Entity
//!
//! A single packable thing with a packed/unpacked state.

use serde::{Deserialize, Serialize};

use crate::entity::{CatalogError, CatalogResult, Entity};
use crate::ids::ItemId;

/// A packable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the owning category
    pub id: ItemId,
    /// Display label, never empty
    pub name: String,
    /// Display glyph
    pub emoji: String,
    /// Packing status
    #[serde(default)]
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            packed: false,
        }
    }

    /// Flip the packed flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.packed = !self.packed;
        self.packed
    }

    /// Copy of this item with `packed` cleared
    pub fn unpacked(&self) -> Self {
        Self {
            packed: false,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Trim a user-supplied item name, rejecting blank input
pub fn normalize_name(name: &str) -> CatalogResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("c1", "T-Shirts", "👕");
        assert_eq!(item.id(), &ItemId::new("c1"));
        assert_eq!(item.name, "T-Shirts");
        assert!(!item.packed);
    }

    #[test]
    fn test_toggle() {
        let mut item = Item::new("c1", "T-Shirts", "👕");
        assert!(item.toggle());
        assert!(!item.toggle());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Hat ").unwrap(), "Hat");
        assert_eq!(normalize_name("   "), Err(CatalogError::EmptyName));
        assert_eq!(normalize_name(""), Err(CatalogError::EmptyName));
    }

    #[test]
    fn test_packed_defaults_when_missing() {
        let item: Item = serde_json::from_str(r#"{"id":"x","name":"Hat","emoji":"🎩"}"#).unwrap();
        assert!(!item.packed);
    }
}
