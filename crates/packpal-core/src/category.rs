//! Category Entity
//!
//! A named, ordered group of items, and the template used to stamp out
//! conditional categories.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entity::{position_of, CatalogError, CatalogResult, Entity};
use crate::ids::{CategoryId, ItemId};
use crate::item::Item;
use crate::progress::Progress;
use crate::trip::TripType;

/// A category of items; item order is display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
    pub items: Vec<Item>,
    /// Expanded in the checklist. Display only.
    #[serde(default)]
    pub is_open: bool,
    /// Trip type this category is tied to, for categories inserted by the
    /// conditional category policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<TripType>,
}

impl Category {
    /// Create an empty, collapsed category
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            items: Vec::new(),
            is_open: false,
            conditional: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn opened(mut self) -> Self {
        self.is_open = true;
        self
    }

    pub fn progress(&self) -> Progress {
        Progress::of_items(&self.items)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn is_conditional(&self) -> bool {
        self.conditional.is_some()
    }

    pub(crate) fn item_mut(&mut self, id: &ItemId) -> CatalogResult<&mut Item> {
        let index = position_of(&self.items, id).ok_or_else(|| CatalogError::ItemNotFound {
            category: self.id.clone(),
            item: id.clone(),
        })?;
        Ok(&mut self.items[index])
    }

    pub(crate) fn set_all_packed(&mut self, packed: bool) {
        for item in &mut self.items {
            item.packed = packed;
        }
    }

    /// Reject duplicate item ids and blank item names
    pub(crate) fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateItem {
                    category: self.id.clone(),
                    item: item.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Blueprint for a conditional category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
    pub items: Vec<Item>,
    /// Trip type the instantiated category belongs to
    pub trip_type: TripType,
    /// Expand the category when it is inserted
    #[serde(default)]
    pub open_on_insert: bool,
}

impl CategoryTemplate {
    /// Fresh category with every item unpacked
    pub fn instantiate(&self) -> Category {
        Category {
            id: self.id.clone(),
            name: self.name.clone(),
            emoji: self.emoji.clone(),
            items: self.items.iter().map(Item::unpacked).collect(),
            is_open: self.open_on_insert,
            conditional: Some(self.trip_type),
        }
    }
}
