//! Core Entity Trait
//!
//! Basic contract for catalog entities plus the error type shared by every
//! catalog operation.

use thiserror::Error;

use crate::ids::{CategoryId, ItemId};

/// Anything addressable by a stable id
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Index of the entity with `id` in `entities`, if any
pub fn position_of<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level errors.
///
/// Lookup failures (`CategoryNotFound`, `ItemNotFound`) are benign for the
/// UI and are only logged; `EmptyName` is a validation failure shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("item not found: {item} in category {category}")]
    ItemNotFound { category: CategoryId, item: ItemId },

    #[error("item name must not be empty")]
    EmptyName,

    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    #[error("duplicate item id: {item} in category {category}")]
    DuplicateItem { category: CategoryId, item: ItemId },

    #[error("category {0} is not conditional")]
    NotConditional(CategoryId),

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

impl CatalogError {
    /// Lookup failures that callers treat as no-ops
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CategoryNotFound(_) | CatalogError::ItemNotFound { .. }
        )
    }
}
