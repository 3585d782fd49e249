//! PackPal Packing State Model
//!
//! Framework-free core of the packing checklist:
//! - catalog: ordered categories and the mutation API
//! - progress: packed/total counts, percentage and status label
//! - completion: edge-triggered "all packed" events
//! - trip: trip type driven conditional category
//! - seed: starting checklist and family template
//!
//! The UI calls the mutation API from its event handlers and re-reads
//! progress afterwards; nothing in here knows about rendering.

mod category;
mod catalog;
mod completion;
mod entity;
mod ids;
mod item;
mod progress;
pub mod seed;
mod trip;

#[cfg(test)]
mod tests;

pub use category::{Category, CategoryTemplate};
pub use catalog::{Catalog, ConditionalChange};
pub use completion::{CompletionEvent, CompletionTracker, CompletionWatcher};
pub use entity::{CatalogError, CatalogResult, Entity};
pub use ids::{CategoryId, IdGenerator, ItemId, SequentialIds};
pub use item::Item;
pub use progress::{PackingStatus, Progress};
pub use trip::{apply_trip_type, TripType};
