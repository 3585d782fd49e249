//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components never
//! edit the catalog directly; they go through the helper functions below,
//! which forward to the `packpal_core` mutation API.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{info, warn};

use packpal_core::{
    apply_trip_type, seed, Catalog, CatalogResult, CategoryId, ConditionalChange, ItemId,
    Progress, SequentialIds, TripType,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Categories and items, in display order
    pub catalog: Catalog,
    pub trip_type: TripType,
    /// Card picked by the random button, highlighted for a moment
    pub highlighted: Option<ItemId>,
    /// Id source for user-added items
    pub item_ids: SequentialIds,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: seed::default_catalog(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Read Helpers
// ========================

pub fn store_progress(store: &AppStore) -> Progress {
    store.catalog().with(Catalog::progress)
}

pub fn store_category_ids(store: &AppStore) -> Vec<CategoryId> {
    store
        .catalog()
        .with(|c| c.categories().iter().map(|c| c.id.clone()).collect())
}

pub fn store_trip_type(store: &AppStore) -> TripType {
    store.trip_type().get()
}

pub fn store_highlighted(store: &AppStore) -> Option<ItemId> {
    store.highlighted().get()
}

// ========================
// Store Helper Functions
// ========================

/// Log lookups that missed; the UI raced a removal and there is nothing to do
fn log_miss<T>(result: CatalogResult<T>, action: &str) -> CatalogResult<T> {
    if let Err(e) = &result {
        if e.is_not_found() {
            warn!(action, "{}", e);
        }
    }
    result
}

/// Toggle an item, returning its new packed state
pub fn store_toggle_item(store: &AppStore, category_id: &CategoryId, item_id: &ItemId) -> CatalogResult<bool> {
    log_miss(store.catalog().write().toggle_item(category_id, item_id), "toggle_item")
}

pub fn store_add_item(store: &AppStore, category_id: &CategoryId, name: &str, emoji: &str) -> CatalogResult<ItemId> {
    let result = {
        let mut state = store.write();
        let AppState { catalog, item_ids, .. } = &mut *state;
        catalog.add_item(category_id, name, emoji, item_ids)
    };
    if let Ok(id) = &result {
        info!(category = %category_id, item = %id, "item added");
    }
    log_miss(result, "add_item")
}

pub fn store_check_all(store: &AppStore, category_id: &CategoryId) -> CatalogResult<()> {
    log_miss(store.catalog().write().check_all_items(category_id), "check_all_items")
}

pub fn store_reset_all(store: &AppStore, category_id: &CategoryId) -> CatalogResult<()> {
    log_miss(store.catalog().write().reset_all_items(category_id), "reset_all_items")
}

pub fn store_toggle_category(store: &AppStore, category_id: &CategoryId) -> CatalogResult<bool> {
    log_miss(store.catalog().write().toggle_category_open(category_id), "toggle_category_open")
}

pub fn store_set_trip_type(store: &AppStore, trip_type: TripType) -> CatalogResult<ConditionalChange> {
    let change = apply_trip_type(&mut store.catalog().write(), trip_type)?;
    store.trip_type().set(trip_type);
    info!(trip = trip_type.as_str(), ?change, "trip type set");
    Ok(change)
}

/// Pack one random unpacked item, open its category and highlight it.
/// Returns `None` when everything is already packed.
pub fn store_pick_random(store: &AppStore) -> CatalogResult<Option<(CategoryId, ItemId)>> {
    let picked = store
        .catalog()
        .with_untracked(|c| c.pick_random_unpacked(&mut rand::thread_rng()));
    let Some((category_id, item_id)) = picked else {
        return Ok(None);
    };

    {
        let field = store.catalog();
        let mut catalog = field.write();
        catalog.set_category_open(&category_id, true)?;
        catalog.toggle_item(&category_id, &item_id)?;
    }
    store.highlighted().set(Some(item_id.clone()));
    Ok(Some((category_id, item_id)))
}

pub fn store_clear_highlight(store: &AppStore, item_id: &ItemId) {
    if store.highlighted().get_untracked().as_ref() == Some(item_id) {
        store.highlighted().set(None);
    }
}
