//! Catalog and Mutation API
//!
//! The catalog owns the ordered categories of a packing session. The
//! methods here are the only writers. Each one validates before touching
//! anything, so a failed call leaves the catalog exactly as it was.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::category::{Category, CategoryTemplate};
use crate::entity::{position_of, CatalogError, CatalogResult};
use crate::ids::{CategoryId, IdGenerator, ItemId};
use crate::item::{normalize_name, Item};
use crate::progress::Progress;

/// Outcome of `Catalog::set_conditional_category`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalChange {
    Inserted,
    Removed,
    Unchanged,
}

/// Ordered collection of categories with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate category or item ids and blank
    /// item names
    pub fn new(categories: Vec<Category>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(&category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
            category.validate()?;
        }
        Ok(Self { categories })
    }

    // ========================
    // Queries
    // ========================

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn item(&self, category_id: &CategoryId, item_id: &ItemId) -> Option<&Item> {
        self.category(category_id)?.item(item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Whole-catalog progress, recomputed on every call
    pub fn progress(&self) -> Progress {
        self.categories.iter().map(Category::progress).sum()
    }

    pub fn category_progress(&self, id: &CategoryId) -> CatalogResult<Progress> {
        self.category(id)
            .map(Category::progress)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.clone()))
    }

    // ========================
    // Mutations
    // ========================

    /// Flip `packed` on one item, returning the new value
    pub fn toggle_item(&mut self, category_id: &CategoryId, item_id: &ItemId) -> CatalogResult<bool> {
        let packed = self.category_mut(category_id)?.item_mut(item_id)?.toggle();
        debug!(category = %category_id, item = %item_id, packed, "item toggled");
        Ok(packed)
    }

    /// Append a new unpacked item and open its category.
    ///
    /// The name is trimmed and must not be blank. Ids are drawn from `ids`
    /// until one is unused in the target category.
    pub fn add_item<G>(
        &mut self,
        category_id: &CategoryId,
        name: &str,
        emoji: &str,
        ids: &mut G,
    ) -> CatalogResult<ItemId>
    where
        G: IdGenerator + ?Sized,
    {
        let name = normalize_name(name)?;
        let category = self.category_mut(category_id)?;

        let mut id = ids.next_id();
        while category.contains_item(&id) {
            id = ids.next_id();
        }

        category.items.push(Item::new(id.clone(), name, emoji));
        category.is_open = true;
        debug!(category = %category_id, item = %id, "item added");
        Ok(id)
    }

    pub fn check_all_items(&mut self, category_id: &CategoryId) -> CatalogResult<()> {
        self.category_mut(category_id)?.set_all_packed(true);
        debug!(category = %category_id, "all items checked");
        Ok(())
    }

    pub fn reset_all_items(&mut self, category_id: &CategoryId) -> CatalogResult<()> {
        self.category_mut(category_id)?.set_all_packed(false);
        debug!(category = %category_id, "all items reset");
        Ok(())
    }

    pub fn set_category_open(&mut self, category_id: &CategoryId, is_open: bool) -> CatalogResult<()> {
        self.category_mut(category_id)?.is_open = is_open;
        Ok(())
    }

    /// Flip a category's open state, returning the new value
    pub fn toggle_category_open(&mut self, category_id: &CategoryId) -> CatalogResult<bool> {
        let category = self.category_mut(category_id)?;
        category.is_open = !category.is_open;
        Ok(category.is_open)
    }

    /// Insert or remove the category described by `template`.
    ///
    /// Inserting appends a fresh, fully unpacked copy. Repeating a call with
    /// the same `present` value is a no-op. A regular (non-conditional)
    /// category that happens to share the template id is never touched.
    pub fn set_conditional_category(
        &mut self,
        present: bool,
        template: &CategoryTemplate,
    ) -> CatalogResult<ConditionalChange> {
        let existing = position_of(&self.categories, &template.id);

        if let Some(index) = existing {
            if !self.categories[index].is_conditional() {
                return Err(CatalogError::NotConditional(template.id.clone()));
            }
        }

        let change = match (present, existing) {
            (true, None) => {
                self.categories.push(template.instantiate());
                ConditionalChange::Inserted
            }
            (false, Some(index)) => {
                self.categories.remove(index);
                ConditionalChange::Removed
            }
            _ => ConditionalChange::Unchanged,
        };

        debug!(category = %template.id, present, ?change, "conditional category updated");
        Ok(change)
    }

    /// Pick one unpacked item uniformly across the whole catalog
    pub fn pick_random_unpacked<R>(&self, rng: &mut R) -> Option<(CategoryId, ItemId)>
    where
        R: Rng + ?Sized,
    {
        let unpacked: Vec<(&CategoryId, &ItemId)> = self
            .categories
            .iter()
            .flat_map(|c| {
                c.items
                    .iter()
                    .filter(|item| !item.packed)
                    .map(move |item| (&c.id, &item.id))
            })
            .collect();

        unpacked
            .choose(rng)
            .map(|(category, item)| ((*category).clone(), (*item).clone()))
    }

    // ========================
    // Snapshot
    // ========================

    /// Serialize as an ordered JSON array of categories
    pub fn to_snapshot_json(&self) -> CatalogResult<String> {
        serde_json::to_string(self).map_err(|e| CatalogError::Snapshot(e.to_string()))
    }

    /// Restore from `to_snapshot_json` output, validating ids
    pub fn from_snapshot_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Snapshot(e.to_string()))
    }

    fn category_mut(&mut self, id: &CategoryId) -> CatalogResult<&mut Category> {
        let index = position_of(&self.categories, id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.clone()))?;
        Ok(&mut self.categories[index])
    }
}

impl TryFrom<Vec<Category>> for Catalog {
    type Error = CatalogError;

    fn try_from(categories: Vec<Category>) -> CatalogResult<Self> {
        Catalog::new(categories)
    }
}

impl From<Catalog> for Vec<Category> {
    fn from(catalog: Catalog) -> Self {
        catalog.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::trip::TripType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cid(id: &str) -> CategoryId {
        CategoryId::new(id)
    }

    fn iid(id: &str) -> ItemId {
        ItemId::new(id)
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            Category::new("clothing", "Clothing", "👕")
                .with_items(vec![Item::new("c1", "T-Shirts", "👕"), Item::new("c2", "Pants", "👖")])
                .opened(),
            Category::new("gadgets", "Gadgets", "🔌")
                .with_items(vec![Item::new("g1", "Phone Charger", "🔌")]),
        ])
        .unwrap()
    }

    fn family() -> CategoryTemplate {
        CategoryTemplate {
            id: cid("family"),
            name: "Family".into(),
            emoji: "👨‍👩‍👧‍👦".into(),
            items: vec![Item::new("f1", "Toys", "🧸"), Item::new("f2", "Diapers", "🧷")],
            trip_type: TripType::Family,
            open_on_insert: true,
        }
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = Catalog::new(vec![
            Category::new("a", "A", "🅰"),
            Category::new("a", "A again", "🅰"),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateCategory(cid("a")));
    }

    #[test]
    fn test_toggle_item() {
        let mut catalog = sample();
        assert!(catalog.toggle_item(&cid("clothing"), &iid("c1")).unwrap());
        assert_eq!(catalog.progress(), Progress::new(1, 3));
        assert!(!catalog.toggle_item(&cid("clothing"), &iid("c1")).unwrap());
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_toggle_missing_is_not_found() {
        let mut catalog = sample();
        let err = catalog.toggle_item(&cid("clothing"), &iid("g1")).unwrap_err();
        assert!(err.is_not_found());
        let err = catalog.toggle_item(&cid("nope"), &iid("c1")).unwrap_err();
        assert_eq!(err, CatalogError::CategoryNotFound(cid("nope")));
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_add_item_appends_and_opens() {
        let mut catalog = sample();
        let mut ids = SequentialIds::default();
        let id = catalog.add_item(&cid("gadgets"), "  Camera ", "📷", &mut ids).unwrap();

        let gadgets = catalog.category(&cid("gadgets")).unwrap();
        assert_eq!(id, "custom-1");
        assert!(gadgets.is_open);
        assert_eq!(gadgets.items.last().unwrap().name, "Camera");
        assert!(!gadgets.items.last().unwrap().packed);
    }

    #[test]
    fn test_add_item_redraws_taken_ids() {
        let mut catalog = sample();
        // Drawn in reverse: c1, c2, then fresh
        let mut draws = vec![iid("fresh"), iid("c2"), iid("c1")];
        let mut colliding = move || draws.pop().unwrap();
        let id = catalog.add_item(&cid("clothing"), "Scarf", "🧣", &mut colliding).unwrap();
        assert_eq!(id, "fresh");
        assert_eq!(catalog.category(&cid("clothing")).unwrap().items.len(), 3);
    }

    #[test]
    fn test_add_item_validation() {
        let mut catalog = sample();
        let mut ids = SequentialIds::default();
        assert_eq!(
            catalog.add_item(&cid("clothing"), "   ", "🎩", &mut ids),
            Err(CatalogError::EmptyName)
        );
        assert_eq!(
            catalog.add_item(&cid("nonexistent"), "Hat", "🎩", &mut ids),
            Err(CatalogError::CategoryNotFound(cid("nonexistent")))
        );
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_check_and_reset_all() {
        let mut catalog = sample();
        catalog.check_all_items(&cid("clothing")).unwrap();
        assert_eq!(catalog.category_progress(&cid("clothing")).unwrap().percentage(), 100);
        assert_eq!(catalog.category_progress(&cid("gadgets")).unwrap().packed_items, 0);

        catalog.reset_all_items(&cid("clothing")).unwrap();
        assert_eq!(catalog.progress().packed_items, 0);
        assert!(catalog.check_all_items(&cid("nope")).is_err());
    }

    #[test]
    fn test_category_open_state() {
        let mut catalog = sample();
        catalog.set_category_open(&cid("gadgets"), true).unwrap();
        assert!(catalog.category(&cid("gadgets")).unwrap().is_open);
        assert!(!catalog.toggle_category_open(&cid("gadgets")).unwrap());
        // Display state never affects progress
        assert_eq!(catalog.progress(), sample().progress());
    }

    #[test]
    fn test_conditional_category_lifecycle() {
        let mut catalog = sample();
        let before = catalog.clone();

        assert_eq!(catalog.set_conditional_category(true, &family()).unwrap(), ConditionalChange::Inserted);
        let once = catalog.clone();
        assert_eq!(catalog.set_conditional_category(true, &family()).unwrap(), ConditionalChange::Unchanged);
        assert_eq!(catalog, once);
        assert_eq!(catalog.categories().last().unwrap().id, "family");
        assert_eq!(catalog.progress().total_items, 5);

        assert_eq!(catalog.set_conditional_category(false, &family()).unwrap(), ConditionalChange::Removed);
        assert_eq!(catalog.set_conditional_category(false, &family()).unwrap(), ConditionalChange::Unchanged);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_conditional_reinsert_is_fresh() {
        let mut catalog = sample();
        catalog.set_conditional_category(true, &family()).unwrap();
        catalog.check_all_items(&cid("family")).unwrap();
        catalog.set_conditional_category(false, &family()).unwrap();
        catalog.set_conditional_category(true, &family()).unwrap();
        assert_eq!(catalog.category_progress(&cid("family")).unwrap().packed_items, 0);
    }

    #[test]
    fn test_conditional_refuses_regular_category() {
        let mut catalog = sample();
        let mut template = family();
        template.id = cid("clothing");
        assert_eq!(
            catalog.set_conditional_category(false, &template),
            Err(CatalogError::NotConditional(cid("clothing")))
        );
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_pick_random_unpacked() {
        let mut catalog = sample();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..3 {
            let (category, item) = catalog.pick_random_unpacked(&mut rng).unwrap();
            assert!(!catalog.item(&category, &item).unwrap().packed);
            catalog.toggle_item(&category, &item).unwrap();
        }
        assert!(catalog.progress().is_complete());
        assert_eq!(catalog.pick_random_unpacked(&mut rng), None);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut catalog = sample();
        catalog.toggle_item(&cid("gadgets"), &iid("g1")).unwrap();
        let json = catalog.to_snapshot_json().unwrap();
        assert!(json.starts_with("[{\"id\":\"clothing\""));
        assert_eq!(Catalog::from_snapshot_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_snapshot_rejects_duplicates() {
        let json = r#"[{"id":"a","name":"A","emoji":"🅰","items":[]},{"id":"a","name":"B","emoji":"🅱","items":[]}]"#;
        let err = Catalog::from_snapshot_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Snapshot(msg) if msg.contains("duplicate category id: a")));
    }

    #[test]
    fn test_blank_item_names_rejected() {
        let json = r#"[{"id":"a","name":"A","emoji":"🅰","items":[{"id":"a1","name":"   ","emoji":"x","packed":false}]}]"#;
        let err = Catalog::from_snapshot_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Snapshot(msg) if msg.contains("item name must not be empty")));

        let blank = Category::new("b", "B", "🅱").with_items(vec![Item::new("b1", "", "x")]);
        assert_eq!(Catalog::new(vec![blank]), Err(CatalogError::EmptyName));
    }
}
