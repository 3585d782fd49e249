//! Catalog Scenario Tests
//!
//! End-to-end checks of the mutation API, progress and completion events
//! together, plus property tests over random operation sequences.

use crate::{
    apply_trip_type, seed, Catalog, CatalogError, Category, CategoryId, CompletionEvent,
    CompletionWatcher, Item, ItemId, PackingStatus, SequentialIds, TripType,
};

fn cid(id: &str) -> CategoryId {
    CategoryId::new(id)
}

fn iid(id: &str) -> ItemId {
    ItemId::new(id)
}

fn clothing_only() -> Catalog {
    Catalog::new(vec![Category::new("clothing", "Clothing", "👕")
        .with_items(vec![Item::new("c1", "T-Shirts", "👕"), Item::new("c2", "Pants", "👖")])])
    .unwrap()
}

#[test]
fn test_two_item_checklist_scenario() {
    let mut catalog = clothing_only();
    let mut watcher = CompletionWatcher::new(&catalog);

    catalog.toggle_item(&cid("clothing"), &iid("c1")).unwrap();
    let progress = catalog.progress();
    assert_eq!(progress.total_items, 2);
    assert_eq!(progress.packed_items, 1);
    assert_eq!(progress.percentage(), 50);
    assert_eq!(progress.status(), PackingStatus::InProgressHigh);
    assert!(watcher.observe(&catalog).is_empty());

    catalog.toggle_item(&cid("clothing"), &iid("c2")).unwrap();
    assert_eq!(catalog.progress().percentage(), 100);
    assert_eq!(catalog.progress().status(), PackingStatus::Complete);
    assert_eq!(
        watcher.observe(&catalog),
        vec![CompletionEvent::CategoryPacked(cid("clothing")), CompletionEvent::AllPacked]
    );

    // Unpacking and repacking does not celebrate again
    catalog.toggle_item(&cid("clothing"), &iid("c1")).unwrap();
    assert!(watcher.observe(&catalog).is_empty());
    catalog.toggle_item(&cid("clothing"), &iid("c1")).unwrap();
    assert!(watcher.observe(&catalog).is_empty());
}

#[test]
fn test_add_to_missing_category_leaves_catalog_unchanged() {
    let mut catalog = seed::default_catalog();
    let before = catalog.clone();
    let mut ids = SequentialIds::default();

    let err = catalog.add_item(&cid("nonexistent"), "Hat", "🎩", &mut ids).unwrap_err();
    assert_eq!(err, CatalogError::CategoryNotFound(cid("nonexistent")));
    assert_eq!(catalog, before);
}

#[test]
fn test_family_round_trip_restores_catalog() {
    let mut catalog = seed::default_catalog();
    catalog.toggle_item(&cid("gadgets"), &iid("g2")).unwrap();
    let before = catalog.clone();

    apply_trip_type(&mut catalog, TripType::Family).unwrap();
    assert_eq!(catalog.categories().len(), 6);
    apply_trip_type(&mut catalog, TripType::Solo).unwrap();
    assert_eq!(catalog, before);
}

#[test]
fn test_family_category_rearms_all_packed() {
    let mut catalog = seed::default_catalog();
    let ids: Vec<CategoryId> = catalog.categories().iter().map(|c| c.id.clone()).collect();
    for id in &ids {
        catalog.check_all_items(id).unwrap();
    }
    let mut watcher = CompletionWatcher::new(&catalog);
    assert!(watcher.observe(&catalog).is_empty());

    apply_trip_type(&mut catalog, TripType::Family).unwrap();
    assert!(watcher.observe(&catalog).is_empty());

    catalog.check_all_items(&cid("family")).unwrap();
    assert_eq!(
        watcher.observe(&catalog),
        vec![CompletionEvent::CategoryPacked(cid("family")), CompletionEvent::AllPacked]
    );

    // Dropping the packed family category keeps the catalog complete
    // without a second celebration
    apply_trip_type(&mut catalog, TripType::Solo).unwrap();
    assert!(catalog.progress().is_complete());
    assert!(watcher.observe(&catalog).is_empty());
}

#[test]
fn test_check_all_completes_only_that_category() {
    let mut catalog = seed::default_catalog();
    let mut watcher = CompletionWatcher::new(&catalog);

    catalog.check_all_items(&cid("documents")).unwrap();
    assert_eq!(catalog.category_progress(&cid("documents")).unwrap().percentage(), 100);
    assert_eq!(catalog.progress().percentage(), 20);
    assert_eq!(
        watcher.observe(&catalog),
        vec![CompletionEvent::CategoryPacked(cid("documents"))]
    );
}

#[test]
fn test_added_item_reopens_completion() {
    let mut catalog = clothing_only();
    let mut watcher = CompletionWatcher::new(&catalog);
    let mut ids = SequentialIds::default();

    catalog.check_all_items(&cid("clothing")).unwrap();
    assert_eq!(watcher.observe(&catalog).len(), 2);

    let hat = catalog.add_item(&cid("clothing"), "Hat", "🎩", &mut ids).unwrap();
    assert_eq!(catalog.progress().percentage(), 67);
    assert!(watcher.observe(&catalog).is_empty());

    catalog.toggle_item(&cid("clothing"), &hat).unwrap();
    assert_eq!(watcher.observe(&catalog).len(), 2);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Toggle(usize, usize),
        Add(usize, String),
        CheckAll(usize),
        ResetAll(usize),
        Trip(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..6usize, 0..8usize).prop_map(|(c, i)| Op::Toggle(c, i)),
            (0..6usize, "[ a-z]{0,8}").prop_map(|(c, name)| Op::Add(c, name)),
            (0..6usize).prop_map(Op::CheckAll),
            (0..6usize).prop_map(Op::ResetAll),
            any::<bool>().prop_map(Op::Trip),
        ]
    }

    fn apply(catalog: &mut Catalog, ids: &mut SequentialIds, op: &Op) {
        let categories: Vec<CategoryId> = catalog.categories().iter().map(|c| c.id.clone()).collect();
        let pick = |index: usize| categories[index % categories.len()].clone();

        let _ = match op {
            Op::Toggle(c, i) => {
                let category = pick(*c);
                let items = &catalog.category(&category).unwrap().items;
                let item = items[*i % items.len()].id.clone();
                catalog.toggle_item(&category, &item).map(|_| ())
            }
            Op::Add(c, name) => catalog.add_item(&pick(*c), name, "📦", ids).map(|_| ()),
            Op::CheckAll(c) => catalog.check_all_items(&pick(*c)),
            Op::ResetAll(c) => catalog.reset_all_items(&pick(*c)),
            Op::Trip(family) => {
                let trip = if *family { TripType::Family } else { TripType::Solo };
                apply_trip_type(catalog, trip).map(|_| ())
            }
        };
    }

    proptest! {
        /// Packed never exceeds total, whatever the operation sequence.
        #[test]
        fn packed_never_exceeds_total(ops in prop::collection::vec(op(), 0..40)) {
            let mut catalog = seed::default_catalog();
            let mut ids = SequentialIds::default();
            for op in &ops {
                apply(&mut catalog, &mut ids, op);
                let progress = catalog.progress();
                prop_assert!(progress.packed_items <= progress.total_items);
                prop_assert!(progress.percentage() <= 100);
            }
        }

        /// Toggling the same item twice is the identity.
        #[test]
        fn toggle_twice_is_identity(
            ops in prop::collection::vec(op(), 0..20),
            c in 0..5usize,
            i in 0..5usize,
        ) {
            let mut catalog = seed::default_catalog();
            let mut ids = SequentialIds::default();
            for op in &ops {
                apply(&mut catalog, &mut ids, op);
            }
            let category = catalog.categories()[c].id.clone();
            let item = catalog.categories()[c].items[i].id.clone();
            let before = catalog.clone();

            catalog.toggle_item(&category, &item).unwrap();
            catalog.toggle_item(&category, &item).unwrap();
            prop_assert_eq!(catalog, before);
        }

        /// Adding an item grows the total by one and packs nothing.
        #[test]
        fn add_item_grows_total_by_one(
            ops in prop::collection::vec(op(), 0..20),
            c in 0..5usize,
            name in "[a-z]{1,8}",
        ) {
            let mut catalog = seed::default_catalog();
            let mut ids = SequentialIds::default();
            for op in &ops {
                apply(&mut catalog, &mut ids, op);
            }
            let before = catalog.clone();
            let category = catalog.categories()[c].id.clone();

            catalog.add_item(&category, &name, "📦", &mut ids).unwrap();

            prop_assert_eq!(catalog.progress().total_items, before.progress().total_items + 1);
            prop_assert_eq!(catalog.progress().packed_items, before.progress().packed_items);
            for old in before.categories() {
                let new = catalog.category(&old.id).unwrap();
                for (a, b) in old.items.iter().zip(new.items.iter()) {
                    prop_assert_eq!(a, b);
                }
            }
        }

        /// Setting the trip type twice equals setting it once.
        #[test]
        fn trip_type_is_idempotent(ops in prop::collection::vec(op(), 0..20), family in any::<bool>()) {
            let mut catalog = seed::default_catalog();
            let mut ids = SequentialIds::default();
            for op in &ops {
                apply(&mut catalog, &mut ids, op);
            }
            let trip = if family { TripType::Family } else { TripType::Solo };

            apply_trip_type(&mut catalog, trip).unwrap();
            let once = catalog.clone();
            apply_trip_type(&mut catalog, trip).unwrap();
            prop_assert_eq!(catalog, once);
        }
    }
}
