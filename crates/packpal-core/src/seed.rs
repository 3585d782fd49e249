//! Seed Data
//!
//! The categories a session starts with and the family trip template.

use crate::catalog::Catalog;
use crate::category::{Category, CategoryTemplate};
use crate::ids::CategoryId;
use crate::item::Item;
use crate::trip::TripType;

fn items(seed: &[(&str, &str, &str)]) -> Vec<Item> {
    seed.iter()
        .map(|(id, name, emoji)| Item::new(*id, *name, *emoji))
        .collect()
}

/// Starting checklist: five categories, clothing expanded
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("clothing", "Clothing", "👕")
            .with_items(items(&[
                ("c1", "T-Shirts", "👕"),
                ("c2", "Pants/Shorts", "👖"),
                ("c3", "Underwear", "🩲"),
                ("c4", "Socks", "🧦"),
                ("c5", "Jacket", "🧥"),
            ]))
            .opened(),
        Category::new("toiletries", "Toiletries", "🧼").with_items(items(&[
            ("t1", "Toothbrush", "🪥"),
            ("t2", "Toothpaste", "🧴"),
            ("t3", "Shampoo", "🧴"),
            ("t4", "Soap", "🧼"),
            ("t5", "Deodorant", "🧴"),
        ])),
        Category::new("gadgets", "Gadgets", "🔌").with_items(items(&[
            ("g1", "Phone Charger", "🔌"),
            ("g2", "Laptop", "💻"),
            ("g3", "Headphones", "🎧"),
            ("g4", "Camera", "📷"),
            ("g5", "Power Bank", "🔋"),
        ])),
        Category::new("documents", "Documents", "📑").with_items(items(&[
            ("d1", "Passport", "🛂"),
            ("d2", "ID Card", "💳"),
            ("d3", "Boarding Pass", "🎫"),
            ("d4", "Hotel Reservation", "🏨"),
            ("d5", "Travel Insurance", "📄"),
        ])),
        Category::new("essentials", "Essentials", "✈️").with_items(items(&[
            ("e1", "Wallet", "👛"),
            ("e2", "Sunglasses", "🕶️"),
            ("e3", "Medications", "💊"),
            ("e4", "Water Bottle", "🧴"),
            ("e5", "Snacks", "🍫"),
        ])),
    ]
}

/// The seed as a catalog.
///
/// The seed ids are unique, so this cannot fail; an empty catalog is
/// returned if it ever does.
pub fn default_catalog() -> Catalog {
    Catalog::new(default_categories()).unwrap_or_default()
}

/// Family trip extras, inserted expanded at the end of the checklist
pub fn family_template() -> CategoryTemplate {
    CategoryTemplate {
        id: CategoryId::new("family"),
        name: "Family".to_string(),
        emoji: "👨‍👩‍👧‍👦".to_string(),
        items: items(&[
            ("f1", "Kids' Clothes", "👶"),
            ("f2", "Toys", "🧸"),
            ("f3", "Baby Wipes", "🧻"),
            ("f4", "Diapers", "🧷"),
            ("f5", "Stroller", "👶"),
        ]),
        trip_type: TripType::Family,
        open_on_insert: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_valid() {
        assert!(Catalog::new(default_categories()).is_ok());
        let catalog = default_catalog();
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.progress().total_items, 25);
        assert_eq!(catalog.progress().packed_items, 0);
        assert!(catalog.categories()[0].is_open);
        assert!(catalog.categories().iter().all(|c| !c.is_conditional()));
    }

    #[test]
    fn test_family_template_is_unpacked() {
        let family = family_template().instantiate();
        assert_eq!(family.items.len(), 5);
        assert!(family.items.iter().all(|item| !item.packed));
    }
}
