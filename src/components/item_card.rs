//! Item Card Component
//!
//! One packable item inside a category panel. Clicking toggles it.

use leptos::prelude::*;
use packpal_core::{CategoryId, Item};

use crate::context::use_app_context;
use crate::sound::SoundType;
use crate::store::{store_highlighted, store_toggle_item, use_app_store};

#[component]
pub fn ItemCard(category_id: CategoryId, item: Item) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let Item { id, name, emoji, packed } = item;
    let dom_id = format!("item-{}", id);
    let highlight_id = id.clone();
    let is_highlighted = move || store_highlighted(&store).as_ref() == Some(&highlight_id);

    let toggle = move |_| {
        if let Ok(now_packed) = store_toggle_item(&store, &category_id, &id) {
            ctx.play(if now_packed { SoundType::Check } else { SoundType::Uncheck });
        }
    };

    view! {
        <li
            id=dom_id
            class=move || {
                let mut class = String::from("item-card");
                if packed { class.push_str(" packed"); }
                if is_highlighted() { class.push_str(" highlight-item"); }
                class
            }
            on:click=toggle
        >
            <span
                class=if packed { "item-check checked" } else { "item-check" }
                role="checkbox"
                aria-checked=packed.to_string()
            >
                {packed.then_some("✓")}
            </span>
            <span class="item-emoji">{emoji}</span>
            <span class="item-name">{name}</span>
        </li>
    }
}
