//! Category Panel Component
//!
//! Collapsible panel listing a category's items, with "Check all" and
//! "Reset" actions.

use leptos::prelude::*;
use packpal_core::{Category, CategoryId, Progress};

use crate::components::{ConfirmButton, ItemCard};
use crate::context::use_app_context;
use crate::sound::SoundType;
use crate::store::{
    store_check_all, store_reset_all, store_toggle_category, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CategoryPanel(category_id: CategoryId) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = StoredValue::new(category_id);
    let category = Memo::new(move |_| {
        id.with_value(|id| store.catalog().with(|c| c.category(id).cloned()))
    });
    let progress = Memo::new(move |_| {
        category.with(|c| c.as_ref().map(Category::progress).unwrap_or_default())
    });
    let is_open = Memo::new(move |_| category.with(|c| c.as_ref().is_some_and(|c| c.is_open)));
    let name = move || category.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let emoji = move || category.with(|c| c.as_ref().map(|c| c.emoji.clone()).unwrap_or_default());

    let toggle_open = move |_| {
        if id.with_value(|id| store_toggle_category(&store, id)).is_ok() {
            ctx.play(SoundType::Click);
        }
    };

    let check_all = Callback::new(move |_| {
        if id.with_value(|id| store_check_all(&store, id)).is_ok() {
            ctx.play(SoundType::Check);
        }
    });

    let reset_all = Callback::new(move |_| {
        if id.with_value(|id| store_reset_all(&store, id)).is_ok() {
            ctx.play(SoundType::Uncheck);
        }
    });

    let panel_class = move || {
        if progress.get().is_complete() {
            "category-panel complete"
        } else {
            "category-panel"
        }
    };

    view! {
        <div class=panel_class>
            <div
                class="category-header"
                role="button"
                aria-expanded=move || is_open.get().to_string()
                on:click=toggle_open
            >
                <span class="category-emoji">{emoji}</span>
                <h3 class="category-name">{name}</h3>
                <span class="category-count">{move || count_label(progress.get())}</span>
                <span class="category-chevron">{move || if is_open.get() { "▲" } else { "▼" }}</span>
            </div>
            <Show when=move || is_open.get()>
                <div class="category-body">
                    <div class="category-actions">
                        <button
                            type="button"
                            class="check-all-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                check_all.run(());
                            }
                        >
                            "✓ Check All"
                        </button>
                        <ConfirmButton label="↺ Reset" button_class="reset-btn" on_confirm=reset_all />
                    </div>
                    <ul class="item-list">
                        <For
                            each=move || category.get().map(|c| c.items).unwrap_or_default()
                            key=|item| (item.id.clone(), item.packed, item.name.clone())
                            let:item
                        >
                            <ItemCard category_id=id.get_value() item=item />
                        </For>
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// "packed/total" badge text
fn count_label(progress: Progress) -> String {
    format!("{}/{}", progress.packed_items, progress.total_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(Progress::new(2, 5)), "2/5");
        assert_eq!(count_label(Progress::default()), "0/0");
    }
}
