//! Add Item Modal Component
//!
//! Name, category and emoji for a custom item.

use leptos::prelude::*;
use packpal_core::CategoryId;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::forms::add_item_message;
use crate::models::emoji_palette;
use crate::sound::SoundType;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

#[component]
pub fn AddItemModal(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal::<Option<CategoryId>>(None);
    let (emoji, set_emoji) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let categories = Memo::new(move |_| {
        store.catalog().with(|c| {
            c.categories()
                .iter()
                .map(|c| (c.id.clone(), c.name.clone(), c.emoji.clone()))
                .collect::<Vec<_>>()
        })
    });

    // Fresh form on every open, defaulting to the first category
    Effect::new(move |_| {
        if open.get() {
            set_name.set(String::new());
            set_error.set(None);
            set_category.set(categories.get_untracked().first().map(|(id, _, _)| id.clone()));
        }
    });

    // First emoji of the palette whenever the category changes
    Effect::new(move |_| {
        let palette = category.with(|c| emoji_palette(c.as_ref().map(CategoryId::as_str).unwrap_or_default()));
        set_emoji.set(palette.first().copied().unwrap_or_default().to_string());
    });

    let palette = move || category.with(|c| emoji_palette(c.as_ref().map(CategoryId::as_str).unwrap_or_default()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(category_id) = category.get_untracked() else {
            set_error.set(Some("Pick a category"));
            return;
        };
        let result = store_add_item(&store, &category_id, &name.get_untracked(), &emoji.get_untracked());
        match result {
            Ok(_) => {
                ctx.play(SoundType::Add);
                open.set(false);
            }
            Err(e) => set_error.set(Some(add_item_message(&e))),
        }
    };

    view! {
        <Modal open=open title="Add Item" class="add-item-modal">
            <h3 class="modal-title">"✨ Add Custom Item"</h3>
            <form class="add-item-form" on:submit=submit>
                <label for="item-name">"Item Name"</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder="What do you need to pack?"
                    class=move || if error.get().is_some() { "input error" } else { "input" }
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}

                <fieldset class="category-choices">
                    <legend>"Category"</legend>
                    <For
                        each=move || categories.get()
                        key=|(id, _, _)| id.clone()
                        children=move |(id, label, icon)| {
                            let checked_id = id.clone();
                            view! {
                                <label class="category-choice">
                                    <input
                                        type="radio"
                                        name="item-category"
                                        prop:checked=move || category.with(|c| c.as_ref() == Some(&checked_id))
                                        on:change=move |_| set_category.set(Some(id.clone()))
                                    />
                                    <span>{icon} " " {label}</span>
                                </label>
                            }
                        }
                    />
                </fieldset>

                <div class="emoji-palette" role="radiogroup" aria-label="Emoji">
                    {move || palette().iter().map(|glyph| {
                        let glyph = *glyph;
                        view! {
                            <button
                                type="button"
                                class=move || if emoji.get() == glyph { "emoji-btn active" } else { "emoji-btn" }
                                on:click=move |_| set_emoji.set(glyph.to_string())
                            >
                                {glyph}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" class="btn-primary">"Add Item"</button>
                </div>
            </form>
        </Modal>
    }
}
