//! Modal Component
//!
//! Dialog shell shared by the add-item, launch and login modals. Escape and
//! backdrop clicks close it.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let dialog_class = format!("modal {}", class).trim().to_string();

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)></div>
            <div class=dialog_class.clone() role="dialog" aria-modal="true" aria-label=title.clone()>
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| open.set(false)
                >
                    "✕"
                </button>
                {children()}
            </div>
        </Show>
    }
}
