//! Confirm Button Component
//!
//! Two-step button for destructive actions such as resetting a category.
//! An unanswered prompt falls back to the plain button after a few seconds.

use std::time::Duration;

use leptos::prelude::*;

const PROMPT_TIMEOUT: Duration = Duration::from_secs(4);

/// Prompt state after the timer of prompt `ticket` fires.
/// Only the prompt that started the timer is dismissed.
fn expire(prompt: Option<u32>, ticket: u32) -> Option<u32> {
    prompt.filter(|current| *current != ticket)
}

/// Shows `label`; a click swaps it for "Sure?" with ✓/✗.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    // ticket of the open prompt, if any
    let prompt = RwSignal::new(None::<u32>);
    let next_ticket = StoredValue::new(0u32);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        next_ticket.update_value(|t| *t = t.wrapping_add(1));
        let ticket = next_ticket.get_value();
        prompt.set(Some(ticket));
        set_timeout(
            move || {
                // the component may be gone by now
                prompt.try_update(|p| *p = expire(*p, ticket));
            },
            PROMPT_TIMEOUT,
        );
    };

    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        prompt.set(None);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        {move || {
            if prompt.get().is_some() {
                view! {
                    <span class="inline-confirm">
                        <span class="inline-confirm-text">"Sure?"</span>
                        <button type="button" class="confirm-btn" title="Confirm" on:click=move |ev| answer(ev, true)>
                            "✓"
                        </button>
                        <button type="button" class="cancel-btn" title="Cancel" on:click=move |ev| answer(ev, false)>
                            "✗"
                        </button>
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <button type="button" class=button_class.clone() on:click=ask>
                        {label.clone()}
                    </button>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_dismisses_own_prompt() {
        assert_eq!(expire(Some(3), 3), None);
        assert_eq!(expire(None, 3), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_prompt() {
        // answered prompt 1, then opened prompt 2 before timer 1 fired
        assert_eq!(expire(Some(2), 1), Some(2));
    }
}
