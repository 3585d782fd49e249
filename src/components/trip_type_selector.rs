//! Trip Type Selector Component
//!
//! Solo/Family toggle; Family adds the family category to the checklist.

use leptos::prelude::*;
use packpal_core::TripType;

/// Segmented buttons for the trip type
#[component]
pub fn TripTypeSelector(
    current: Signal<TripType>,
    on_change: impl Fn(TripType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="trip-type-selector" role="radiogroup" aria-label="Trip type">
            {TripType::ALL.iter().map(|trip_type| {
                let trip_type = *trip_type;
                let is_selected = move || current.get() == trip_type;
                view! {
                    <button
                        type="button"
                        role="radio"
                        aria-checked=move || is_selected().to_string()
                        class=move || if is_selected() { "trip-btn active" } else { "trip-btn" }
                        on:click=move |_| {
                            if !is_selected() {
                                on_change(trip_type);
                            }
                        }
                    >
                        {trip_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
