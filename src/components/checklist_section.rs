//! Checklist Section Component
//!
//! Trip type, overall progress, category panels and the packing summary.
//! Completion effects (sounds, confetti) are driven from here.

use std::time::Duration;

use leptos::prelude::*;
use packpal_core::{CompletionEvent, CompletionWatcher, PackingStatus, Progress, TripType};
use tracing::info;

use crate::components::{AddItemModal, CategoryPanel, TripTypeSelector};
use crate::context::use_app_context;
use crate::sound::SoundType;
use crate::store::{
    store_category_ids, store_clear_highlight, store_pick_random, store_progress, store_set_trip_type,
    store_trip_type, use_app_store, AppStateStoreFields,
};

const MILESTONE_BADGE: Duration = Duration::from_secs(3);
const HIGHLIGHT: Duration = Duration::from_secs(2);

/// Milestone newly reached when moving from `previous` to `current` percent
fn milestone_crossed(previous: u8, current: Progress) -> Option<u8> {
    current.milestone().filter(|m| previous < *m)
}

fn summary_message(percentage: u8) -> (&'static str, &'static str) {
    match percentage {
        100 => ("😎", "All packed! You're ready to go!"),
        51..=99 => ("😊", "You're making great progress!"),
        _ => ("😬", "Still got some packing to do!"),
    }
}

#[component]
pub fn ChecklistSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let progress = Memo::new(move |_| store_progress(&store));
    let category_ids = Memo::new(move |_| store_category_ids(&store));
    let trip_type = Signal::derive(move || store_trip_type(&store));

    let add_open = RwSignal::new(false);
    let (milestone, set_milestone) = signal::<Option<u8>>(None);

    // Edge-triggered completion effects
    let watcher = StoredValue::new(store.catalog().with_untracked(CompletionWatcher::new));
    Effect::new(move |_| {
        let events = store
            .catalog()
            .with(|catalog| watcher.try_update_value(|w| w.observe(catalog)))
            .unwrap_or_default();
        for event in events {
            match event {
                CompletionEvent::CategoryPacked(id) => {
                    info!(category = %id, "category packed");
                    ctx.play(SoundType::Complete);
                }
                CompletionEvent::AllPacked => {
                    info!("everything packed");
                    ctx.celebrate();
                }
            }
        }
    });

    // Milestone badge, shown for a few seconds
    Effect::new(move |previous: Option<u8>| {
        let current = progress.get();
        if let Some(m) = previous.and_then(|p| milestone_crossed(p, current)) {
            set_milestone.set(Some(m));
            set_timeout(
                move || {
                    if milestone.get_untracked() == Some(m) {
                        set_milestone.set(None);
                    }
                },
                MILESTONE_BADGE,
            );
        }
        current.percentage()
    });

    let on_trip_change = move |trip: TripType| {
        if store_set_trip_type(&store, trip).is_ok() {
            ctx.play(SoundType::Switch);
        }
    };

    let pick_random = move |_| {
        if let Ok(Some((_, item_id))) = store_pick_random(&store) {
            ctx.play(SoundType::Random);
            let dom_id = format!("item-{}", item_id);
            request_animation_frame(move || crate::effects::scroll_to_id(&dom_id));
            set_timeout(move || store_clear_highlight(&store, &item_id), HIGHLIGHT);
        }
    };

    let status = move || progress.get().status();

    view! {
        <section id="checklist" class="checklist-section">
            <div class="section-header">
                <h2>"📝 Your Packing Checklist"</h2>
                <p>"Keep track of everything you need for your trip. Check off items as you pack them."</p>
            </div>

            <TripTypeSelector current=trip_type on_change=on_trip_change />

            <div class="progress-block">
                <div class="progress-labels">
                    <span>"Packing Progress"</span>
                    <span class=move || format!("status-label {}", status_class(status()))>{move || status().label()}</span>
                    <span>
                        {move || progress.get().packed_items} " of " {move || progress.get().total_items} " items packed"
                    </span>
                </div>
                <div
                    class="progress-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || progress.get().percentage().to_string()
                >
                    <div class="progress-fill" style=move || format!("width: {:.2}%;", progress.get().ratio() * 100.0)></div>
                    <Show when=move || progress.get().is_complete()>
                        <span class="progress-rocket">"🚀"</span>
                    </Show>
                </div>
                {move || milestone.get().map(|m| view! {
                    <div class="milestone-badge">"🎉 " {m} "% packed!"</div>
                })}
            </div>

            <div class="checklist-layout">
                <div class="category-list">
                    <For
                        each=move || category_ids.get()
                        key=|id| id.clone()
                        let:category_id
                    >
                        <CategoryPanel category_id=category_id />
                    </For>
                </div>

                <aside class="summary-card">
                    <h3>"✈️ Packing Summary"</h3>
                    <dl>
                        <div><dt>"Total Items"</dt><dd>{move || progress.get().total_items}</dd></div>
                        <div><dt>"Packed Items"</dt><dd class="packed">{move || progress.get().packed_items}</dd></div>
                        <div><dt>"Remaining Items"</dt><dd class="remaining">{move || progress.get().remaining()}</dd></div>
                    </dl>
                    <p class="summary-message">
                        {move || {
                            let (face, text) = summary_message(progress.get().percentage());
                            format!("{} {}", face, text)
                        }}
                    </p>
                    <div class="summary-actions">
                        <button type="button" class="btn-primary" on:click=move |_| add_open.set(true)>
                            "➕ Add Item"
                        </button>
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || progress.get().remaining() == 0
                            on:click=pick_random
                        >
                            "🎲 Random Item"
                        </button>
                    </div>
                </aside>
            </div>

            <AddItemModal open=add_open />
        </section>
    }
}

fn status_class(status: PackingStatus) -> &'static str {
    match status {
        PackingStatus::NotStarted => "not-started",
        PackingStatus::InProgressLow => "low",
        PackingStatus::InProgressHigh => "high",
        PackingStatus::Complete => "complete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_crossed() {
        assert_eq!(milestone_crossed(20, Progress::new(1, 4)), Some(25));
        assert_eq!(milestone_crossed(25, Progress::new(1, 4)), None);
        // dropping back onto a milestone does not count
        assert_eq!(milestone_crossed(75, Progress::new(2, 4)), None);
        assert_eq!(milestone_crossed(90, Progress::new(3, 3)), Some(100));
        assert_eq!(milestone_crossed(0, Progress::new(1, 3)), None);
    }

    #[test]
    fn test_summary_message() {
        assert_eq!(summary_message(100).0, "😎");
        assert_eq!(summary_message(60).0, "😊");
        assert_eq!(summary_message(50).0, "😬");
        assert_eq!(summary_message(0).1, "Still got some packing to do!");
    }
}
