//! Launch Modal Component
//!
//! "Launch Packing Mode" countdown: a progress bar that fills in 2% steps,
//! then the ready stage with confetti.

use std::time::Duration;

use leptos::prelude::*;
use tracing::warn;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::effects::{self, ConfettiOptions};
use crate::sound::SoundType;

const STEP: u32 = 2;
const TICK: Duration = Duration::from_millis(50);
const READY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Preparing,
    Ready,
}

/// Next progress value; `None` once the bar is full
fn advance(progress: u32) -> Option<u32> {
    (progress < 100).then(|| (progress + STEP).min(100))
}

#[component]
pub fn LaunchModal() -> impl IntoView {
    let ctx = use_app_context();
    let open = ctx.launch_open;

    let (stage, set_stage) = signal(Stage::Preparing);
    let (progress, set_progress) = signal(0u32);
    let interval = StoredValue::new(None::<IntervalHandle>);
    let ready_timer = StoredValue::new(None::<TimeoutHandle>);

    let stop_timers = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
        if let Some(handle) = ready_timer.get_value() {
            handle.clear();
        }
        interval.set_value(None);
        ready_timer.set_value(None);
    };

    Effect::new(move |_| {
        if !open.get() {
            stop_timers();
            return;
        }
        set_stage.set(Stage::Preparing);
        set_progress.set(0);
        ctx.play(SoundType::Launch);

        let tick = move || match advance(progress.get_untracked()) {
            Some(next) => set_progress.set(next),
            None => {
                if let Some(handle) = interval.get_value() {
                    handle.clear();
                }
                interval.set_value(None);
                let ready = set_timeout_with_handle(
                    move || {
                        set_stage.set(Stage::Ready);
                        ctx.play(SoundType::Beep);
                        effects::fire_confetti(&ConfettiOptions::launch());
                    },
                    READY_DELAY,
                );
                match ready {
                    Ok(handle) => ready_timer.set_value(Some(handle)),
                    Err(e) => warn!("launch timer: {:?}", e),
                }
            }
        };
        match set_interval_with_handle(tick, TICK) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => warn!("launch interval: {:?}", e),
        }
    });

    on_cleanup(stop_timers);

    view! {
        <Modal open=open title="Launch Packing Mode" class="launch-modal">
            <div class="launch-top-bar">
                <div class="launch-top-fill" style=move || format!("width: {}%;", progress.get())></div>
            </div>
            {move || match stage.get() {
                Stage::Preparing => view! {
                    <div class="launch-stage">
                        <div class="launch-icon spinning">"⏳"</div>
                        <h3>"Preparing for Launch"</h3>
                        <p>"Initializing your packing adventure..."</p>
                        <div class="launch-progress">
                            <div class="launch-progress-fill" style=move || format!("width: {}%;", progress.get())></div>
                        </div>
                    </div>
                }.into_any(),
                Stage::Ready => view! {
                    <div class="launch-stage">
                        <div class="launch-icon">"🚀"</div>
                        <h3>"Ready for Takeoff!"</h3>
                        <p>"Your packing mode is now activated. Let's get started!"</p>
                        <button type="button" class="btn-primary" on:click=move |_| open.set(false)>
                            "Let's Pack!"
                        </button>
                    </div>
                }.into_any(),
            }}
        </Modal>
    }
}
