//! Leaderboard Component

use leptos::prelude::*;

use crate::models::{initials, medal, LEADERBOARD};

#[component]
pub fn Leaderboard() -> impl IntoView {
    view! {
        <section id="leaderboard" class="leaderboard-section">
            <div class="section-header">
                <h2>"🏆 Packing Champions"</h2>
                <p>"Meet our most active packers this week!"</p>
            </div>
            <div class="leaderboard-card">
                <h3>"Most Trips Packed"</h3>
                <ol class="leaderboard-list">
                    {LEADERBOARD.iter().enumerate().map(|(rank, packer)| view! {
                        <li class=format!("leaderboard-row rank-{}", rank + 1)>
                            <span class="leaderboard-rank">
                                {medal(rank).map(str::to_string).unwrap_or_else(|| format!("#{}", rank + 1))}
                            </span>
                            <span class="avatar" aria-hidden="true">{initials(packer.name)}</span>
                            <span class="leaderboard-name">{packer.name}</span>
                            <span class="leaderboard-badge">{packer.badge}</span>
                            <span class="leaderboard-trips">{packer.trips} " trips"</span>
                        </li>
                    }).collect_view()}
                </ol>
            </div>
        </section>
    }
}
