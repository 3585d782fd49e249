//! Footer Component
//!
//! Links, copyright and a disclosure with the most recent log lines.

use chrono::Datelike;
use leptos::prelude::*;

use crate::components::{ThemeToggle, NAV_LINKS};

const LOG_LINES_SHOWN: usize = 20;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    let refresh_logs = move |_| {
        let lines = console_logger::recent_lines();
        let start = lines.len().saturating_sub(LOG_LINES_SHOWN);
        set_log_lines.set(lines[start..].to_vec());
    };

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#" class="navbar-brand">"PackPal 🚀"</a>
                    <p>"Making packing fun, interactive, and stress-free for travelers around the world."</p>
                </div>
                <nav class="footer-links">
                    <h3>"Navigation"</h3>
                    <ul>
                        {NAV_LINKS.iter().map(|(href, label)| view! {
                            <li><a href=*href>{*label}</a></li>
                        }).collect_view()}
                    </ul>
                </nav>
                <nav class="footer-links">
                    <h3>"Legal"</h3>
                    <ul>
                        <li><a href="#">"Privacy"</a></li>
                        <li><a href="#">"Terms"</a></li>
                    </ul>
                </nav>
            </div>
            <details class="footer-log">
                <summary on:click=refresh_logs>"Recent activity"</summary>
                <pre>
                    {move || log_lines.get().join("\n")}
                </pre>
            </details>
            <div class="footer-bottom">
                <p>"© " {year} " PackPal. All rights reserved."</p>
                <ThemeToggle />
                <p>"Made with " <span class="heart">"♥"</span> " for travelers"</p>
            </div>
        </footer>
    }
}
