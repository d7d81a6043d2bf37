use leptos::html;
use leptos::prelude::*;
use shared::content::STATS;
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, AnimatedCounter, Icon};
use crate::utils::constants::CONTENT_DELAY_MS;
use crate::utils::dom::delay_style;

/// Counters start the first time the section scrolls into view.
#[component]
pub fn Stats() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let cards = STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            view! {
                <div
                    class="stat-card reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                >
                    <div class=format!("icon-box {}", stat.tone.class())>
                        <Icon glyph=stat.icon/>
                    </div>
                    <AnimatedCounter stat=*stat started=visible/>
                    <p class="stat-label">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="stats" class="section section-tinted" node_ref=section>
            <div class="container stats-grid">{cards}</div>
        </section>
    }
}
