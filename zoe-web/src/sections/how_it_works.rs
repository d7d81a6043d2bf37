use leptos::html;
use leptos::prelude::*;
use shared::content::STEPS;
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{HEADER_DELAY_MS, LIST_DELAY_MS};
use crate::utils::dom::delay_style;

/// Numbered steps on a timeline, alternating sides.
#[component]
pub fn HowItWorks() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let side = if index % 2 == 0 { "timeline-left" } else { "timeline-right" };
            view! {
                <div
                    class=format!("timeline-item {} reveal", side)
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(LIST_DELAY_MS, index))
                >
                    <div class="timeline-marker">{index + 1}</div>
                    <div class="timeline-card">
                        <div class="icon-box">
                            <Icon glyph=step.icon/>
                        </div>
                        <h3 class="timeline-title">{step.title}</h3>
                        <p class="text-muted">{step.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="how-it-works" class="section section-tinted" node_ref=section>
            <div class="container">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="section-eyebrow">"How It Works"</span>
                    <h2 class="section-title">
                        "Simple Steps to " <span class="gradient-text">"Better Health"</span>
                    </h2>
                    <p class="section-text">
                        "From check-in to report, a full health assessment in a few minutes."
                    </p>
                </div>
                <div class="timeline">{steps}</div>
            </div>
        </section>
    }
}
