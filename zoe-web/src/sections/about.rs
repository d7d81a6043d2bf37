use leptos::html;
use leptos::prelude::*;
use shared::content::{Glyph, ABOUT_COPY, ABOUT_HIGHLIGHTS, TRUST_BADGES};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::delay_style;

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let highlights = ABOUT_HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div
                    class="highlight reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                >
                    <div class="icon-box">
                        <Icon glyph=item.icon/>
                    </div>
                    <div>
                        <h3 class="highlight-title">{item.title}</h3>
                        <p class="text-muted">{item.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let badges = TRUST_BADGES
        .iter()
        .map(|badge| {
            view! {
                <span class="trust-badge">
                    <Icon glyph=Glyph::Shield/>
                    {*badge}
                </span>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section" node_ref=section>
            <div class="container two-column">
                <div
                    class="image-placeholder about-image reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <Icon glyph=Glyph::Monitor class="placeholder-icon"/>
                    <span>"Dr. Zoe Health Kiosk"</span>
                </div>

                <div>
                    <div class="section-header text-left reveal" class:visible=move || visible.get()>
                        <span class="section-eyebrow">"About Dr. Zoe"</span>
                        <h2 class="section-title">
                            "Your Personal " <span class="gradient-text">"AI Health Assistant"</span>
                        </h2>
                        <p class="section-text">{ABOUT_COPY}</p>
                    </div>
                    <div class="highlights">{highlights}</div>
                    <div class="trust-badges">{badges}</div>
                </div>
            </div>
        </section>
    }
}
