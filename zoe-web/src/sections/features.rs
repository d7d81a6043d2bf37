use leptos::html;
use leptos::prelude::*;
use shared::content::FEATURES;
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::delay_style;

#[component]
pub fn Features() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let cards = FEATURES
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            view! {
                <article
                    class="feature-card reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                >
                    <div class="image-placeholder feature-image" data-image=feature.image>
                        <Icon glyph=feature.icon class="placeholder-icon"/>
                    </div>
                    <div class="feature-body">
                        <div class="icon-box">
                            <Icon glyph=feature.icon/>
                        </div>
                        <h3 class="feature-title">{feature.title}</h3>
                        <p class="text-muted">{feature.description}</p>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="features" class="section" node_ref=section>
            <div class="container">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="section-eyebrow">"Features"</span>
                    <h2 class="section-title">
                        "Comprehensive " <span class="gradient-text">"Health Services"</span>
                    </h2>
                    <p class="section-text">
                        "Everything you need for a complete health checkup, powered by AI and sensors."
                    </p>
                </div>
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}
