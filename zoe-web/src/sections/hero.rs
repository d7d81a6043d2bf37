use leptos::html;
use leptos::prelude::*;
use shared::content::{Glyph, HERO_BADGE, HERO_COPY, HERO_STATS, HERO_VITALS};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon, Modal};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::{delay_style, scroll_to_section};

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);
    let (demo_open, set_demo_open) = signal(false);

    let quick_stats = HERO_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="quick-stat">
                    <span class="quick-stat-value">{stat.value}</span>
                    <span class="quick-stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    let vitals = HERO_VITALS
        .iter()
        .enumerate()
        .map(|(index, vital)| {
            view! {
                <div class=format!("vital-card vital-card-{}", index)>
                    <span class="vital-emoji">{vital.emoji}</span>
                    <div>
                        <p class="vital-label">{vital.label}</p>
                        <p class="vital-reading">{vital.reading}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero" node_ref=section>
            <div class="container hero-grid">
                <div
                    class="hero-copy reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="badge">
                        <Icon glyph=Glyph::HeartPulse/>
                        {HERO_BADGE}
                    </span>
                    <h1 class="hero-title">
                        "Meet " <span class="gradient-text">"Dr. Zoe"</span> <br/>
                        "Your AI Doctor"
                    </h1>
                    <p class="hero-text">{HERO_COPY}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary btn-lg" on:click=|_| scroll_to_section("about")>
                            "Get Started"
                            <Icon glyph=Glyph::ArrowRight/>
                        </button>
                        <button class="btn btn-outline btn-lg" on:click=move |_| set_demo_open.set(true)>
                            <Icon glyph=Glyph::PlayCircle/>
                            "Watch Demo"
                        </button>
                    </div>
                    <div class="quick-stats">{quick_stats}</div>
                </div>

                <div
                    class="hero-visual reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, 1))
                >
                    <div class="image-placeholder hero-image">
                        <Icon glyph=Glyph::Stethoscope class="placeholder-icon"/>
                        <span>"AI Doctor Kiosk"</span>
                    </div>
                    {vitals}
                </div>
            </div>

            <Modal
                open=demo_open
                on_close=Callback::new(move |_| set_demo_open.set(false))
                class="demo-modal"
            >
                <div class="video-placeholder">
                    <Icon glyph=Glyph::Play class="placeholder-icon"/>
                    <p>"Demo video coming soon"</p>
                </div>
            </Modal>
        </section>
    }
}
