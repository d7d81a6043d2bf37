use leptos::html;
use leptos::prelude::*;
use shared::content::{Glyph, TEAM};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::delay_style;

#[component]
pub fn Team() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);

    let members = TEAM
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let socials = member
                .social
                .iter()
                .map(|link| {
                    view! {
                        <a class="social-link" href=link.href aria-label=link.label>
                            <Icon glyph=link.icon/>
                        </a>
                    }
                })
                .collect_view();

            view! {
                <article
                    class="team-card reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                >
                    <div class="image-placeholder team-photo" data-image=member.image>
                        <Icon glyph=Glyph::User class="placeholder-icon"/>
                    </div>
                    <h3 class="team-name">{member.name}</h3>
                    <p class="team-role">{member.role}</p>
                    <p class="text-muted">{member.bio}</p>
                    <div class="social-links">{socials}</div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="team" class="section section-tinted" node_ref=section>
            <div class="container">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="section-eyebrow">"Our Team"</span>
                    <h2 class="section-title">
                        "Meet the " <span class="gradient-text">"Experts"</span>
                    </h2>
                </div>
                <div class="team-grid">{members}</div>
            </div>
        </section>
    }
}
