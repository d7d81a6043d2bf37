use leptos::html;
use leptos::prelude::*;
use shared::accordion::Accordion;
use shared::content::{Glyph, FAQS};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{HEADER_DELAY_MS, LIST_DELAY_MS};
use crate::utils::dom::{delay_style, scroll_to_section};

#[component]
pub fn Faq() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);
    let accordion = RwSignal::new(Accordion::default());

    let items = FAQS
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let is_open = move || accordion.with(|a| a.is_open(index));
            view! {
                <div
                    class="faq-item reveal"
                    class:visible=move || visible.get()
                    class:open=is_open
                    style=delay_style(stagger_delay_ms(LIST_DELAY_MS, index))
                >
                    <button
                        class="faq-question"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| accordion.update(|a| a.toggle(index))
                    >
                        <span>{faq.question}</span>
                        <Icon glyph=Glyph::ChevronDown class="faq-chevron"/>
                    </button>
                    <Show when=is_open>
                        <p class="faq-answer">{faq.answer}</p>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="faq" class="section" node_ref=section>
            <div class="container container-narrow">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="section-eyebrow">"FAQ"</span>
                    <h2 class="section-title">
                        "Frequently Asked " <span class="gradient-text">"Questions"</span>
                    </h2>
                </div>
                <div class="faq-list">{items}</div>
                <p class="faq-more text-center">
                    "Still have questions? "
                    <button class="link-button" on:click=|_| scroll_to_section("contact")>
                        "Contact Us"
                    </button>
                </p>
            </div>
        </section>
    }
}
