use leptos::html;
use leptos::prelude::*;
use shared::carousel::{Carousel, Direction};
use shared::content::{Glyph, GALLERY};
use shared::visibility::stagger_delay_ms;

use crate::components::{use_reveal, Icon};
use crate::utils::constants::{CONTENT_DELAY_MS, HEADER_DELAY_MS};
use crate::utils::dom::delay_style;

/// Image grid with a cyclic lightbox.
#[component]
pub fn Gallery() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section);
    let carousel = RwSignal::new(Carousel::new(GALLERY.len()));

    let tiles = GALLERY
        .iter()
        .enumerate()
        .map(|(index, image)| {
            view! {
                <button
                    class="gallery-tile reveal"
                    class:visible=move || visible.get()
                    style=delay_style(stagger_delay_ms(CONTENT_DELAY_MS, index))
                    on:click=move |_| carousel.update(|c| c.open(index))
                >
                    <div class="image-placeholder" data-image=image.src>
                        <Icon glyph=Glyph::Monitor class="placeholder-icon"/>
                        <span>{image.alt}</span>
                    </div>
                    <div class="gallery-overlay">
                        <Icon glyph=Glyph::ZoomIn/>
                    </div>
                </button>
            }
        })
        .collect_view();

    let lightbox = move || {
        let index = carousel.with(|c| c.selected())?;
        let image = GALLERY.get(index)?;
        Some(view! {
            <div class="lightbox" on:click=move |_| carousel.update(|c| c.close())>
                <button
                    class="lightbox-close"
                    aria-label="Close"
                    on:click=move |_| carousel.update(|c| c.close())
                >
                    <Icon glyph=Glyph::X/>
                </button>
                <button
                    class="lightbox-nav lightbox-prev"
                    aria-label="Previous image"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        carousel.update(|c| c.step(Direction::Prev));
                    }
                >
                    <Icon glyph=Glyph::ChevronLeft/>
                </button>
                <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                    <div class="image-placeholder lightbox-image" data-image=image.src>
                        <Icon glyph=Glyph::Monitor class="placeholder-icon"/>
                    </div>
                    <p class="lightbox-caption">{image.alt}</p>
                    <p class="text-muted">{format!("{} / {}", index + 1, GALLERY.len())}</p>
                </div>
                <button
                    class="lightbox-nav lightbox-next"
                    aria-label="Next image"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        carousel.update(|c| c.step(Direction::Next));
                    }
                >
                    <Icon glyph=Glyph::ChevronRight/>
                </button>
            </div>
        })
    };

    view! {
        <section id="gallery" class="section" node_ref=section>
            <div class="container">
                <div
                    class="section-header reveal"
                    class:visible=move || visible.get()
                    style=delay_style(HEADER_DELAY_MS)
                >
                    <span class="section-eyebrow">"Gallery"</span>
                    <h2 class="section-title">
                        "See Dr. Zoe " <span class="gradient-text">"In Action"</span>
                    </h2>
                </div>
                <div class="gallery-grid">{tiles}</div>
            </div>
            {lightbox}
        </section>
    }
}
