use leptos::prelude::*;
use shared::content::{
    copyright_line, Glyph, NavLink, BRAND, FOOTER_BLURB, FOOTER_SOCIALS, LEGAL_LINKS, QUICK_LINKS,
    SERVICE_LINKS,
};

use crate::components::Icon;
use crate::utils::dom::scroll_to_section;

fn link_column(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    let items = links
        .iter()
        .map(|link| match link.anchor() {
            Some(id) => view! {
                <li>
                    <a
                        href=link.href
                        class="footer-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(id);
                        }
                    >
                        {link.name}
                    </a>
                </li>
            }
            .into_any(),
            None => view! {
                <li>
                    <a href=link.href class="footer-link">{link.name}</a>
                </li>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div>
            <h4 class="footer-heading">{title}</h4>
            <ul class="footer-links">{items}</ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year_line = copyright_line(chrono::Local::now().date_naive());

    let socials = FOOTER_SOCIALS
        .iter()
        .map(|social| {
            view! {
                <a class="social-link" href=social.href aria-label=social.label>
                    <Icon glyph=social.icon/>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <a
                        href="#home"
                        class="nav-logo"
                        on:click=|ev| {
                            ev.prevent_default();
                            scroll_to_section("home");
                        }
                    >
                        <span class="logo-mark">
                            <Icon glyph=Glyph::Stethoscope/>
                        </span>
                        <span class="logo-text">{BRAND}</span>
                    </a>
                    <p class="footer-blurb">{FOOTER_BLURB}</p>
                    <div class="social-links">{socials}</div>
                </div>
                {link_column("Quick Links", QUICK_LINKS)}
                {link_column("Legal", LEGAL_LINKS)}
                {link_column("Services", SERVICE_LINKS)}
            </div>
            <div class="container footer-bottom">
                <p>{year_line}</p>
            </div>
        </footer>
    }
}
