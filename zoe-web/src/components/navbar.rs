//! Navigation Bar Component

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::content::{Glyph, BRAND, NAV_LINKS};
use shared::AppRoute;

use super::Icon;
use crate::state::use_session_context;
use crate::utils::dom::{is_scrolled, scroll_to_section};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (scrolled, set_scrolled) = signal(is_scrolled());
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| set_scrolled.set(is_scrolled()));
    on_cleanup(move || handle.remove());

    let go_to = move |id: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(id);
    };

    let logout = move |_: ev::MouseEvent| {
        session.sign_out();
        set_menu_open.set(false);
        navigate(AppRoute::Home.path(), Default::default());
    };
    let logout_mobile = logout.clone();

    let links = move || {
        NAV_LINKS
            .iter()
            .filter_map(|link| link.anchor().map(|id| (link.name, id)))
            .map(|(name, id)| {
                view! {
                    <button class="nav-link" on:click=move |_| go_to(id)>
                        {name}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="container nav-inner">
                <button class="nav-logo" on:click=move |_| go_to("home")>
                    <span class="logo-mark">
                        <Icon glyph=Glyph::Stethoscope/>
                    </span>
                    <span class="logo-text">{BRAND}</span>
                </button>

                <div class="nav-links">{links}</div>

                <div class="nav-actions">
                    <Show
                        when=move || session.is_authenticated()
                        fallback=move || {
                            view! {
                                <A href=AppRoute::Login.path() attr:class="btn btn-outline">
                                    <Icon glyph=Glyph::LogIn/>
                                    "Login"
                                </A>
                                <button class="btn btn-primary" on:click=move |_| go_to("contact")>
                                    "Consult Dr. Zoe"
                                </button>
                            }
                        }
                    >
                        <A href=AppRoute::Download.path() attr:class="btn btn-primary">
                            <Icon glyph=Glyph::Download/>
                            "Download"
                        </A>
                        <button class="btn btn-outline" on:click=logout.clone()>
                            <Icon glyph=Glyph::LogOut/>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Show when=move || menu_open.get() fallback=|| view! { <Icon glyph=Glyph::Menu/> }>
                        <Icon glyph=Glyph::X/>
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {links}
                    {
                        let logout_mobile = logout_mobile.clone();
                        view! {
                            <Show
                                when=move || session.is_authenticated()
                                fallback=move || {
                                    view! {
                                        <A href=AppRoute::Login.path() attr:class="btn btn-outline btn-block">
                                            "Login"
                                        </A>
                                    }
                                }
                            >
                                <A href=AppRoute::Download.path() attr:class="btn btn-primary btn-block">
                                    "Download"
                                </A>
                                <button class="btn btn-outline btn-block" on:click=logout_mobile.clone()>
                                    "Logout"
                                </button>
                            </Show>
                        }
                        .into_any()
                    }
                </div>
            </Show>
        </nav>
    }
}
