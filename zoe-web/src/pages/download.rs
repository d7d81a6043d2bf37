//! Download Page - reachable only with an active session

use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;
use shared::content::{Glyph, APP_DETAILS, APP_FEATURES, BRAND, DOWNLOAD_STARTED};
use shared::{guard, Access, AppRoute};

use crate::components::Icon;
use crate::state::use_session_context;

#[component]
pub fn DownloadPage() -> impl IntoView {
    let session = use_session_context();
    // Set while logging out so the guard doesn't race the navigation home.
    let (signing_out, set_signing_out) = signal(false);

    move || {
        if signing_out.get() {
            return ().into_any();
        }
        match guard(AppRoute::Download, session.state()) {
            Access::Render => view! { <DownloadContent set_signing_out=set_signing_out/> }.into_any(),
            Access::Redirect(route) => {
                log::debug!("No session, redirecting to {}", route.path());
                view! { <Redirect path=route.path()/> }.into_any()
            }
        }
    }
}

#[component]
fn DownloadContent(set_signing_out: WriteSignal<bool>) -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let logout = move |_| {
        set_signing_out.set(true);
        session.sign_out();
        navigate(AppRoute::Home.path(), Default::default());
    };

    let on_download = |_| {
        log::info!("Download requested for {} {}", APP_DETAILS.name, APP_DETAILS.version);
        if let Err(e) = window().alert_with_message(DOWNLOAD_STARTED) {
            log::warn!("Failed to show download alert: {:?}", e);
        }
    };

    let tiles = APP_DETAILS
        .tiles()
        .into_iter()
        .map(|tile| {
            view! {
                <div class="detail-tile">
                    <Icon glyph=tile.icon/>
                    <div>
                        <p class="detail-label">{tile.label}</p>
                        <p class="detail-value">{tile.value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let features = APP_FEATURES
        .iter()
        .map(|feature| {
            view! {
                <li class="check-item">
                    <Icon glyph=Glyph::CheckCircle/>
                    <span>{*feature}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="page download-page">
            <header class="download-header">
                <div class="container nav-inner">
                    <A href=AppRoute::Home.path()>
                        <span class="nav-logo">
                            <span class="logo-mark">
                                <Icon glyph=Glyph::Stethoscope/>
                            </span>
                            <span class="logo-text">{BRAND}</span>
                        </span>
                    </A>
                    <button class="btn btn-outline" on:click=logout>
                        <Icon glyph=Glyph::LogOut/>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="container download-main">
                <div class="card app-card">
                    <div class="app-card-header">
                        <span class="logo-mark logo-mark-lg">
                            <Icon glyph=Glyph::Smartphone/>
                        </span>
                        <div>
                            <h1 class="page-title">{APP_DETAILS.name}</h1>
                            <p class="text-muted">
                                {format!("Version {} \u{b7} {}", APP_DETAILS.version, APP_DETAILS.published_by)}
                            </p>
                            <div class="app-meta">
                                <span class="app-rating">
                                    <Icon glyph=Glyph::Star/>
                                    {APP_DETAILS.rating}
                                </span>
                                <span>{format!("{} downloads", APP_DETAILS.downloads)}</span>
                                <span class="badge">{APP_DETAILS.category}</span>
                            </div>
                        </div>
                    </div>

                    <div class="detail-grid">{tiles}</div>

                    <button class="btn btn-primary btn-lg btn-block" on:click=on_download>
                        <Icon glyph=Glyph::Download/>
                        "Download App"
                    </button>
                </div>

                <div class="card">
                    <h2 class="card-title">"What's Included"</h2>
                    <ul class="check-list">{features}</ul>
                </div>

                <div class="text-center">
                    <A href=AppRoute::Home.path()>
                        <span class="link-muted">"\u{2190} Back to Home"</span>
                    </A>
                </div>
            </main>
        </div>
    }
}
