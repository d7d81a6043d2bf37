//! Sign-in page for the download area

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::content::{Glyph, BRAND};
use shared::AppRoute;

use crate::components::Icon;
use crate::state::use_session_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        match session.sign_in(&username.get(), &password.get()) {
            Ok(()) => navigate(AppRoute::Download.path(), Default::default()),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="page-center login-page">
            <div class="card card-narrow">
                <div class="text-center">
                    <span class="logo-mark logo-mark-lg">
                        <Icon glyph=Glyph::Stethoscope/>
                    </span>
                    <h1 class="page-title">"Welcome Back"</h1>
                    <p class="text-muted">{format!("Sign in to download the {} app", BRAND)}</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error">
                            <Icon glyph=Glyph::AlertCircle/>
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-group">
                        <label class="form-label" for="username">"Username"</label>
                        <div class="input-with-icon">
                            <Icon glyph=Glyph::User/>
                            <input
                                id="username"
                                class="input"
                                type="text"
                                placeholder="Enter your username"
                                autocomplete="username"
                                bind:value=username
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="password">"Password"</label>
                        <div class="input-with-icon">
                            <Icon glyph=Glyph::Lock/>
                            <input
                                id="password"
                                class="input"
                                type="password"
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                bind:value=password
                            />
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block btn-lg">
                        <Icon glyph=Glyph::LogIn/>
                        "Sign In"
                    </button>
                </form>

                <div class="text-center">
                    <A href=AppRoute::Home.path()>
                        <span class="link-muted">"\u{2190} Back to Home"</span>
                    </A>
                </div>
            </div>
        </div>
    }
}
