//! Router shell: marketing page, sign-in page and the gated download page.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{DownloadPage, HomePage, LoginPage};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/download") view=DownloadPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card card-narrow text-center">
                <h1 class="page-title">"404 - Page Not Found"</h1>
                <p class="text-muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn btn-primary">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
