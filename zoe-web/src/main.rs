//! Dr. Zoe landing site - Leptos frontend
//!
//! Marketing page plus the login → download flow. All non-markup logic lives
//! in the `shared` crate.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod sections;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Dr. Zoe landing site starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
    hide_loading_screen();
}

/// Hide the static loading screen shipped in index.html.
fn hide_loading_screen() {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(LOADING_ELEMENT_ID))
    else {
        log::debug!("No loading screen to hide");
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
    if let Err(e) = element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to set loading screen style: {:?}", e);
    }
}
