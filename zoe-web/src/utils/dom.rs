//! DOM helpers for in-page navigation

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::constants::NAV_SCROLL_THRESHOLD_PX;

/// Smooth-scroll to the element with the given id.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        log::warn!("No section with id '{}'", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn is_scrolled() -> bool {
    window().scroll_y().unwrap_or(0.0) > NAV_SCROLL_THRESHOLD_PX
}

/// Entrance transition delay as an inline style.
pub fn delay_style(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}
