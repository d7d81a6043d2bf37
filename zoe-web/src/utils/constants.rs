//! Application constants

/// Id of the static loading screen in index.html.
pub const LOADING_ELEMENT_ID: &str = "zoe-loading";

/// Scroll offset after which the navbar gets its solid background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

// Entrance transition base delays, in ms
pub const HEADER_DELAY_MS: u32 = 0;
pub const CONTENT_DELAY_MS: u32 = 200;
pub const LIST_DELAY_MS: u32 = 300;
