//! Inline SVG icons (24x24, stroke based)

use leptos::prelude::*;
use shared::content::Glyph;

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {}", class)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(glyph).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}

// Circles are written as two arcs so every glyph is a list of paths.
fn paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Accessibility => &[
            "M15 4a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
            "m18 19 1-7-6 1",
            "m5 8 3-3 5.5 3-2.36 3.5",
            "M4.24 14.5a5 5 0 0 0 6.88 6",
            "M13.76 17.5a5 5 0 0 0-6.88-6",
        ],
        Glyph::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        Glyph::AlertCircle => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 8v4", "M12 16h.01"],
        Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Glyph::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        Glyph::Calendar => &[
            "M8 2v4",
            "M16 2v4",
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M3 10h18",
        ],
        Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Glyph::ChevronLeft => &["m15 18-6-6 6-6"],
        Glyph::ChevronRight => &["m9 18 6-6-6-6"],
        Glyph::ChevronDown => &["m6 9 6 6 6-6"],
        Glyph::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
        Glyph::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        Glyph::Download => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m7 10 5 5 5-5", "M12 15V3"],
        Glyph::Ear => &[
            "M6 8.5a6.5 6.5 0 1 1 13 0c0 6-6 6-6 10a3.5 3.5 0 1 1-7 0",
            "M15 8.5a2.5 2.5 0 0 0-5 0v1a2 2 0 1 1 0 4",
        ],
        Glyph::Eye => &[
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
            "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        ],
        Glyph::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        Glyph::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8",
            "M16 13H8",
            "M16 17H8",
        ],
        Glyph::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Glyph::HeartPulse => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            "M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27",
        ],
        Glyph::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        Glyph::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Glyph::Lock => &[
            "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
            "M7 11V7a5 5 0 0 1 10 0v4",
        ],
        Glyph::LogIn => &["M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4", "m10 17 5-5-5-5", "M15 12H3"],
        Glyph::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
        Glyph::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Glyph::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        ],
        Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Glyph::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
        Glyph::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        Glyph::Monitor => &[
            "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M8 21h8",
            "M12 17v4",
        ],
        Glyph::Package => &[
            "m7.5 4.27 9 5.15",
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
            "m3.3 7 8.7 5 8.7-5",
            "M12 22V12",
        ],
        Glyph::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Glyph::Play => &["m6 3 14 9-14 9V3z"],
        Glyph::PlayCircle => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "m10 8 6 4-6 4V8z"],
        Glyph::Ruler => &[
            "M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0Z",
            "m14.5 12.5 2-2",
            "m11.5 9.5 2-2",
            "m8.5 6.5 2-2",
            "m17.5 15.5 2-2",
        ],
        Glyph::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        Glyph::Shield => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        Glyph::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        Glyph::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        Glyph::Stethoscope => &[
            "M11 2v2",
            "M5 2v2",
            "M5 3H4a2 2 0 0 0-2 2v4a6 6 0 0 0 12 0V5a2 2 0 0 0-2-2h-1",
            "M8 15a6 6 0 0 0 12 0v-3",
            "M18 10a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Glyph::Target => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
            "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
            "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Glyph::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        Glyph::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0"],
        Glyph::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Glyph::Video => &[
            "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5",
            "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
        ],
        Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
        Glyph::Youtube => &[
            "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
            "m10 15 5-3-5-3z",
        ],
        Glyph::ZoomIn => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "m21 21-4.3-4.3", "M11 8v6", "M8 11h6"],
    }
}
