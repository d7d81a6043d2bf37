//! Contact details and footer copy.

use chrono::Datelike;

use super::{Glyph, NavLink, SocialLink, BRAND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: Glyph,
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: Glyph::MapPin,
        title: "Address",
        content: "123 Healthcare Hub, Medical District, NY 10001",
    },
    ContactInfo { icon: Glyph::Phone, title: "Phone", content: "+1 (555) 123-4567" },
    ContactInfo { icon: Glyph::Mail, title: "Email", content: "hello@drzoe.ai" },
];

pub const FOOTER_BLURB: &str = "Revolutionizing healthcare with AI-powered diagnostics and \
    tele-medical support. Making quality healthcare accessible for everyone.";

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "Gallery", href: "#gallery" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { name: "Privacy Policy", href: "#" },
    NavLink { name: "Terms of Service", href: "#" },
    NavLink { name: "Support", href: "#contact" },
    NavLink { name: "FAQs", href: "#faq" },
];

pub const SERVICE_LINKS: &[NavLink] = &[
    NavLink { name: "AI Consultation", href: "#features" },
    NavLink { name: "Tele-Doctor", href: "#features" },
    NavLink { name: "Health Reports", href: "#features" },
    NavLink { name: "First Aid", href: "#features" },
];

pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink { icon: Glyph::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: Glyph::Twitter, label: "Twitter", href: "#" },
    SocialLink { icon: Glyph::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: Glyph::Linkedin, label: "LinkedIn", href: "#" },
    SocialLink { icon: Glyph::Youtube, label: "YouTube", href: "#" },
];

/// Footer copyright line for the given date's year.
pub fn copyright_line(today: impl Datelike) -> String {
    format!("\u{a9} {} {} AI Doctor. All rights reserved.", today.year(), BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_copyright_line() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        assert_eq!(
            copyright_line(today),
            "\u{a9} 2026 Dr. Zoe AI Doctor. All rights reserved."
        );
    }
}
