//! # Site Content
//!
//! Static copy for every section of the landing page and the download page.
//! Records are `&'static` tables so sections render without allocating and
//! tests can check the shape of the page.

mod app;
mod company;
mod product;
mod showcase;

pub use app::*;
pub use company::*;
pub use product::*;
pub use showcase::*;

pub const BRAND: &str = "Dr. Zoe";

/// Icons referenced by content records. The web crate maps each to SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Accessibility,
    Activity,
    AlertCircle,
    ArrowRight,
    Brain,
    Calendar,
    CheckCircle,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    Clock,
    Cpu,
    Download,
    Ear,
    Eye,
    Facebook,
    FileText,
    Github,
    HeartPulse,
    Instagram,
    Linkedin,
    Lock,
    LogIn,
    LogOut,
    Mail,
    MapPin,
    Menu,
    MessageCircle,
    MessageSquare,
    Monitor,
    Package,
    Phone,
    Play,
    PlayCircle,
    Ruler,
    Send,
    Shield,
    Smartphone,
    Star,
    Stethoscope,
    Target,
    Twitter,
    User,
    Users,
    Video,
    X,
    Youtube,
    ZoomIn,
}

/// In-page anchor link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Element id targeted by the link, if it is an in-page anchor.
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Icon, title and one line of copy. Used by several sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "How It Works", href: "#how-it-works" },
    NavLink { name: "Gallery", href: "#gallery" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "FAQ", href: "#faq" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Section ids in page order. Every nav anchor points at one of these.
pub const SECTION_IDS: &[&str] = &[
    "home",
    "about",
    "stats",
    "features",
    "how-it-works",
    "gallery",
    "team",
    "faq",
    "contact",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_target_sections() {
        for link in NAV_LINKS.iter().chain(QUICK_LINKS).chain(SERVICE_LINKS) {
            let anchor = link.anchor().expect("nav links are in-page anchors");
            assert!(SECTION_IDS.contains(&anchor), "{} points nowhere", link.href);
        }
    }

    #[test]
    fn test_anchor() {
        assert_eq!(NAV_LINKS[0].anchor(), Some("home"));
        assert_eq!(LEGAL_LINKS[0].anchor(), None);
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STEPS.len(), 7);
        assert_eq!(GALLERY.len(), 6);
        assert_eq!(TEAM.len(), 4);
        assert_eq!(FAQS.len(), 5);
    }
}
