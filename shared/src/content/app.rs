//! Download page copy: the app listing shown to signed-in visitors.

use chrono::NaiveDate;

use super::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDetails {
    pub name: &'static str,
    pub version: &'static str,
    pub release_date: NaiveDate,
    pub published_by: &'static str,
    pub size: &'static str,
    pub category: &'static str,
    pub rating: &'static str,
    pub downloads: &'static str,
    pub requirements: &'static str,
    pub last_updated: NaiveDate,
}

/// One tile of the details grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTile {
    pub icon: Glyph,
    pub label: &'static str,
    pub value: String,
}

/// Long date format used on the listing, e.g. "January 5, 2026".
pub fn format_listing_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

impl AppDetails {
    pub fn tiles(&self) -> Vec<DetailTile> {
        vec![
            DetailTile { icon: Glyph::Package, label: "Version", value: self.version.to_string() },
            DetailTile { icon: Glyph::Calendar, label: "Release Date", value: format_listing_date(self.release_date) },
            DetailTile { icon: Glyph::User, label: "Published By", value: self.published_by.to_string() },
            DetailTile { icon: Glyph::Download, label: "Size", value: self.size.to_string() },
            DetailTile { icon: Glyph::Monitor, label: "Requirements", value: self.requirements.to_string() },
            DetailTile { icon: Glyph::Shield, label: "Last Updated", value: format_listing_date(self.last_updated) },
        ]
    }
}

// 2026-01-05
const RELEASED: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 5) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

pub const APP_DETAILS: AppDetails = AppDetails {
    name: "Dr. Zoe AI Doctor",
    version: "2.5.1",
    release_date: RELEASED,
    published_by: "TEB Innovations Pvt. Ltd.",
    size: "45.8 MB",
    category: "Healthcare & Medical",
    rating: "4.8",
    downloads: "50K+",
    requirements: "Android 8.0+ / iOS 14.0+",
    last_updated: RELEASED,
};

pub const APP_FEATURES: &[&str] = &[
    "AI-powered health diagnostics",
    "Real-time vital monitoring",
    "Tele-doctor video consultations",
    "24/7 health chatbot support",
    "Comprehensive health reports",
    "Multi-language support",
];

pub const DOWNLOAD_STARTED: &str = "Download started! Thank you for downloading Dr. Zoe.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_dates() {
        assert_eq!(format_listing_date(APP_DETAILS.release_date), "January 5, 2026");
    }

    #[test]
    fn test_tiles() {
        let tiles = APP_DETAILS.tiles();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0].value, "2.5.1");
        assert_eq!(tiles[5].value, "January 5, 2026");
    }
}
