//! Hero, about, stats, features and how-it-works copy.

use super::{Glyph, Highlight};

pub const HERO_BADGE: &str = "AI-Powered Healthcare";
pub const HERO_COPY: &str = "Fast, Automated Health Checkups & Tele-Medical Support. \
    Experience the future of healthcare with AI-powered diagnostics.";

/// Value and label pair shown under the hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[QuickStat] = &[
    QuickStat { value: "50K+", label: "Patients" },
    QuickStat { value: "99%", label: "Accuracy" },
    QuickStat { value: "24/7", label: "Support" },
];

/// Floating vitals card over the hero image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalCard {
    pub emoji: &'static str,
    pub label: &'static str,
    pub reading: &'static str,
}

pub const HERO_VITALS: &[VitalCard] = &[
    VitalCard { emoji: "\u{2764}\u{fe0f}", label: "Heart Rate", reading: "72 BPM" },
    VitalCard { emoji: "\u{1fac1}", label: "SpO2 Level", reading: "98%" },
];

pub const ABOUT_COPY: &str = "Dr. Zoe is a revolutionary AI-powered healthcare assistant designed \
    to make health diagnostics accessible, fast, and accurate. Our platform combines cutting-edge \
    artificial intelligence with professional medical expertise to provide comprehensive health \
    assessments from the comfort of your home.";

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Glyph::Brain,
        title: "AI Health Diagnostics",
        description: "Advanced machine learning algorithms for accurate health assessments",
    },
    Highlight {
        icon: Glyph::Cpu,
        title: "Automated Sensors & Measurements",
        description: "Real-time data collection from integrated health monitoring devices",
    },
    Highlight {
        icon: Glyph::Video,
        title: "Teleconsultation Support",
        description: "Connect with healthcare professionals through secure video calls",
    },
    Highlight {
        icon: Glyph::Accessibility,
        title: "Accessibility Modes",
        description: "Inclusive design supporting multiple languages and accessibility needs",
    },
];

pub const TRUST_BADGES: &[&str] = &["HIPAA Compliant", "FDA Approved", "ISO Certified"];

/// Whether a stat uses the primary or secondary brand colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Secondary => "text-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub icon: Glyph,
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

pub const STATS: &[Stat] = &[
    Stat { icon: Glyph::Users, value: 50_000.0, suffix: "+", label: "Patients Served", tone: Tone::Primary },
    Stat { icon: Glyph::Stethoscope, value: 120_000.0, suffix: "+", label: "Health Consultations", tone: Tone::Secondary },
    Stat { icon: Glyph::Target, value: 99.2, suffix: "%", label: "Accuracy Rate", tone: Tone::Primary },
    Stat { icon: Glyph::Clock, value: 24.0, suffix: "/7", label: "Support Hours", tone: Tone::Secondary },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Glyph::Brain,
        title: "AI Health Consultation",
        description: "Advanced AI algorithms analyze your symptoms and health data to provide accurate preliminary diagnoses.",
        image: "feature-ai-consult.png",
    },
    Feature {
        icon: Glyph::Activity,
        title: "Automated Measurements",
        description: "Integrated sensors automatically measure vital signs including blood pressure, heart rate, and more.",
        image: "feature-auto-measure.png",
    },
    Feature {
        icon: Glyph::Video,
        title: "Tele-Doctor Video Call",
        description: "Connect instantly with certified healthcare professionals through secure video consultations.",
        image: "feature-video-call.png",
    },
    Feature {
        icon: Glyph::MessageSquare,
        title: "Health Chatbot",
        description: "24/7 AI-powered chatbot ready to answer your health questions and assist with appointments.",
        image: "feature-chatbot.png",
    },
    Feature {
        icon: Glyph::Ear,
        title: "Hearing Test",
        description: "Comprehensive audiometry tests to assess your hearing health with professional-grade accuracy.",
        image: "feature-hearing.png",
    },
    Feature {
        icon: Glyph::Eye,
        title: "Eye Test",
        description: "Complete vision screening including visual acuity and color blindness assessments.",
        image: "feature-eye-test.png",
    },
];

pub const STEPS: &[Highlight] = &[
    Highlight {
        icon: Glyph::PlayCircle,
        title: "Start Health Check",
        description: "Begin your comprehensive health assessment with a simple tap",
    },
    Highlight {
        icon: Glyph::User,
        title: "Basic Details",
        description: "Enter your name, age, and contact information",
    },
    Highlight {
        icon: Glyph::Ruler,
        title: "Automatic Measurements",
        description: "Height and weight are measured automatically by sensors",
    },
    Highlight {
        icon: Glyph::HeartPulse,
        title: "Sensor Data Collection",
        description: "BPM, SpO2, temperature, and blood pressure readings",
    },
    Highlight {
        icon: Glyph::MessageCircle,
        title: "Symptom Input",
        description: "Describe your symptoms or concerns to the AI assistant",
    },
    Highlight {
        icon: Glyph::Brain,
        title: "AI Analysis",
        description: "Advanced AI processes all data for comprehensive analysis",
    },
    Highlight {
        icon: Glyph::FileText,
        title: "Report Generation",
        description: "Receive detailed health report via email instantly",
    },
];
