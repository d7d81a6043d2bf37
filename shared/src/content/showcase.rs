//! Gallery, team and FAQ copy.

use super::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "gallery-1.png", alt: "Dr. Zoe Kiosk Interface" },
    GalleryImage { src: "gallery-2.png", alt: "Health Monitoring Dashboard" },
    GalleryImage { src: "gallery-3.png", alt: "Tele-Doctor Consultation" },
    GalleryImage { src: "gallery-4.png", alt: "AI Diagnosis Results" },
    GalleryImage { src: "gallery-5.png", alt: "Mobile App Interface" },
    GalleryImage { src: "gallery-6.png", alt: "Health Report Preview" },
];

/// Social profile link on a team card or in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Glyph,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub social: &'static [SocialLink],
}

const LINKEDIN: SocialLink = SocialLink { icon: Glyph::Linkedin, label: "LinkedIn", href: "#" };
const TWITTER: SocialLink = SocialLink { icon: Glyph::Twitter, label: "Twitter", href: "#" };
const GITHUB: SocialLink = SocialLink { icon: Glyph::Github, label: "GitHub", href: "#" };

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Sarah Chen",
        role: "Project Lead",
        image: "team-lead.png",
        bio: "Healthcare innovation expert with 15+ years experience",
        social: &[LINKEDIN, TWITTER],
    },
    TeamMember {
        name: "Alex Rodriguez",
        role: "Lead Developer",
        image: "team-developer.png",
        bio: "Full-stack engineer specializing in AI/ML healthcare apps",
        social: &[LINKEDIN, GITHUB],
    },
    TeamMember {
        name: "Emily Watson",
        role: "UI/UX Designer",
        image: "team-designer.png",
        bio: "Award-winning designer focused on healthcare interfaces",
        social: &[LINKEDIN, TWITTER],
    },
    TeamMember {
        name: "Dr. Michael Park",
        role: "Research Consultant",
        image: "team-research.png",
        bio: "Medical research specialist ensuring clinical accuracy",
        social: &[LINKEDIN, TWITTER],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What is Dr. Zoe?",
        answer: "Dr. Zoe is an AI-powered healthcare assistant that provides comprehensive health diagnostics, \
            automated vital sign measurements, and tele-medical support. It combines advanced artificial \
            intelligence with integrated health sensors to deliver accurate preliminary health assessments.",
    },
    Faq {
        question: "How does AI diagnosis work?",
        answer: "Our AI diagnosis system analyzes data collected from integrated sensors (blood pressure, heart \
            rate, SpO2, temperature) along with your symptoms and medical history. The AI uses advanced machine \
            learning algorithms trained on millions of medical cases to provide preliminary health assessments, \
            always verified by medical professionals.",
    },
    Faq {
        question: "Is this technology safe?",
        answer: "Absolutely. Dr. Zoe adheres to strict medical safety standards and is HIPAA compliant, FDA \
            approved, and ISO certified. All data is encrypted and stored securely. The AI provides preliminary \
            assessments only, and all diagnoses are verified by licensed healthcare professionals.",
    },
    Faq {
        question: "Can I share my health reports?",
        answer: "Yes, all health reports can be easily shared. You can download PDF versions, email them \
            directly to your doctor, or share them with family members through our secure sharing feature. \
            Reports are stored in your personal health dashboard for future reference.",
    },
    Faq {
        question: "Where can I access the Dr. Zoe app?",
        answer: "Dr. Zoe is available through dedicated kiosks in clinics, pharmacies, and healthcare \
            facilities. We also offer a mobile app for iOS and Android for home health monitoring. For full \
            diagnostic capabilities, visit one of our kiosk locations.",
    },
];
