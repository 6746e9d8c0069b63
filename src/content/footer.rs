use crate::models::Page;

use super::ContactDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub target: Page,
}

pub const FOOTER_BLURB: &str = "Nurturing the leaders of tomorrow through holistic excellence, innovative STEM programs, and a commitment to global citizenship in Ludhiana.";

pub const QUICK_LINKS: [QuickLink; 6] = [
    QuickLink { label: "About Us", target: Page::About },
    QuickLink { label: "Academics", target: Page::Academics },
    QuickLink { label: "Admissions", target: Page::Admissions },
    QuickLink { label: "Success Stories", target: Page::SuccessStories },
    QuickLink { label: "Facilities", target: Page::Facilities },
    QuickLink { label: "Gallery", target: Page::Gallery },
];

pub const FOOTER_CONTACTS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "📍",
        title: "Address",
        value: "Ferozepur Road, Ludhiana, Punjab 141001, India",
    },
    ContactDetail { icon: "📞", title: "Phone", value: "+91 161 4567 890" },
    ContactDetail { icon: "✉️", title: "Email", value: "info@sgninternational.edu" },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Facebook", "Instagram", "YouTube"];

pub const COPYRIGHT: &str =
    "© 2026 SGN International School. Affiliated to CBSE. Empowering generations with wisdom.";
