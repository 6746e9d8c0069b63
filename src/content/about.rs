use super::{Card, PageBanner};

pub const ABOUT_BANNER: PageBanner = PageBanner {
    title: "About SGN International",
    subtitle: "A legacy of over 20 years in providing world-class education in the heart of Punjab.",
    class: "bg-navy text-white",
};

pub const PRINCIPAL_MESSAGE: &str = "At SGN, we don't just teach subjects; we inspire curiosity. Our goal is to empower every child with the tools they need to navigate an ever-changing world with confidence, empathy, and integrity.";
pub const PRINCIPAL_NAME: &str = "Dr. Satinder Kaur";
pub const PRINCIPAL_TITLE: &str = "PhD in Educational Leadership";
pub const PRINCIPAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=1000";

pub const CORE_VALUES: [Card; 3] = [
    Card {
        icon: "⭐",
        title: "Excellence",
        desc: "Striving for the highest standards in every academic and extracurricular pursuit.",
    },
    Card {
        icon: "✅",
        title: "Integrity",
        desc: "Building strong moral foundations and ethical leadership through daily practice.",
    },
    Card {
        icon: "📖",
        title: "Innovation",
        desc: "Encouraging students to think outside the box and solve real-world problems.",
    },
];
