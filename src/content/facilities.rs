use super::{Card, PageBanner};

pub const FACILITIES_BANNER: PageBanner = PageBanner {
    title: "World-Class Facilities",
    subtitle: "Providing the infrastructure that supports and enhances the learning journey of every student.",
    class: "bg-navy text-white",
};

pub const FACILITIES: [Card; 6] = [
    Card {
        icon: "🏫",
        title: "Digital Classrooms",
        desc: "Smart boards, high-speed internet, and ergonomic seating in every classroom.",
    },
    Card {
        icon: "🔬",
        title: "Advanced Science Labs",
        desc: "Separate, fully-equipped labs for Physics, Chemistry, and Biology.",
    },
    Card {
        icon: "🏊",
        title: "Olympic-Size Pool",
        desc: "State-of-the-art swimming facilities with professional life guards and coaches.",
    },
    Card {
        icon: "📚",
        title: "Resource Library",
        desc: "Over 15,000 books, digital archives, and quiet study zones for all ages.",
    },
    Card {
        icon: "🚌",
        title: "Safe Transportation",
        desc: "GPS-tracked fleet of air-conditioned buses covering all major routes.",
    },
    Card {
        icon: "🏸",
        title: "Indoor Sports Complex",
        desc: "Facilities for badminton, table tennis, and yoga to ensure physical wellbeing.",
    },
];
