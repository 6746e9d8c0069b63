use super::{ContactDetail, PageBanner};

pub const CONTACT_BANNER: PageBanner = PageBanner {
    title: "Connect With Us",
    subtitle: "Open lines for communication, collaboration, and constant improvement.",
    class: "bg-navy text-white",
};

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "📍",
        title: "Campus Address",
        value: "Ferozepur Road, Mullanpur Dakha, Ludhiana, Punjab 141001, India",
    },
    ContactDetail {
        icon: "📞",
        title: "Direct Helpline",
        value: "+91 161 4567 890 / +91 98765 43210",
    },
    ContactDetail {
        icon: "✉️",
        title: "Official Inquiry",
        value: "info@sgninternational.edu",
    },
];

pub const MAP_IMAGE: &str =
    "https://images.unsplash.com/photo-1526772662000-3f88f10405ff?auto=format&fit=crop&q=80&w=1200";
