use super::{CalendarEntry, PageBanner, Pathway};

pub const ACADEMICS_BANNER: PageBanner = PageBanner {
    title: "Academic Excellence",
    subtitle: "Rigorous CBSE curriculum integrated with international pedagogical standards.",
    class: "bg-vibrant-green text-white",
};

pub const PATHWAYS: [Pathway; 4] = [
    Pathway {
        level: "Pre-Primary (Nursery - UKG)",
        focus: "Play-way method, sensory integration, and early literacy through discovery.",
    },
    Pathway {
        level: "Primary (Grades I - V)",
        focus: "Foundational numeracy, literacy, environmental awareness and character building.",
    },
    Pathway {
        level: "Middle School (Grades VI - VIII)",
        focus: "In-depth sciences, multiple languages, and specialized digital arts programs.",
    },
    Pathway {
        level: "Senior Secondary (Grades IX - XII)",
        focus: "Expert CBSE preparation with customized streams in Medical, Non-Med, Commerce, and Arts.",
    },
];

pub const CALENDAR: [CalendarEntry; 4] = [
    CalendarEntry { label: "Session Starts", date: "April 5th" },
    CalendarEntry { label: "Summer Break", date: "June 1st - 30th" },
    CalendarEntry { label: "Mid-Term Assessment", date: "September" },
    CalendarEntry { label: "Winter Vacations", date: "Dec 25th - Jan 5th" },
];
