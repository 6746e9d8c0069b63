use super::{Card, Stat, Student};

pub const HERO_BADGE: &str = "Admissions 2026-27 Open";
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1541339907198-e08756ebafe3?auto=format&fit=crop&q=80&w=2000";
pub const HERO_TAGLINE: &str = "SGN International School is a premium CBSE institution dedicated to providing holistic education, fostering innovation, and building character in Ludhiana.";

pub const QUICK_STATS: [Stat; 4] = [
    Stat { icon: "👥", value: "5000+", label: "Successful Alumni" },
    Stat { icon: "🏆", value: "98%", label: "Board Results" },
    Stat { icon: "🎓", value: "120+", label: "Expert Faculty" },
    Stat { icon: "🏫", value: "15", label: "Acres of Campus" },
];

pub const SPOTLIGHT_INTRO: &str = "Our students aren't just high achievers; they are innovators, thinkers, and compassionate leaders. Discover the journeys of some of our brightest minds.";

pub const STUDENTS: [Student; 4] = [
    Student {
        name: "Aarav Sharma",
        role: "Alumni 2021",
        achievement: "IIT Delhi - CS",
        bio: "Secured All India Rank 45 in JEE Advanced. International Math Olympiad Silver Medalist.",
        img: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&q=80&w=400",
    },
    Student {
        name: "Priya Kaur",
        role: "Class XII",
        achievement: "Young Author",
        bio: "Published 'The Silent Whispers' at age 16. National Level Debate Champion for three consecutive years.",
        img: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=400",
    },
    Student {
        name: "Ishaan Singh",
        role: "Alumni 2019",
        achievement: "Board Topper (99.2%)",
        bio: "Currently an Architect at a global firm. Led the school's robotics team to National victory.",
        img: "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?auto=format&fit=crop&q=80&w=400",
    },
    Student {
        name: "Mehak Gill",
        role: "Class X",
        achievement: "Bal Puraskar Winner",
        bio: "Awarded by the President of India for innovation in eco-friendly irrigation systems.",
        img: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?auto=format&fit=crop&q=80&w=400",
    },
];

pub const PROGRAMS_INTRO: &str = "Integrating technology, art, and physical wellness to create a truly balanced educational environment where children thrive.";

pub const PROGRAMS: [Card; 3] = [
    Card {
        icon: "🔬",
        title: "STEM & Robotics Lab",
        desc: "State-of-the-art facilities for coding, 3D printing, and AI workshops designed for tomorrow.",
    },
    Card {
        icon: "🌐",
        title: "Global Exchange",
        desc: "Collaborations with international schools for cultural and academic exchange experiences.",
    },
    Card {
        icon: "🏀",
        title: "Sports Academy",
        desc: "Professional coaching for 15+ sports including swimming, tennis, and championship cricket.",
    },
];
