use super::{AdmissionStep, PageBanner};

pub const ADMISSIONS_BANNER: PageBanner = PageBanner {
    title: "Admissions 2026-27",
    subtitle: "Your gateway to a global future.",
    class: "bg-warm-gold text-navy",
};

pub const ADMISSION_STEPS: [AdmissionStep; 4] = [
    AdmissionStep {
        step: "01",
        title: "Submit Inquiry",
        desc: "Fill out our online inquiry form to receive our personalized admissions kit.",
    },
    AdmissionStep {
        step: "02",
        title: "Visit & Explore",
        desc: "Tour our futuristic campus and engage in a dialogue with our academic leads.",
    },
    AdmissionStep {
        step: "03",
        title: "Skills Insight",
        desc: "Students participate in a collaborative learning assessment to gauge potential.",
    },
    AdmissionStep {
        step: "04",
        title: "Interactive Dialogue",
        desc: "A concluding session between the Principal, the student, and the parents.",
    },
];

pub const CONFIRMATION_TITLE: &str = "Submission Received!";
pub const CONFIRMATION_BODY: &str =
    "Our dedicated counselor will reach out to you within the next 24 hours.";
