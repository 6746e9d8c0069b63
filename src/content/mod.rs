//! Copy, figures and imagery shown on the site.
//!
//! Everything here is static data; the page components render these tables
//! through a handful of generic card components.

pub use about::*;
pub use academics::*;
pub use admissions::*;
pub use contact::*;
pub use facilities::*;
pub use footer::*;
pub use gallery::*;
pub use home::*;

mod about;
mod academics;
mod admissions;
mod contact;
mod facilities;
mod footer;
mod gallery;
mod home;

pub const SCHOOL_NAME: &str = "SGN International School";

/// Icon, heading and blurb: the shape shared by programs, values and facilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Student {
    pub name: &'static str,
    pub role: &'static str,
    pub achievement: &'static str,
    pub bio: &'static str,
    pub img: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pathway {
    pub level: &'static str,
    pub focus: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    pub label: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

/// Banner at the top of every inner page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBanner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub class: &'static str,
}
