//! Page components for the school site

mod about;
mod academics;
mod admissions;
mod contact;
mod facilities;
mod gallery;
mod home;
mod success_stories;

pub use about::AboutPage;
pub use academics::AcademicsPage;
pub use admissions::AdmissionsPage;
pub use contact::ContactPage;
pub use facilities::FacilitiesPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use success_stories::{SuccessStories, SuccessStoriesPage};
