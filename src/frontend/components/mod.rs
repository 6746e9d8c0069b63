//! Reusable UI components for the school site

mod banner;
mod button;
mod feature_card;
mod footer;
mod input;
mod nav;
mod theme_toggle;
mod toast;

pub use banner::Banner;
pub use button::Button;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use input::{EmailInput, GradeSelect, TextArea, TextInput};
pub use nav::Navbar;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
