//! UI state owned by the app shell and the form pages.

pub use admission::*;
pub use contact::*;
pub use navigation::*;
pub use theme::*;

mod admission;
mod contact;
mod navigation;
mod theme;
