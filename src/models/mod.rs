pub use forms::*;
pub use grade::*;
pub use page::*;
pub use theme::*;

mod forms;
mod grade;
mod page;
mod theme;
