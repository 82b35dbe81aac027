pub mod history;
pub mod report;

pub use history::*;
pub use report::*;
