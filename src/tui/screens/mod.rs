//! TUI screens

pub mod detail;
pub mod list;

pub use detail::DetailScreen;
pub use list::ListScreen;
