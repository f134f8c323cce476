//! CLI command handlers. Each command is in its own file.

mod blacklist;
mod check;
mod render;
mod scan;
mod screen;

pub use blacklist::run_blacklist;
pub use check::run_check;
pub use scan::run_scan;
pub use screen::{Concurrency, ScreenOptions};
