// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod display;

pub use cli::{Args, Command, CommandHandler};
pub use display::LayoutRenderer;
