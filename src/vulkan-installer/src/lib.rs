mod message;

pub mod ci;
pub mod config;
pub mod constants;
pub mod fs;
pub mod installer;
pub mod logging;
pub mod platform;
pub mod types;
pub mod utils;

// re-export for convenient use with `message`
pub use colored::Colorize;
