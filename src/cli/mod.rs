pub mod args;
pub mod commands;
pub mod config;
pub mod report;

pub use args::{Cli, Commands};
pub use commands::run;
pub use config::Settings;
