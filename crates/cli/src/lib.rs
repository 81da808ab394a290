mod commands;
mod config;
mod i18n;

pub use commands::{execute, Cli, Command, CommandContext};
pub use config::Config;
pub use i18n::{t, Language};
