use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Titu: chat with the Titu assistant or leave your details for a follow-up.
#[derive(Parser, Debug)]
#[command(name = "titu", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `titu_chat=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Talk to the assistant (default).
    Chat,
    /// Fill in the contact form.
    Lead,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
