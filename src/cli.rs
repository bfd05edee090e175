use clap::{Parser, Subcommand};

/// Company site content API
#[derive(Debug, Parser)]
#[command(name = "site-cms", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Insert sample posts, gallery items and jobs into an empty site
    Seed,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}
