//! CLI module for the Gridroom authentication service
//!
//! - `serve`: run the HTTP API (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Gridroom auth - user signup, login and token refresh
#[derive(Parser)]
#[command(name = "gridroom-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the API server (default mode)
    #[default]
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["gridroom-auth"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn test_explicit_serve() {
        let cli = Cli::try_parse_from(["gridroom-auth", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Command::Serve));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["gridroom-auth", "ui"]).is_err());
    }
}
