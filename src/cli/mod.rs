//! CLI module
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `validate`: bind and validate an access key form from a JSON file

pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};

/// Access key form binding and registration service
#[derive(Parser)]
#[command(name = "access-key-forms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Validate an access key form without registering it
    Validate(validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = Cli::try_parse_from(["access-key-forms", "validate", "--file", "form.json"]).unwrap();

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.file.as_deref(), Some(std::path::Path::new("form.json")))
            }
            Command::Serve => panic!("expected validate"),
        }
    }

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from(["access-key-forms", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }
}
