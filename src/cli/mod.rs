//! Command-line handling.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use unmutte::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Run { backend_url } => { /* start the TUI */ }
//!     other => std::process::exit(unmutte::cli::run_cli_command(&other)),
//! }
//! ```

pub mod args;

pub use args::{parse_args, CliCommand};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: unmutte [OPTIONS]

Options:
  --backend-url <URL>  Backend base URL (env: UNMUTTE_BACKEND_URL)
  -V, --version        Print version
  -h, --help           Print this help

Environment:
  UNMUTTE_LOG           Log filter, e.g. \"debug\" or \"unmutte=trace\"
  UNMUTTE_TIMEOUT_SECS  Request timeout in seconds (default 30)";

/// Print the output for a non-TUI command and return the exit code.
///
/// `Run` returns 0 without printing; the caller starts the TUI instead.
pub fn run_cli_command(command: &CliCommand) -> i32 {
    match command {
        CliCommand::Version => {
            println!("unmutte {}", VERSION);
            0
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            0
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            2
        }
        CliCommand::Run { .. } => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_semver_like() {
        assert!(VERSION.split('.').count() >= 2);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run_cli_command(&CliCommand::Help), 0);
        assert_eq!(run_cli_command(&CliCommand::Invalid("--nope".to_string())), 2);
        assert_eq!(run_cli_command(&CliCommand::Run { backend_url: None }), 0);
    }
}
