//! Command-line argument parsing.

/// Parsed command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version
    Version,
    /// Print usage
    Help,
    /// Run the TUI, optionally against a different backend
    Run { backend_url: Option<String> },
    /// Unrecognized or incomplete arguments
    Invalid(String),
}

/// Parse arguments (program name first, as from `std::env::args()`).
///
/// `--version` and `--help` win over everything else.
///
/// ```
/// use unmutte::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["unmutte".to_string(), "-V".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut backend_url = None;
    let mut error = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--backend-url" => match args.next() {
                Some(url) if !url.starts_with('-') => backend_url = Some(url),
                _ => {
                    error.get_or_insert_with(|| "--backend-url needs a value".to_string());
                }
            },
            other => {
                if let Some(url) = other.strip_prefix("--backend-url=") {
                    backend_url = Some(url.to_string());
                } else {
                    error.get_or_insert_with(|| format!("unexpected argument '{}'", other));
                }
            }
        }
    }

    match error {
        Some(message) => CliCommand::Invalid(message),
        None => CliCommand::Run { backend_url },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["unmutte".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&[]), CliCommand::Run { backend_url: None });
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_backend_url_forms() {
        let expected = CliCommand::Run {
            backend_url: Some("http://10.0.0.5:8000".to_string()),
        };
        assert_eq!(parse(&["--backend-url", "http://10.0.0.5:8000"]), expected);
        assert_eq!(parse(&["--backend-url=http://10.0.0.5:8000"]), expected);
    }

    #[test]
    fn test_backend_url_missing_value() {
        assert!(matches!(parse(&["--backend-url"]), CliCommand::Invalid(_)));
        assert!(matches!(
            parse(&["--backend-url", "--other"]),
            CliCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_unknown_argument_is_invalid() {
        assert_eq!(
            parse(&["--sync"]),
            CliCommand::Invalid("unexpected argument '--sync'".to_string())
        );
    }

    #[test]
    fn test_version_wins_over_bad_args() {
        assert_eq!(parse(&["--bogus", "--version"]), CliCommand::Version);
    }
}
