//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the arguments are wrong.
pub const USAGE: &str = "Usage: promptsift <root_directory> <output_file>";

/// Example invocation printed alongside the usage line.
pub const EXAMPLE: &str = "Example: promptsift ./data ./prompts.txt";

/// promptsift - Extract "prompt" values from JSON files into a text file.
#[derive(Debug, Parser)]
#[command(name = "promptsift")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Directory to search recursively for JSON files
    pub root_directory: PathBuf,

    /// Text file to create or overwrite with the prompts
    pub output_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["promptsift", "./data", "./prompts.txt"]).unwrap();
        assert_eq!(cli.root_directory, PathBuf::from("./data"));
        assert_eq!(cli.output_file, PathBuf::from("./prompts.txt"));
    }

    #[test]
    fn test_missing_output_rejected() {
        let err = Cli::try_parse_from(["promptsift", "./data"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_argument_rejected() {
        let err = Cli::try_parse_from(["promptsift", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_and_version_flags_are_rejected() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let err = Cli::try_parse_from(["promptsift", flag]).unwrap_err();
            assert!(
                !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion),
                "flag {} should be a usage error",
                flag
            );
        }
    }
}
