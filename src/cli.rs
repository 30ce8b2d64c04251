//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::error::ComposeResult;
use crate::models::Flags;
use crate::render::{ColorMode, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Blockfold - fold declarative blocks of segments into text
///
/// Reads a block document (TOML or JSON) listing segments in order,
/// folds them with the builder the document names, and renders the
/// result as ANSI, HTML, plain text or JSON.
///
/// Examples:
///   blockfold greeting.toml
///   blockfold greeting.toml --format html -o greeting.html
///   blockfold greeting.toml --flag excited
///   blockfold blocks/ --format plain
///   blockfold greeting.toml --dry-run
///   blockfold --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Block document, or a directory of documents
    #[arg(value_name = "INPUT", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", env = "BLOCKFOLD_FORMAT")]
    pub format: Option<OutputFormat>,

    /// When to use terminal colours
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Set a flag read by segment conditions (NAME or NAME=true|false)
    ///
    /// May be repeated. Overrides the document's [flags] table.
    #[arg(long = "flag", value_name = "NAME[=BOOL]")]
    pub flags: Vec<String>,

    /// Separator for joined documents
    #[arg(long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Salutation for greeting documents
    #[arg(long, value_name = "TEXT")]
    pub salutation: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .blockfold.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Show which segments would be included, without folding
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .blockfold.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match self.input {
            None => return Err("An input document or directory is required".to_string()),
            Some(ref input) if !input.exists() => {
                return Err(format!("Input does not exist: {}", input.display()));
            }
            Some(_) => {}
        }

        if let Err(e) = self.parsed_flags() {
            return Err(e.to_string());
        }

        Ok(())
    }

    /// The `--flag` assignments as a flag set.
    pub fn parsed_flags(&self) -> ComposeResult<Flags> {
        let mut flags = Flags::new();
        for assignment in &self.flags {
            flags.assign(assignment)?;
        }
        Ok(flags)
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn make_args(input: PathBuf) -> Args {
        Args {
            input: Some(input),
            output: None,
            format: None,
            color: None,
            flags: Vec::new(),
            separator: None,
            salutation: None,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = Args::try_parse_from([
            "blockfold",
            "doc.toml",
            "--format",
            "html",
            "--flag",
            "excited",
            "--flag",
            "loud=false",
            "--color",
            "never",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("doc.toml")));
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert_eq!(args.color, Some(ColorMode::Never));

        let flags = args.parsed_flags().unwrap();
        assert_eq!(flags.get("excited"), Some(true));
        assert_eq!(flags.get("loud"), Some(false));
    }

    #[test]
    fn test_input_required_unless_init_config() {
        assert!(Args::try_parse_from(["blockfold"]).is_err());
        let args = Args::try_parse_from(["blockfold", "--init-config"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let file = NamedTempFile::new().unwrap();

        let args = make_args(file.path().to_path_buf());
        assert!(args.validate().is_ok());

        let mut args = make_args(file.path().to_path_buf());
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());

        let args = make_args(PathBuf::from("/definitely/not/here.toml"));
        assert!(args.validate().is_err());

        let mut args = make_args(file.path().to_path_buf());
        args.flags = vec!["x=perhaps".to_string()];
        assert!(args.validate().unwrap_err().contains("x=perhaps"));
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args(PathBuf::from("doc.toml"));
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
