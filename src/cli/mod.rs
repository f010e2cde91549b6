//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::OutputFormat;
use crate::domain::{Delimiter, Direction, Language};

/// listjoin - Convert between newline-separated lists and delimiter-joined strings.
///
/// Examples: listjoin join -d pipe < items.txt | listjoin split "a, b, c"
#[derive(Parser, Debug)]
#[command(name = "listjoin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// UI language for this run: en or uk (does not change the saved preference).
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Output format: text, json, or table.
    #[arg(short, long, default_value = "text")]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input and delimiter options shared by both conversion directions.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Text to convert (reads --input or stdin if not given).
    pub text: Option<String>,

    /// Delimiter: comma, semicolon, pipe, space (or the character itself).
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Read input from a file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Copy the result to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join a newline-separated list into one delimited string.
    Join(ConvertArgs),

    /// Split a delimited string into a newline-separated list.
    Split(ConvertArgs),

    /// Start an interactive converter session.
    Interactive {
        /// Starting delimiter.
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Starting mode: join or split.
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Show or save the UI language.
    Lang {
        /// Language code to save: en or uk.
        code: Option<String>,
    },

    /// Show the effective configuration, or change saved defaults.
    Config {
        /// Write a default config file if none exists.
        #[arg(long)]
        init: bool,

        /// Save a new default delimiter.
        #[arg(long, value_name = "DELIMITER")]
        set_delimiter: Option<String>,

        /// Save a new default mode: join or split.
        #[arg(long, value_name = "MODE")]
        set_mode: Option<String>,
    },

    /// Show data, config and preference file paths.
    Paths,
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }

    /// Parse the `--lang` override, if given.
    pub fn language(&self) -> Result<Option<Language>, String> {
        self.lang.as_deref().map(str::parse).transpose()
    }
}

/// Parse an optional delimiter argument, falling back to `default`.
pub fn parse_delimiter(arg: Option<&str>, default: Delimiter) -> Result<Delimiter, String> {
    arg.map_or(Ok(default), str::parse)
}

/// Parse an optional mode argument, falling back to `default`.
pub fn parse_direction(arg: Option<&str>, default: Direction) -> Result<Direction, String> {
    arg.map_or(Ok(default), str::parse)
}
