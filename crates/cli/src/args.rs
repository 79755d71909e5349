//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load sources (see `config_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use envset_config::LineSyntax;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envset")]
#[command(about = "Load KEY=VALUE and structured configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envset get DB_HOST --default localhost\n  envset -f prod.env list --format json\n  envset show config/app.yaml --path server.port\n  envset resolve GOOGLE_APPLICATION_CREDENTIALS\n  envset run -- ./server --port 8080\n"
)]
pub struct Cli {
    /// Path to the KEY=VALUE source (default: .env found from the current directory upward)
    #[arg(short, long, global = true, env = "ENVSET_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Line syntax of the source
    #[arg(long, global = true, env = "ENVSET_SYNTAX", default_value = "plain", value_enum)]
    pub syntax: SyntaxArg,

    /// Fail on malformed lines instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a setting
    Get {
        /// Setting key
        key: String,

        /// Value to print when the key is absent
        #[arg(short, long, allow_hyphen_values = true)]
        default: Option<String>,
    },

    /// List all settings in the source
    List {
        /// Output format
        #[arg(short = 'o', long, default_value = "env", value_enum)]
        format: OutputFormat,

        /// Print values instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Validate the source strictly and report the number of settings
    Check,

    /// Print a structured (JSON/YAML) document
    Show {
        /// Path to a .json, .yaml or .yml document
        #[arg(value_name = "FILE")]
        document: PathBuf,

        /// Print only the setting at this dotted path (e.g. server.port)
        #[arg(short, long, value_name = "KEY.PATH")]
        path: Option<String>,

        /// Flatten nested settings into single-level keys
        #[arg(long)]
        flatten: bool,

        /// Separator used when flattening
        #[arg(long, default_value = ".")]
        separator: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "json", value_enum)]
        format: OutputFormat,
    },

    /// Print the structured document whose path is stored in a setting
    Resolve {
        /// Setting key holding the document path
        key: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "json", value_enum)]
        format: OutputFormat,
    },

    /// Run a command with the settings added to its environment
    Run {
        /// Keep variables already set in the environment instead of overriding them
        #[arg(long)]
        no_override: bool,

        /// Program and arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Line syntax accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyntaxArg {
    Plain,
    Dotenv,
}

impl From<SyntaxArg> for LineSyntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Plain => LineSyntax::Plain,
            SyntaxArg::Dotenv => LineSyntax::Dotenv,
        }
    }
}

/// Output formats for printed settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Env,
    Json,
    Yaml,
}
