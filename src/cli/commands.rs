//! CLI command definitions using clap.
//!
//! Two parsers live here:
//! - `Cli`: the process arguments
//! - `ShellLine`: one line typed into the shell (`add`, `list`, `show`, `toggle`, `rm`, `quit`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todor - an in-memory todo list driven from stdin
#[derive(Parser, Debug)]
#[command(name = "todor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read JSON requests and write JSON responses, one per line
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// A single shell line, parsed without a binary name
#[derive(Parser, Debug)]
#[command(name = "todor", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

impl ShellLine {
    /// Split a raw line on whitespace and parse it
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

/// Shell commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Create a new item
    #[command(alias = "create")]
    Add {
        /// Item text; words are re-joined with single spaces, so runs of
        /// whitespace collapse (JSON mode keeps content exactly as sent)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// List all items in creation order
    #[command(alias = "ls", alias = "index")]
    List,

    /// Show one item
    #[command(alias = "find")]
    Show {
        /// Item ID
        id: String,
    },

    /// Flip an item between open and done
    Toggle {
        /// Item ID
        id: String,
    },

    /// Delete an item
    #[command(alias = "remove")]
    Rm {
        /// Item ID
        id: String,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
