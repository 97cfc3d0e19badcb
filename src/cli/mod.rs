//! CLI module for todor - process arguments and shell line commands.

pub mod commands;

pub use commands::{Cli, ShellCommand, ShellLine};
