//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod commands;
mod generate;
mod inspect;

pub use commands::{AliasPair, Cli, Commands, GenerateArgs, OutputFormat, ScriptSource};
pub use generate::{load_config, run_generate};
pub use inspect::{print_prompt, print_schema};
