//! CLI command definitions.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// Storyboard - turn a short-drama script into an anime storyboard
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a short-drama script into an anime storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an episode storyboard from a script
    Generate(GenerateArgs),

    /// Print the response schema sent to the provider
    Schema,

    /// Print the composed prompts without calling the provider
    Prompt {
        #[command(flatten)]
        source: ScriptSource,
    },
}

/// Where the script comes from. Exactly one is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ScriptSource {
    /// Read the script from a file
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Use this text as the script
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Use the bundled sample script
    #[arg(long)]
    pub sample: bool,
}

impl ScriptSource {
    /// The script text, verbatim.
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(path) = &self.script {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script from {}", path.display()));
        }
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        Ok(storyboard::SAMPLE_SCRIPT.to_string())
    }
}

/// Arguments of `storyboard generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: ScriptSource,

    /// Show a character under another name (repeatable)
    #[arg(long = "character-alias", value_name = "ORIGINAL=ALIAS")]
    pub character_aliases: Vec<AliasPair>,

    /// Show a scene under another name (repeatable)
    #[arg(long = "scene-alias", value_name = "ORIGINAL=ALIAS")]
    pub scene_aliases: Vec<AliasPair>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Model to request instead of the configured one
    #[arg(long)]
    pub model: Option<String>,

    /// Reasoning token budget instead of the configured one
    #[arg(long)]
    pub thinking_budget: Option<u32>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Production summary text with aliases applied
    Summary,
    /// Episode JSON together with the alias maps
    Json,
}

/// One `ORIGINAL=ALIAS` override from the command line.
///
/// An empty alias is accepted and leaves the original name in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasPair {
    /// Name as it appears in the episode
    pub original: String,
    /// Name to show instead
    pub alias: String,
}

impl FromStr for AliasPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (original, alias) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ORIGINAL=ALIAS, got '{}'", s))?;
        let original = original.trim();
        if original.is_empty() {
            return Err(format!("missing original name in '{}'", s));
        }
        Ok(Self {
            original: original.to_string(),
            alias: alias.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn alias_pair_splits_on_first_equals() {
        let pair: AliasPair = "星绒=小绒=2".parse().unwrap();
        assert_eq!(pair.original, "星绒");
        assert_eq!(pair.alias, "小绒=2");
    }

    #[test]
    fn alias_pair_allows_empty_alias() {
        let pair: AliasPair = " 白冥 = ".parse().unwrap();
        assert_eq!(pair.original, "白冥");
        assert_eq!(pair.alias, "");
    }

    #[test]
    fn alias_pair_rejects_missing_parts() {
        assert!("星绒".parse::<AliasPair>().is_err());
        assert!("=小绒".parse::<AliasPair>().is_err());
    }

    #[test]
    fn generate_collects_repeated_aliases() {
        let cli = Cli::try_parse_from([
            "storyboard",
            "generate",
            "--sample",
            "--character-alias",
            "星绒=小绒",
            "--character-alias",
            "白冥=冥",
            "--scene-alias",
            "迷雾森林=雾林",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.source.sample);
        assert_eq!(args.character_aliases.len(), 2);
        assert_eq!(args.scene_aliases[0].alias, "雾林");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn script_sources_are_exclusive_and_required() {
        assert!(Cli::try_parse_from(["storyboard", "generate"]).is_err());
        assert!(
            Cli::try_parse_from(["storyboard", "prompt", "--sample", "--text", "场景"]).is_err()
        );
    }
}
