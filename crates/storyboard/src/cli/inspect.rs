//! Commands that show what would be sent, without sending it.

use super::ScriptSource;
use storyboard::{DirectorPrompt, Script, episode_schema};

/// Print the episode response schema.
pub fn print_schema() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&episode_schema())?);
    Ok(())
}

/// Print the system instruction and the user text for a script.
pub fn print_prompt(source: &ScriptSource) -> anyhow::Result<()> {
    let script = Script::new(source.read()?)?;
    let prompt = DirectorPrompt::compose(&script);
    println!("=== system ===\n{}\n\n=== user ===\n{}", prompt.system, prompt.user);
    Ok(())
}
