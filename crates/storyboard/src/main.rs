//! Storyboard CLI binary.
//!
//! - Generate an episode storyboard from a script
//! - Print the response schema
//! - Print the composed prompts without calling the provider

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, load_config, print_prompt, print_schema, run_generate};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    storyboard::init_tracing(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Generate(args) => {
            let config = load_config(cli.config.as_deref())?;
            run_generate(&args, config).await?;
        }

        Commands::Schema => print_schema()?,

        Commands::Prompt { source } => print_prompt(&source)?,
    }

    Ok(())
}
