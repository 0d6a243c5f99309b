//! Storyboard generation command handler.

use super::{AliasPair, GenerateArgs, OutputFormat};
use anyhow::{Context, bail};
use serde::Serialize;
use std::path::Path;
use storyboard::{
    AliasMap, DEFAULT_THINKING_BUDGET, Director, Episode, GeminiClient, GenerationOutcome,
    Session, StoryboardConfig, StoryboardGenerator,
};
use tracing::{info, warn};

/// Episode JSON as written by `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeExport<'a> {
    episode: &'a Episode,
    character_aliases: &'a AliasMap,
    scene_aliases: &'a AliasMap,
}

/// Load configuration from `path` when given, otherwise from the usual layers.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<StoryboardConfig> {
    let config = match path {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };
    Ok(config)
}

/// Generate one episode and write it out.
pub async fn run_generate(args: &GenerateArgs, config: StoryboardConfig) -> anyhow::Result<()> {
    let mut gemini = config.gemini().clone();
    if let Some(model) = &args.model {
        gemini = gemini.with_model(model.clone());
    }
    if let Some(budget) = args.thinking_budget {
        gemini = gemini.with_thinking_budget(Some(budget));
    }

    let script = args.source.read()?;
    let client = GeminiClient::new(&gemini)?;
    let generator = StoryboardGenerator::new(client)
        .with_thinking_budget(gemini.thinking_budget().unwrap_or(DEFAULT_THINKING_BUDGET));
    let director = Director::with_session(generator, Session::with_script(script));

    info!(model = %gemini.model(), "Generating storyboard");
    match director.generate().await? {
        GenerationOutcome::Ready { groups } => info!(groups, "Storyboard ready"),
        GenerationOutcome::Failed(e) => bail!(e.user_message()),
        GenerationOutcome::Superseded => bail!("generation was superseded"),
    }

    let session = director.snapshot();
    apply_aliases(&director, &session, &args.character_aliases, &args.scene_aliases)?;
    if let Some(report) = director.sync_aliases() {
        info!("{}", report);
    }

    let session = director.snapshot();
    let rendered = render(&session, args.format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Storyboard written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn apply_aliases<D: storyboard::StoryboardDriver>(
    director: &Director<D>,
    session: &Session,
    characters: &[AliasPair],
    scenes: &[AliasPair],
) -> anyhow::Result<()> {
    let known_characters = session.distinct_characters();
    for pair in characters {
        if !known_characters.contains(&pair.original.as_str()) {
            warn!(name = %pair.original, "Character does not appear in the episode");
        }
        director.set_character_alias(pair.original.clone(), pair.alias.clone())?;
    }

    let known_scenes = session.distinct_scenes();
    for pair in scenes {
        if !known_scenes.contains(&pair.original.as_str()) {
            warn!(name = %pair.original, "Scene does not appear in the episode");
        }
        director.set_scene_alias(pair.original.clone(), pair.alias.clone())?;
    }
    Ok(())
}

fn render(session: &Session, format: OutputFormat) -> anyhow::Result<String> {
    let episode = session.episode().context("no episode to render")?;
    match format {
        OutputFormat::Summary => Ok(session.summary().unwrap_or_default()),
        OutputFormat::Json => {
            let export = EpisodeExport {
                episode,
                character_aliases: session.character_aliases(),
                scene_aliases: session.scene_aliases(),
            };
            Ok(serde_json::to_string_pretty(&export)?)
        }
    }
}
