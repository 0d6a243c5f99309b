//! Tests for the storyboard generation call.

mod test_utils;

use storyboard_core::{ResponseFormat, Role};
use storyboard_director::{
    DEFAULT_THINKING_BUDGET, ROLE_PROMPT, Script, StoryboardGenerator, USER_PREAMBLE,
};
use storyboard_error::{GeminiErrorKind, GenerationErrorKind};
use test_utils::{EPISODE_JSON, MockDriver, MockResponse};

#[tokio::test]
async fn generates_episode_with_one_call() -> anyhow::Result<()> {
    let generator = StoryboardGenerator::new(MockDriver::new_success(EPISODE_JSON));

    let episode = generator.generate(&Script::sample()).await?;

    assert_eq!(episode.groups.len(), 15);
    assert_eq!(generator.driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn request_carries_prompt_schema_and_budget() -> anyhow::Result<()> {
    let generator = StoryboardGenerator::new(MockDriver::new_success(EPISODE_JSON));
    let script = Script::sample();

    generator.generate(&script).await?;

    let requests = generator.driver().requests();
    let request = &requests[0];
    assert_eq!(request.system_instruction().as_deref(), Some(ROLE_PROMPT));
    assert_eq!(request.messages().len(), 1);
    assert_eq!(request.messages()[0].role, Role::User);
    assert_eq!(
        request.messages()[0].text,
        format!("{}{}", USER_PREAMBLE, script.as_str())
    );
    assert_eq!(*request.thinking_budget(), Some(DEFAULT_THINKING_BUDGET));
    assert!(request.model().is_none());
    match request.response_format() {
        ResponseFormat::Json { schema } => {
            assert_eq!(schema["type"], "OBJECT");
            assert_eq!(schema["required"][2], "groups");
        }
        other => anyhow::bail!("expected JSON response format, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn overrides_reach_the_request() -> anyhow::Result<()> {
    let generator = StoryboardGenerator::new(MockDriver::new_success(EPISODE_JSON))
        .with_thinking_budget(2048)
        .with_model("gemini-2.5-pro");

    generator.generate(&Script::sample()).await?;

    let request = &generator.driver().requests()[0];
    assert_eq!(*request.thinking_budget(), Some(2048));
    assert_eq!(request.model().as_deref(), Some("gemini-2.5-pro"));
    Ok(())
}

#[tokio::test]
async fn fenced_payload_is_accepted() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", EPISODE_JSON);
    let generator = StoryboardGenerator::new(MockDriver::new_success(fenced));

    let episode = generator.generate(&Script::sample()).await?;
    assert_eq!(episode.groups[0].scene, "迷雾森林");
    Ok(())
}

#[tokio::test]
async fn bare_payload_with_trailing_note_is_accepted() -> anyhow::Result<()> {
    let trailing = format!("{}\n分镜拆解完成。", EPISODE_JSON.trim());
    let generator = StoryboardGenerator::new(MockDriver::new_success(trailing));

    let episode = generator.generate(&Script::sample()).await?;
    assert_eq!(episode.groups.len(), 15);
    Ok(())
}

#[tokio::test]
async fn missing_grid_is_a_parse_error() -> anyhow::Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(EPISODE_JSON)?;
    value["groups"][4]
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("group is an object"))?
        .remove("grid4");
    let generator = StoryboardGenerator::new(MockDriver::new_success(value.to_string()));

    let err = generator
        .generate(&Script::sample())
        .await
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected a parse error"))?;

    assert!(matches!(err.kind, GenerationErrorKind::Parse(_)));
    assert!(err.user_message().contains("grid4"));
    Ok(())
}

#[tokio::test]
async fn episode_without_groups_is_rejected() -> anyhow::Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(EPISODE_JSON)?;
    value["groups"] = serde_json::json!([]);
    let generator = StoryboardGenerator::new(MockDriver::new_success(value.to_string()));

    let err = generator.generate(&Script::sample()).await.err();
    assert_eq!(err.map(|e| e.kind), Some(GenerationErrorKind::EmptyEpisode));
    Ok(())
}

#[tokio::test]
async fn soft_contract_departures_are_tolerated() -> anyhow::Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(EPISODE_JSON)?;
    let groups = value["groups"]
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("groups is an array"))?;
    groups.truncate(3);
    groups[1]["duration"] = serde_json::json!("8s");
    groups[2]["grid2"]["visualPrism"] = serde_json::json!("逆光");
    let generator = StoryboardGenerator::new(MockDriver::new_success(value.to_string()));

    let episode = generator.generate(&Script::sample()).await?;
    assert_eq!(episode.groups.len(), 3);
    assert_eq!(episode.groups[2].grid2.visual_prism.as_deref(), Some("逆光"));
    Ok(())
}

#[tokio::test]
async fn provider_failures_are_normalized() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Error(GeminiErrorKind::HttpStatus {
            status_code: 403,
            message: "API key not valid.".to_string(),
        }),
        MockResponse::Transport("dns error".to_string()),
        MockResponse::Error(GeminiErrorKind::MissingApiKey("GEMINI_API_KEY".to_string())),
        MockResponse::Success("   ".to_string()),
    ]);
    let generator = StoryboardGenerator::new(driver);
    let script = Script::sample();

    let mut kinds = Vec::new();
    for _ in 0..4 {
        let err = generator
            .generate(&script)
            .await
            .err()
            .ok_or_else(|| anyhow::anyhow!("expected failure"))?;
        kinds.push(err.kind);
    }

    assert_eq!(
        kinds,
        vec![
            GenerationErrorKind::Provider {
                status_code: 403,
                message: "API key not valid.".to_string()
            },
            GenerationErrorKind::Transport("dns error".to_string()),
            GenerationErrorKind::MissingApiKey("GEMINI_API_KEY".to_string()),
            GenerationErrorKind::EmptyResponse,
        ]
    );
    assert_eq!(generator.driver().call_count(), 4);
    Ok(())
}
