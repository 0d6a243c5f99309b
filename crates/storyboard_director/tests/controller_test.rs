//! Tests for async generation through the director.

mod test_utils;

use std::time::Duration;
use storyboard_director::{
    Director, GenerationOutcome, SAMPLE_SCRIPT, SessionPhase, StoryboardGenerator,
};
use storyboard_error::{GeminiErrorKind, GenerationErrorKind, SessionErrorKind};
use test_utils::{EPISODE_JSON, MockDriver};

fn director(driver: MockDriver) -> Director<MockDriver> {
    let director = Director::new(StoryboardGenerator::new(driver));
    director.load_sample();
    director
}

#[tokio::test]
async fn generate_applies_episode() -> anyhow::Result<()> {
    let director = director(MockDriver::new_success(EPISODE_JSON));

    let outcome = director.generate().await?;

    assert!(matches!(outcome, GenerationOutcome::Ready { groups: 15 }));
    let session = director.snapshot();
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.active_group(), Some(1));
    assert_eq!(director.generator().driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn failure_is_recorded_on_the_session() -> anyhow::Result<()> {
    let director = director(MockDriver::new_error(GeminiErrorKind::Blocked(
        "SAFETY".to_string(),
    )));

    let outcome = director.generate().await?;

    match outcome {
        GenerationOutcome::Failed(err) => {
            assert_eq!(err.kind, GenerationErrorKind::Rejected("SAFETY".to_string()));
        }
        other => anyhow::bail!("expected failure, got {other:?}"),
    }
    director.read(|s| {
        assert_eq!(s.phase(), SessionPhase::Input);
        assert!(s.error().is_some_and(|m| m.contains("SAFETY")));
        assert_eq!(s.script(), SAMPLE_SCRIPT);
    });
    Ok(())
}

#[tokio::test]
async fn blank_script_makes_no_call() -> anyhow::Result<()> {
    let director = director(MockDriver::new_success(EPISODE_JSON));
    director.set_script("  \n ");

    let err = director.generate().await.err();

    assert_eq!(err.map(|e| e.kind), Some(SessionErrorKind::EmptyScript));
    assert_eq!(director.generator().driver().call_count(), 0);
    assert_eq!(
        director.read(|s| s.error().map(str::to_string)),
        Some("请输入剧本内容后再启动预演。".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn second_generate_while_in_flight_is_refused() -> anyhow::Result<()> {
    let (driver, gate) = MockDriver::new_success(EPISODE_JSON).gated();
    let director = director(driver);

    let first = director.generate();
    let second = async {
        while !director.read(|s| s.is_loading()) {
            tokio::task::yield_now().await;
        }
        let refused = director.generate().await;
        gate.add_permits(1);
        refused
    };

    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first?, GenerationOutcome::Ready { groups: 15 }));
    assert_eq!(
        second.err().map(|e| e.kind),
        Some(SessionErrorKind::GenerationInFlight)
    );
    assert_eq!(director.generator().driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn reads_stay_available_while_generating() -> anyhow::Result<()> {
    let (driver, gate) = MockDriver::new_success(EPISODE_JSON).gated();
    let director = director(driver);

    let generation = director.generate();
    let observer = async {
        while !director.read(|s| s.is_loading()) {
            tokio::task::yield_now().await;
        }
        director.set_script("场景：冰湖。");
        let aliased = director.set_character_alias("星绒", "小绒");
        let reset = director.reset();
        gate.add_permits(1);
        (aliased, reset)
    };

    let (outcome, (aliased, reset)) = tokio::join!(generation, observer);

    assert!(matches!(outcome?, GenerationOutcome::Ready { .. }));
    assert_eq!(aliased.err().map(|e| e.kind), Some(SessionErrorKind::NoEpisode));
    assert_eq!(reset.err().map(|e| e.kind), Some(SessionErrorKind::NoEpisode));

    let requests = director.generator().driver().requests();
    assert!(requests[0].messages()[0].text.ends_with(SAMPLE_SCRIPT));
    assert_eq!(director.read(|s| s.script().to_string()), "场景：冰湖。");
    Ok(())
}

#[tokio::test]
async fn regenerate_discards_aliases() -> anyhow::Result<()> {
    let director = director(MockDriver::new_success(EPISODE_JSON));
    director.generate().await?;
    director.set_character_alias("星绒", "小绒")?;
    assert!(director.sync_aliases().is_some());

    director.generate().await?;

    assert!(director.read(|s| s.character_aliases().is_empty()));
    assert_eq!(director.sync_aliases(), None);
    assert_eq!(director.generator().driver().call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn cancelled_generate_returns_session_to_input() -> anyhow::Result<()> {
    let (driver, gate) = MockDriver::new_success(EPISODE_JSON).gated();
    let director = director(driver);

    let timed_out = tokio::time::timeout(Duration::from_millis(50), director.generate()).await;
    assert!(timed_out.is_err());

    director.read(|s| {
        assert_eq!(s.phase(), SessionPhase::Input);
        assert_eq!(s.script(), SAMPLE_SCRIPT);
        assert_eq!(s.error(), None);
    });
    assert_eq!(
        director.reset().err().map(|e| e.kind),
        Some(SessionErrorKind::NoEpisode)
    );

    gate.add_permits(1);
    let outcome = director.generate().await?;

    assert!(matches!(outcome, GenerationOutcome::Ready { groups: 15 }));
    assert_eq!(director.generator().driver().call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn missing_key_is_a_call_failure() -> anyhow::Result<()> {
    let director = director(MockDriver::new_error(GeminiErrorKind::MissingApiKey(
        "GEMINI_API_KEY".to_string(),
    )));

    let outcome = director.generate().await?;

    assert!(matches!(
        outcome,
        GenerationOutcome::Failed(ref e)
            if e.kind == GenerationErrorKind::MissingApiKey("GEMINI_API_KEY".to_string())
    ));
    director.read(|s| {
        assert_eq!(s.phase(), SessionPhase::Input);
        assert!(s.error().is_some_and(|m| m.contains("GEMINI_API_KEY")));
    });
    Ok(())
}
