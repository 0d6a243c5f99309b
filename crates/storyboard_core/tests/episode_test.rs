//! Decoding and inspecting episodes.

use storyboard_core::{
    ContractViolation, Dialogue, Episode, GridRole, MIN_GROUPS, contract_report,
};

const FIXTURE: &str = include_str!("fixtures/episode.json");

fn fixture() -> anyhow::Result<Episode> {
    Ok(serde_json::from_str(FIXTURE)?)
}

#[test]
fn decodes_fixture_episode() -> anyhow::Result<()> {
    let episode = fixture()?;
    assert_eq!(episode.episode_number, 1);
    assert_eq!(episode.groups.len(), 15);
    assert_eq!(episode.first_group_id(), Some(1));
    assert_eq!(episode.hook.sfx, "低沉的兽类呼吸声");
    Ok(())
}

#[test]
fn distinct_names_keep_first_appearance_order() -> anyhow::Result<()> {
    let episode = fixture()?;
    assert_eq!(episode.distinct_characters(), vec!["星绒", "白冥", "幻影狼"]);
    assert_eq!(
        episode.distinct_scenes(),
        vec!["迷雾森林", "古木阴影", "冰晶草地"]
    );
    Ok(())
}

#[test]
fn optional_annotations_follow_the_payload() -> anyhow::Result<()> {
    let episode = fixture()?;
    let group = episode.group(3).ok_or_else(|| anyhow::anyhow!("group 3"))?;

    assert!(group.grid(GridRole::Anchor).visual_prism.is_some());
    assert!(group.grid(GridRole::Inheritance).visual_prism.is_none());
    assert!(group.grid(GridRole::Detail).details.is_some());
    assert!(group.grid(GridRole::Reaction).details.is_none());
    assert_eq!(group.grid(GridRole::Anchor).dialogue, Dialogue::Silent);
    assert_eq!(
        group.grid(GridRole::Reaction).dialogue.spoken(),
        Some("别怕，我在。")
    );
    assert_eq!(group.duration_seconds(), Some(10.0));
    Ok(())
}

#[test]
fn grids_come_back_in_beat_order() -> anyhow::Result<()> {
    let episode = fixture()?;
    let roles: Vec<GridRole> = episode.groups[0].grids().iter().map(|(r, _)| *r).collect();
    assert_eq!(
        roles,
        vec![
            GridRole::Anchor,
            GridRole::Inheritance,
            GridRole::Detail,
            GridRole::Climax,
            GridRole::Reaction
        ]
    );
    Ok(())
}

#[test]
fn missing_required_grid_field_fails_to_decode() -> anyhow::Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE)?;
    let grid = value["groups"][0]["grid2"]
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("grid2 is an object"))?;
    grid.remove("dialogue");

    assert!(serde_json::from_value::<Episode>(value).is_err());
    Ok(())
}

#[test]
fn missing_group_metadata_decodes_empty() -> anyhow::Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE)?;
    let group = value["groups"][0]
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("group is an object"))?;
    group.remove("style");
    group.remove("beastInference");

    let episode: Episode = serde_json::from_value(value)?;
    assert_eq!(episode.groups[0].style, "");
    assert_eq!(episode.groups[0].beast_inference, "");
    Ok(())
}

#[test]
fn serialization_preserves_absent_and_empty_annotations() -> anyhow::Result<()> {
    let mut episode = fixture()?;
    episode.groups[0].grid1.visual_prism = Some(String::new());

    let value = serde_json::to_value(&episode)?;
    assert_eq!(value["groups"][0]["grid1"]["visualPrism"], "");
    assert!(value["groups"][0]["grid2"].get("visualPrism").is_none());

    let back: Episode = serde_json::from_value(value)?;
    assert_eq!(back, episode);
    Ok(())
}

#[test]
fn fixture_meets_the_group_contract() -> anyhow::Result<()> {
    let episode = fixture()?;
    assert!(contract_report(&episode).is_empty());
    Ok(())
}

#[test]
fn contract_report_lists_each_departure() -> anyhow::Result<()> {
    let mut episode = fixture()?;
    episode.groups.truncate(4);
    episode.groups[1].group_id = 7;
    episode.groups[2].group_id = 1;
    episode.groups[3].duration = "12s".to_string();

    let report = contract_report(&episode);
    assert_eq!(
        report,
        vec![
            ContractViolation::GroupCount(4),
            ContractViolation::GroupIdOutOfSequence {
                position: 2,
                group_id: 7
            },
            ContractViolation::DuplicateGroupId(1),
            ContractViolation::GroupDuration {
                group_id: 4,
                duration: "12s".to_string()
            },
        ]
    );
    assert!(report[0].to_string().contains(&MIN_GROUPS.to_string()));
    Ok(())
}
