//! Production summary text.
//!
//! The summary is the hand-off document for downstream image and video
//! generation. It shows display names (aliases applied) and leaves out the
//! original script fragments.

use crate::AliasMap;
use storyboard_core::{Episode, Grid, GridRole, Hook, ShotGroup};

const NO_LINE: &str = "[无]";

fn render_grid(role: GridRole, grid: &Grid) -> String {
    let mut lines = vec![
        format!(
            "#### **Grid {} ({}) - {}**",
            role.index(),
            role,
            role.title()
        ),
        format!(
            "*   **时间分配**: [{}] | **镜头时长**: [{} 秒]",
            grid.time_range, grid.duration
        ),
        format!(
            "*   **台词**: {}",
            grid.dialogue.spoken().unwrap_or(NO_LINE)
        ),
    ];
    if let Some(prism) = grid.visual_prism.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("*   **视觉棱镜**: {}", prism));
    }

    lines.push(String::new());
    lines.push("**视频提示词 (中文):**".to_string());
    lines.push(format!("**[画面描述]**: {}", grid.prompt));
    if let Some(details) = grid.details.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("**[细节推演]**: {}", details));
    }

    lines.push(String::new());
    lines.push(format!("**音效**: {}", grid.sfx));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.join("\n")
}

/// Render one shot group.
///
/// # Examples
///
/// ```
/// use storyboard_director::{AliasMap, render_group};
/// # use storyboard_core::Episode;
/// # fn show(episode: &Episode) {
/// let mut characters = AliasMap::default();
/// characters.set("星绒", "小绒");
/// let text = render_group(&episode.groups[0], &characters, &AliasMap::default());
/// assert!(text.contains("小绒"));
/// # }
/// ```
pub fn render_group(group: &ShotGroup, characters: &AliasMap, scenes: &AliasMap) -> String {
    let cast: Vec<&str> = group
        .characters
        .iter()
        .map(|name| characters.display_name(name))
        .collect();

    let grids: Vec<String> = group
        .grids()
        .into_iter()
        .map(|(role, grid)| render_grid(role, grid))
        .collect();

    format!(
        "场景: {}\n角色: {}\n\n{}",
        scenes.display_name(&group.scene),
        cast.join(", "),
        grids.join("\n\n")
    )
}

fn render_hook(hook: &Hook) -> String {
    format!(
        "## 悬念钩子 | {}\n**悬念**: {}\n**[画面描述]**: {}\n**音效**: {}",
        hook.duration, hook.suspense, hook.prompt, hook.sfx
    )
}

/// Render the whole episode: a header, every group in order, then the hook.
pub fn render_episode(episode: &Episode, characters: &AliasMap, scenes: &AliasMap) -> String {
    let mut sections = vec![format!(
        "# 第 {} 集 | 总时长 {}",
        episode.episode_number, episode.total_duration
    )];

    for group in &episode.groups {
        sections.push(format!(
            "## 镜头组 {:02} | {}\n\n{}",
            group.group_id,
            group.time_range,
            render_group(group, characters, scenes)
        ));
    }

    sections.push(render_hook(&episode.hook));
    sections.join("\n\n")
}
