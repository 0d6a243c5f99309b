//! Episode and shot group types.

use crate::{Grid, GridRole};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One complete generation result.
///
/// Groups are kept in narrative order. An episode is produced whole by one
/// successful generation and replaced whole by the next; nothing here mutates
/// it after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode identifier
    pub episode_number: u32,
    /// Human-readable aggregate runtime
    pub total_duration: String,
    /// Shot groups in narrative order
    pub groups: Vec<ShotGroup>,
    /// Closing suspense teaser
    pub hook: Hook,
}

impl Episode {
    /// Every character name across all groups, first occurrence first.
    pub fn distinct_characters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .flat_map(|group| group.characters.iter())
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Every scene name across all groups, first occurrence first.
    pub fn distinct_scenes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .map(|group| group.scene.as_str())
            .filter(|scene| seen.insert(*scene))
            .collect()
    }

    /// Look up a group by its `groupId`.
    pub fn group(&self, group_id: u32) -> Option<&ShotGroup> {
        self.groups.iter().find(|group| group.group_id == group_id)
    }

    /// The `groupId` of the first group in narrative order.
    pub fn first_group_id(&self) -> Option<u32> {
        self.groups.first().map(|group| group.group_id)
    }
}

/// One ten-second unit of narrative action, split into five grids.
///
/// Metadata the schema does not mark as required decodes to an empty string
/// when the model leaves it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotGroup {
    /// Unique, sequential identifier (1-based position by convention)
    pub group_id: u32,
    /// Position of the group on the episode timeline
    #[serde(default)]
    pub time_range: String,
    /// Group length, expected to read "10.0s"
    #[serde(default)]
    pub duration: String,
    /// Canonical scene name
    pub scene: String,
    /// Characters in first-appearance order
    pub characters: Vec<String>,
    /// Inferred prop materials and wear
    #[serde(default)]
    pub prop_inference: String,
    /// Inferred creature detail
    #[serde(default)]
    pub beast_inference: String,
    /// Rendering style
    #[serde(default)]
    pub style: String,
    /// Quality target
    #[serde(default)]
    pub quality: String,
    /// Colour script for the group
    #[serde(default)]
    pub color_tendency: String,
    /// Anchor beat
    pub grid1: Grid,
    /// Inheritance beat
    pub grid2: Grid,
    /// Detail beat
    pub grid3: Grid,
    /// Climax beat
    pub grid4: Grid,
    /// Reaction beat
    pub grid5: Grid,
}

impl ShotGroup {
    /// The grid playing `role`.
    pub fn grid(&self, role: GridRole) -> &Grid {
        match role {
            GridRole::Anchor => &self.grid1,
            GridRole::Inheritance => &self.grid2,
            GridRole::Detail => &self.grid3,
            GridRole::Climax => &self.grid4,
            GridRole::Reaction => &self.grid5,
        }
    }

    /// All five grids in beat order.
    pub fn grids(&self) -> [(GridRole, &Grid); 5] {
        [
            (GridRole::Anchor, &self.grid1),
            (GridRole::Inheritance, &self.grid2),
            (GridRole::Detail, &self.grid3),
            (GridRole::Climax, &self.grid4),
            (GridRole::Reaction, &self.grid5),
        ]
    }

    /// Group length in seconds, if `duration` reads as a number.
    ///
    /// Accepts "10.0s", "10", "10.0 秒" and similar.
    pub fn duration_seconds(&self) -> Option<f64> {
        parse_seconds(&self.duration)
    }
}

/// Closing teaser appended after the last group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    /// Teaser length
    pub duration: String,
    /// Suspense line
    pub suspense: String,
    /// Visual description
    pub prompt: String,
    /// Sound design
    pub sfx: String,
}

pub(crate) fn parse_seconds(raw: &str) -> Option<f64> {
    let trimmed = raw
        .trim()
        .trim_end_matches('秒')
        .trim_end_matches(['s', 'S'])
        .trim();
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_duration_spellings() {
        assert_eq!(parse_seconds("10.0s"), Some(10.0));
        assert_eq!(parse_seconds(" 10 "), Some(10.0));
        assert_eq!(parse_seconds("10.0 秒"), Some(10.0));
        assert_eq!(parse_seconds("十秒"), None);
        assert_eq!(parse_seconds(""), None);
    }
}
