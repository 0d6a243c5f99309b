//! The five beats of a shot group.

use crate::Dialogue;
use serde::{Deserialize, Serialize};

/// Position of a grid inside its shot group.
///
/// Every group is decomposed into the same five beats, in this order.
///
/// # Examples
///
/// ```
/// use storyboard_core::GridRole;
/// use strum::IntoEnumIterator;
///
/// let order: Vec<u8> = GridRole::iter().map(|r| r.index()).collect();
/// assert_eq!(order, vec![1, 2, 3, 4, 5]);
/// assert_eq!(GridRole::Climax.to_string(), "Climax");
/// assert_eq!(GridRole::Detail.field_name(), "grid3");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum GridRole {
    /// Entrance and establishing beat
    Anchor,
    /// Carries the action forward
    Inheritance,
    /// Close-up on material and texture
    Detail,
    /// Peak of tension
    Climax,
    /// Reaction and lingering aftermath
    Reaction,
}

impl GridRole {
    /// 1-based beat number.
    pub fn index(self) -> u8 {
        match self {
            GridRole::Anchor => 1,
            GridRole::Inheritance => 2,
            GridRole::Detail => 3,
            GridRole::Climax => 4,
            GridRole::Reaction => 5,
        }
    }

    /// Wire name of the grid field on a shot group.
    pub fn field_name(self) -> &'static str {
        match self {
            GridRole::Anchor => "grid1",
            GridRole::Inheritance => "grid2",
            GridRole::Detail => "grid3",
            GridRole::Climax => "grid4",
            GridRole::Reaction => "grid5",
        }
    }

    /// Production subtitle used in summaries.
    pub fn title(self) -> &'static str {
        match self {
            GridRole::Anchor => "入场与建立",
            GridRole::Inheritance => "承接与推进",
            GridRole::Detail => "细节炸裂 (Micro-World)",
            GridRole::Climax => "高潮与张力 (Sakuga Moment)",
            GridRole::Reaction => "反应与余韵 (Breathing Protocol)",
        }
    }

    /// Whether the schema offers a `visualPrism` field for this beat.
    pub fn carries_visual_prism(self) -> bool {
        matches!(self, GridRole::Anchor | GridRole::Climax)
    }

    /// Whether the schema offers a `details` field for this beat.
    pub fn carries_details(self) -> bool {
        matches!(self, GridRole::Detail)
    }
}

/// One beat within a shot group.
///
/// `visual_prism` and `details` are requested only on some beats, but any
/// beat may carry them; absent stays `None` and an empty string stays
/// `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    /// Sub-interval within the group's ten seconds
    pub time_range: String,
    /// Length of the beat
    pub duration: String,
    /// Script fragment this beat was derived from
    pub original_text: String,
    /// Spoken line or the silent sentinel
    pub dialogue: Dialogue,
    /// Stylistic lens annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_prism: Option<String>,
    /// Visual description driving image/video generation
    pub prompt: String,
    /// Deeper sensory elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Sound design
    pub sfx: String,
}
