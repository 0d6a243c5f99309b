//! Response schema sent to the model.
//!
//! The schema is written in the provider's OpenAPI subset (`OBJECT`, `ARRAY`,
//! `STRING`, `INTEGER`). It is closed: every field of the data model appears
//! with a concrete type, and every object lists its required fields. Required
//! lists match what [`Episode`](crate::Episode) refuses to decode without.

use crate::GridRole;
use serde_json::{Map, Value, json};
use strum::IntoEnumIterator;

/// Required fields of the episode root.
pub const EPISODE_REQUIRED: &[&str] = &["episodeNumber", "totalDuration", "groups", "hook"];

/// Required fields of a shot group.
pub const SHOT_GROUP_REQUIRED: &[&str] = &[
    "groupId", "scene", "characters", "grid1", "grid2", "grid3", "grid4", "grid5",
];

/// Required fields of every grid.
pub const GRID_REQUIRED: &[&str] = &[
    "timeRange",
    "duration",
    "originalText",
    "dialogue",
    "prompt",
    "sfx",
];

/// Required fields of the hook.
pub const HOOK_REQUIRED: &[&str] = &["duration", "suspense", "prompt", "sfx"];

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn integer() -> Value {
    json!({ "type": "INTEGER" })
}

/// Schema of one grid. The optional annotations offered depend on the beat.
pub fn grid_schema(role: GridRole) -> Value {
    let mut properties = Map::new();
    properties.insert("timeRange".into(), string());
    properties.insert("duration".into(), string());
    properties.insert("originalText".into(), string());
    properties.insert("dialogue".into(), string());
    if role.carries_visual_prism() {
        properties.insert("visualPrism".into(), string());
    }
    properties.insert("prompt".into(), string());
    if role.carries_details() {
        properties.insert("details".into(), string());
    }
    properties.insert("sfx".into(), string());

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": GRID_REQUIRED,
    })
}

/// Schema of one shot group.
pub fn shot_group_schema() -> Value {
    let mut properties = Map::new();
    properties.insert("groupId".into(), integer());
    properties.insert("timeRange".into(), string());
    properties.insert(
        "duration".into(),
        json!({ "type": "STRING", "description": "Must be 10.0s" }),
    );
    properties.insert("scene".into(), string());
    properties.insert(
        "characters".into(),
        json!({ "type": "ARRAY", "items": string() }),
    );
    for field in [
        "propInference",
        "beastInference",
        "style",
        "quality",
        "colorTendency",
    ] {
        properties.insert(field.into(), string());
    }
    for role in GridRole::iter() {
        properties.insert(role.field_name().into(), grid_schema(role));
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": SHOT_GROUP_REQUIRED,
    })
}

/// Schema of the closing hook.
pub fn hook_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "duration": string(),
            "suspense": string(),
            "prompt": string(),
            "sfx": string(),
        },
        "required": HOOK_REQUIRED,
    })
}

/// Schema of a complete episode, the root of every response.
///
/// # Examples
///
/// ```
/// use storyboard_core::episode_schema;
///
/// let schema = episode_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["properties"]["groups"]["type"], "ARRAY");
/// assert_eq!(
///     schema["properties"]["groups"]["items"]["properties"]["duration"]["description"],
///     "Must be 10.0s"
/// );
/// ```
pub fn episode_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "episodeNumber": integer(),
            "totalDuration": string(),
            "groups": { "type": "ARRAY", "items": shot_group_schema() },
            "hook": hook_schema(),
        },
        "required": EPISODE_REQUIRED,
    })
}
