//! Display-name overrides for characters and scenes.

use serde::Serialize;
use std::collections::BTreeMap;

/// Original name to display name.
///
/// An overlay only: the episode keeps its original names, readers ask the map
/// for the name to show. An entry holding an empty string is kept but means
/// "no override".
///
/// # Examples
///
/// ```
/// use storyboard_director::AliasMap;
///
/// let mut aliases = AliasMap::default();
/// aliases.set("星绒", "小绒");
/// aliases.set("白冥", "");
///
/// assert_eq!(aliases.display_name("星绒"), "小绒");
/// assert_eq!(aliases.display_name("白冥"), "白冥");
/// assert_eq!(aliases.display_name("幻影狼"), "幻影狼");
/// assert_eq!(aliases.active_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AliasMap(BTreeMap<String, String>);

impl AliasMap {
    /// Insert or replace the override for `original`.
    pub fn set(&mut self, original: impl Into<String>, alias: impl Into<String>) {
        self.0.insert(original.into(), alias.into());
    }

    /// The stored override, including empty ones.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.0.get(original).map(String::as_str)
    }

    /// The name to show for `original`.
    pub fn display_name<'a>(&'a self, original: &'a str) -> &'a str {
        match self.0.get(original) {
            Some(alias) if !alias.is_empty() => alias,
            _ => original,
        }
    }

    /// Number of entries that actually override a name.
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|alias| !alias.is_empty()).count()
    }

    /// Number of stored entries, empty ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Stored entries in original-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// How many overrides are in effect, reported after a sync request.
///
/// # Examples
///
/// ```
/// use storyboard_director::AliasSyncReport;
///
/// let report = AliasSyncReport { characters: 2, scenes: 1 };
/// assert_eq!(
///     report.to_string(),
///     "同步成功：已将 2 个角色映射与 1 个场景映射应用至全量分镜汇总。"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(
    "同步成功：已将 {} 个角色映射与 {} 个场景映射应用至全量分镜汇总。",
    characters,
    scenes
)]
pub struct AliasSyncReport {
    /// Active character overrides
    pub characters: usize,
    /// Active scene overrides
    pub scenes: usize,
}
