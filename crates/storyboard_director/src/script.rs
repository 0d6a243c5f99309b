//! Script input.

use storyboard_error::{SessionError, SessionErrorKind};

/// Demonstration script with two characters and one scene.
pub const SAMPLE_SCRIPT: &str = "场景：迷雾森林。环境清冷，树枝挂满冰凌。
角色：星绒（灵动的少女），白冥（深沉的守护者）。
星绒 缓缓从冰晶草地坐起，揉了揉惺忪的睡眼，脖子上的冰晶项链发出幽蓝的光。
白冥 站在远处的古木阴影下，目光如炬，手中的长剑隐隐发出龙吟。
星绒 突然听到了树丛深处的异动，惊恐地回头。
一群 幻影狼 悄然包围了她，利齿散发着寒气。
白冥 瞬移至星绒身前，剑光如虹，将迷雾撕裂。";

/// Script text that is known to contain something besides whitespace.
///
/// The text is kept verbatim; only the emptiness check trims.
///
/// # Examples
///
/// ```
/// use storyboard_director::Script;
///
/// assert!(Script::new("  \n\t").is_err());
/// let script = Script::new("场景：迷雾森林。\n").unwrap();
/// assert_eq!(script.as_str(), "场景：迷雾森林。\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Script(String);

impl Script {
    /// Accept `text` if it is not empty or whitespace-only.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::EmptyScript`] for blank text.
    #[track_caller]
    pub fn new(text: impl Into<String>) -> Result<Self, SessionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyScript));
        }
        Ok(Self(text))
    }

    /// The bundled [`SAMPLE_SCRIPT`].
    pub fn sample() -> Self {
        Self(SAMPLE_SCRIPT.to_string())
    }

    /// The script text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
