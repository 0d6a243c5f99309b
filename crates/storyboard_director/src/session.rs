//! Session state for one storyboard workspace.
//!
//! [`Session`] is a plain value with synchronous transitions. The network call
//! sits outside it: [`Session::begin_generation`] hands out a
//! [`GenerationTicket`], and the result is applied with
//! [`Session::complete_generation`] only if that ticket is still current.

use crate::{AliasMap, AliasSyncReport, Script, render_episode};
use derive_getters::Getters;
use storyboard_core::Episode;
use storyboard_error::{GenerationError, SessionError, SessionErrorKind};
use tracing::{debug, info, instrument, warn};

/// Message shown when a failed generation carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "分镜解析失败，请检查网络或配置。";

/// Where the session is in the generation cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionPhase {
    /// No episode; the script is editable
    #[default]
    Input,
    /// One generation is in flight
    Generating,
    /// An episode is present
    Ready,
}

/// Proof that a generation was started, and for which script.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GenerationTicket {
    /// Request token, increasing per session
    token: u64,
    /// Script as it was when the generation began
    script: Script,
}

/// Transient state behind the storyboard surface.
///
/// # Examples
///
/// ```
/// use storyboard_director::{Session, SessionPhase};
///
/// let mut session = Session::default();
/// assert!(session.begin_generation().is_err());
/// assert_eq!(session.error(), Some("请输入剧本内容后再启动预演。"));
///
/// session.load_sample();
/// let ticket = session.begin_generation().unwrap();
/// assert_eq!(session.phase(), SessionPhase::Generating);
/// assert_eq!(*ticket.token(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    script: String,
    phase: SessionPhase,
    error: Option<String>,
    episode: Option<Episode>,
    character_aliases: AliasMap,
    scene_aliases: AliasMap,
    active_group: Option<u32>,
    latest_token: u64,
}

impl Session {
    /// A session in the input phase holding `script`.
    pub fn with_script(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    // --- reads ---

    /// Current script text, verbatim.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether a generation is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Generating
    }

    /// Message of the last failure, until dismissed or the next generation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current episode.
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// Character overrides.
    pub fn character_aliases(&self) -> &AliasMap {
        &self.character_aliases
    }

    /// Scene overrides.
    pub fn scene_aliases(&self) -> &AliasMap {
        &self.scene_aliases
    }

    /// Every character in the episode, first occurrence first.
    pub fn distinct_characters(&self) -> Vec<&str> {
        self.episode
            .as_ref()
            .map(Episode::distinct_characters)
            .unwrap_or_default()
    }

    /// Every scene in the episode, first occurrence first.
    pub fn distinct_scenes(&self) -> Vec<&str> {
        self.episode
            .as_ref()
            .map(Episode::distinct_scenes)
            .unwrap_or_default()
    }

    /// Name to show for a character.
    pub fn character_display_name<'a>(&'a self, original: &'a str) -> &'a str {
        self.character_aliases.display_name(original)
    }

    /// Name to show for a scene.
    pub fn scene_display_name<'a>(&'a self, original: &'a str) -> &'a str {
        self.scene_aliases.display_name(original)
    }

    /// The group the presentation is focused on.
    pub fn active_group(&self) -> Option<u32> {
        self.active_group
    }

    /// Production summary of the current episode with aliases applied.
    pub fn summary(&self) -> Option<String> {
        self.episode
            .as_ref()
            .map(|episode| render_episode(episode, &self.character_aliases, &self.scene_aliases))
    }

    // --- mutations ---

    /// Replace the script text. An in-flight generation keeps the script it started with.
    pub fn set_script(&mut self, text: impl Into<String>) {
        self.script = text.into();
    }

    /// Replace the script with the bundled sample and clear any error.
    pub fn load_sample(&mut self) {
        self.script = crate::SAMPLE_SCRIPT.to_string();
        self.error = None;
    }

    /// Clear the displayed error.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start a generation.
    ///
    /// Clears the previous episode, both alias maps, the active group and any
    /// error before handing out the ticket.
    ///
    /// # Errors
    ///
    /// - [`SessionErrorKind::GenerationInFlight`] if one is already running;
    ///   nothing changes.
    /// - [`SessionErrorKind::EmptyScript`] if the script is blank; the
    ///   validation message becomes the session error.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, SessionError> {
        if self.phase == SessionPhase::Generating {
            warn!("Generation already in flight");
            return Err(SessionError::new(SessionErrorKind::GenerationInFlight));
        }

        let script = match Script::new(self.script.clone()) {
            Ok(script) => script,
            Err(e) => {
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.character_aliases.clear();
        self.scene_aliases.clear();
        self.error = None;
        self.episode = None;
        self.active_group = None;
        self.phase = SessionPhase::Generating;
        self.latest_token += 1;

        debug!(token = self.latest_token, "Generation started");
        Ok(GenerationTicket {
            token: self.latest_token,
            script,
        })
    }

    /// Apply the outcome of the generation `ticket` started.
    ///
    /// Returns `false`, changing nothing, when the session is not generating
    /// or a newer ticket has been issued since.
    #[instrument(skip(self, ticket, result), fields(token = ticket.token))]
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        result: Result<Episode, GenerationError>,
    ) -> bool {
        if self.phase != SessionPhase::Generating || ticket.token != self.latest_token {
            debug!(
                latest = self.latest_token,
                phase = %self.phase,
                "Discarding stale generation result"
            );
            return false;
        }

        match result {
            Ok(episode) => {
                info!(groups = episode.groups.len(), "Episode ready");
                self.active_group = episode.first_group_id();
                self.episode = Some(episode);
                self.phase = SessionPhase::Ready;
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "Generation failed");
                self.error = Some(if message.trim().is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
                self.phase = SessionPhase::Input;
            }
        }
        true
    }

    /// Give up on the generation `ticket` started without a result.
    ///
    /// Returns to input with the script kept and no error. Returns `false`,
    /// changing nothing, under the same conditions as
    /// [`complete_generation`](Self::complete_generation).
    #[instrument(skip(self, ticket), fields(token = ticket.token))]
    pub fn abandon_generation(&mut self, ticket: &GenerationTicket) -> bool {
        if self.phase != SessionPhase::Generating || ticket.token != self.latest_token {
            return false;
        }
        warn!("Generation abandoned before it completed");
        self.phase = SessionPhase::Input;
        true
    }

    /// Override the display name of a character.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NoEpisode`] when there is nothing to alias.
    pub fn set_character_alias(
        &mut self,
        original: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_episode()?;
        self.character_aliases.set(original, alias);
        Ok(())
    }

    /// Override the display name of a scene.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NoEpisode`] when there is nothing to alias.
    pub fn set_scene_alias(
        &mut self,
        original: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_episode()?;
        self.scene_aliases.set(original, alias);
        Ok(())
    }

    /// Focus the presentation on a group.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NoEpisode`] without an episode, or
    /// [`SessionErrorKind::UnknownGroup`] for an id the episode lacks.
    pub fn select_group(&mut self, group_id: u32) -> Result<(), SessionError> {
        let episode = self.require_episode()?;
        if episode.group(group_id).is_none() {
            return Err(SessionError::new(SessionErrorKind::UnknownGroup(group_id)));
        }
        self.active_group = Some(group_id);
        Ok(())
    }

    /// Count the overrides in effect. `None` when there are none.
    pub fn sync_aliases(&self) -> Option<AliasSyncReport> {
        let report = AliasSyncReport {
            characters: self.character_aliases.active_count(),
            scenes: self.scene_aliases.active_count(),
        };
        (report.characters > 0 || report.scenes > 0).then_some(report)
    }

    /// Discard the episode and aliases and return to input. The script stays.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NoEpisode`] when there is no episode,
    /// which includes the whole time a generation is in flight.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.require_episode()?;
        self.episode = None;
        self.character_aliases.clear();
        self.scene_aliases.clear();
        self.active_group = None;
        self.error = None;
        self.phase = SessionPhase::Input;
        debug!("Session reset");
        Ok(())
    }

    fn require_episode(&self) -> Result<&Episode, SessionError> {
        self.episode
            .as_ref()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NoEpisode))
    }
}
