//! Async orchestration of a [`Session`] and a [`StoryboardGenerator`].

use crate::{AliasSyncReport, GenerationTicket, Session, StoryboardGenerator};
use std::sync::{Mutex, MutexGuard, PoisonError};
use storyboard_core::Episode;
use storyboard_error::{GenerationError, SessionError};
use storyboard_interface::StoryboardDriver;
use tracing::{debug, instrument};

/// What became of one [`Director::generate`] call.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    /// The episode was applied to the session
    Ready {
        /// Number of shot groups in the new episode
        groups: usize,
    },
    /// The call failed; the message is also on the session
    Failed(GenerationError),
    /// A newer generation superseded this one; nothing was applied
    Superseded,
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A started generation that has not been completed yet.
///
/// Dropping it unfinished, as happens when the `generate` future is
/// cancelled, abandons the generation so the session leaves Generating.
struct InFlight<'a> {
    session: &'a Mutex<Session>,
    ticket: GenerationTicket,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn begin(session: &'a Mutex<Session>) -> Result<Self, SessionError> {
        let ticket = lock(session).begin_generation()?;
        Ok(Self {
            session,
            ticket,
            finished: false,
        })
    }

    fn complete(mut self, result: Result<Episode, GenerationError>) -> bool {
        self.finished = true;
        lock(self.session).complete_generation(&self.ticket, result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            lock(self.session).abandon_generation(&self.ticket);
        }
    }
}

/// Owns the session and drives generations against a driver.
///
/// The session lock is held only for synchronous transitions, never while
/// the provider call is awaited, so reads stay available during a generation.
/// Cancelling [`generate`](Self::generate) returns the session to input.
///
/// # Examples
///
/// ```no_run
/// use storyboard_director::{Director, GenerationOutcome, StoryboardGenerator};
/// # use storyboard_interface::StoryboardDriver;
/// # async fn run<D: StoryboardDriver>(driver: D) -> Result<(), Box<dyn std::error::Error>> {
/// let director = Director::new(StoryboardGenerator::new(driver));
/// director.load_sample();
/// if let GenerationOutcome::Ready { groups } = director.generate().await? {
///     println!("{groups} shot groups");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Director<D> {
    session: Mutex<Session>,
    generator: StoryboardGenerator<D>,
}

impl<D: StoryboardDriver> Director<D> {
    /// A director with an empty session.
    pub fn new(generator: StoryboardGenerator<D>) -> Self {
        Self::with_session(generator, Session::default())
    }

    /// A director continuing an existing session.
    pub fn with_session(generator: StoryboardGenerator<D>, session: Session) -> Self {
        Self {
            session: Mutex::new(session),
            generator,
        }
    }

    /// The generator in use.
    pub fn generator(&self) -> &StoryboardGenerator<D> {
        &self.generator
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    /// Run `f` against the session.
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.lock())
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// See [`Session::set_script`].
    pub fn set_script(&self, text: impl Into<String>) {
        self.lock().set_script(text);
    }

    /// See [`Session::load_sample`].
    pub fn load_sample(&self) {
        self.lock().load_sample();
    }

    /// See [`Session::dismiss_error`].
    pub fn dismiss_error(&self) {
        self.lock().dismiss_error();
    }

    /// See [`Session::set_character_alias`].
    ///
    /// # Errors
    ///
    /// Fails when no episode is present.
    pub fn set_character_alias(
        &self,
        original: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.lock().set_character_alias(original, alias)
    }

    /// See [`Session::set_scene_alias`].
    ///
    /// # Errors
    ///
    /// Fails when no episode is present.
    pub fn set_scene_alias(
        &self,
        original: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.lock().set_scene_alias(original, alias)
    }

    /// See [`Session::select_group`].
    ///
    /// # Errors
    ///
    /// Fails without an episode or for an unknown group.
    pub fn select_group(&self, group_id: u32) -> Result<(), SessionError> {
        self.lock().select_group(group_id)
    }

    /// See [`Session::sync_aliases`].
    pub fn sync_aliases(&self) -> Option<AliasSyncReport> {
        self.lock().sync_aliases()
    }

    /// See [`Session::reset`].
    ///
    /// # Errors
    ///
    /// Fails when no episode is present.
    pub fn reset(&self) -> Result<(), SessionError> {
        self.lock().reset()
    }

    /// Generate an episode from the current script.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] without calling the provider when the script
    /// is blank or a generation is already in flight. Provider and decoding
    /// failures are not errors here; they come back as
    /// [`GenerationOutcome::Failed`] and are recorded on the session.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> Result<GenerationOutcome, SessionError> {
        let in_flight = InFlight::begin(&self.session)?;
        let token = *in_flight.ticket.token();

        let result = self.generator.generate(in_flight.ticket.script()).await;
        let outcome = match &result {
            Ok(episode) => GenerationOutcome::Ready {
                groups: episode.groups.len(),
            },
            Err(e) => GenerationOutcome::Failed(e.clone()),
        };

        if in_flight.complete(result) {
            Ok(outcome)
        } else {
            debug!(token, "Generation superseded");
            Ok(GenerationOutcome::Superseded)
        }
    }
}
