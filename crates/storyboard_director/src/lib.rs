//! Storyboard direction: from script to episode, and the session around it.
//!
//! - [`DirectorPrompt`] composes the role instruction and per-call text.
//! - [`StoryboardGenerator`] issues the single schema-constrained call and
//!   decodes the [`Episode`](storyboard_core::Episode).
//! - [`Session`] holds script, episode, aliases and navigation as one
//!   explicit state value; [`Director`] drives it asynchronously with
//!   single-flight generation.
//! - [`render_group`] and [`render_episode`] produce the production summary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aliases;
mod controller;
mod extraction;
mod generator;
mod prompt;
mod script;
mod session;
mod summary;

pub use aliases::{AliasMap, AliasSyncReport};
pub use controller::{Director, GenerationOutcome};
pub use extraction::extract_json;
pub use generator::{DEFAULT_THINKING_BUDGET, StoryboardGenerator, classify, decode_episode};
pub use prompt::{DirectorPrompt, ROLE_PROMPT, USER_PREAMBLE};
pub use script::{SAMPLE_SCRIPT, Script};
pub use session::{FALLBACK_ERROR_MESSAGE, GenerationTicket, Session, SessionPhase};
pub use summary::{render_episode, render_group};
