//! Storyboard - anime storyboards from short-drama scripts
//!
//! A script goes in; one schema-constrained Gemini call comes back as an
//! [`Episode`]: 15 to 28 shot groups of ten seconds each, every group split
//! into five fixed beats, plus a closing suspense hook. A [`Session`] keeps
//! the episode together with display-name overrides for characters and
//! scenes, and renders the production summary handed to image and video
//! generation downstream.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyboard::{Director, GeminiClient, GenerationOutcome, StoryboardConfig, StoryboardGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryboardConfig::load()?;
//!     let client = GeminiClient::new(config.gemini())?;
//!     let director = Director::new(StoryboardGenerator::new(client));
//!
//!     director.load_sample();
//!     if let GenerationOutcome::Ready { .. } = director.generate().await? {
//!         director.set_character_alias("星绒", "小绒")?;
//!         println!("{}", director.snapshot().summary().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Episode data model, response schema, request types
//! - `storyboard_interface` - `StoryboardDriver` trait definition
//! - `storyboard_models` - Gemini client and layered configuration
//! - `storyboard_director` - Prompt, generation call, session state, summary
//!
//! This crate (`storyboard`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use storyboard_core::*;
pub use storyboard_director::*;
pub use storyboard_error::*;
pub use storyboard_interface::*;
pub use storyboard_models::*;
pub use telemetry::init_tracing;
