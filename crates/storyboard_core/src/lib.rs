//! Core data types for the storyboard workspace.
//!
//! This crate holds the episode data model the model is asked to produce,
//! the response schema that constrains it, soft contract checks over a
//! decoded episode, and the provider-neutral request types every driver
//! accepts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contract;
mod dialogue;
mod episode;
mod grid;
mod message;
mod output;
mod request;
mod role;
mod schema;

pub use contract::{ContractViolation, GROUP_SECONDS, MAX_GROUPS, MIN_GROUPS, contract_report};
pub use dialogue::{Dialogue, NO_DIALOGUE};
pub use episode::{Episode, Hook, ShotGroup};
pub use grid::{Grid, GridRole};
pub use message::Message;
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, ResponseFormat, TokenUsage,
};
pub use role::Role;
pub use schema::{
    EPISODE_REQUIRED, GRID_REQUIRED, HOOK_REQUIRED, SHOT_GROUP_REQUIRED, episode_schema,
    grid_schema, hook_schema, shot_group_schema,
};
