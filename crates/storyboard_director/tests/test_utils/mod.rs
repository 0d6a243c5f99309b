//! Test utilities for storyboard director tests.
//!
//! This module provides a mock driver and fixtures.

#[allow(dead_code)]
pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

/// A fifteen-group episode featuring 星绒 and 白冥 in 迷雾森林.
#[allow(dead_code)]
pub const EPISODE_JSON: &str = include_str!("../fixtures/episode.json");
