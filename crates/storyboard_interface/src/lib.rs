//! Trait definitions for storyboard model backends.
//!
//! The director never talks to a provider directly. It hands a
//! provider-neutral [`GenerateRequest`] to a [`StoryboardDriver`] and reads
//! back a [`GenerateResponse`], which keeps the network out of tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use std::sync::Arc;
use storyboard_core::{GenerateRequest, GenerateResponse};
use storyboard_error::StoryboardResult;

/// Core trait that every model backend implements.
#[async_trait]
pub trait StoryboardDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-3-pro-preview").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: StoryboardDriver + ?Sized> StoryboardDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
