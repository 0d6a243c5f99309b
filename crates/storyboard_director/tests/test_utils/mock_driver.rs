//! Mock driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyboard_core::{GenerateRequest, GenerateResponse, Output};
use storyboard_error::{
    GeminiError, GeminiErrorKind, HttpError, HttpErrorKind, StoryboardError, StoryboardResult,
};
use storyboard_interface::StoryboardDriver;
use tokio::sync::Semaphore;

/// A single scripted response.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Return this text as the model output
    Success(String),
    /// Fail with a provider error
    Error(GeminiErrorKind),
    /// Fail before reaching the provider
    Transport(String),
}

/// Mock driver for testing.
///
/// Plays back a sequence of responses, repeating the last one once the
/// sequence is exhausted. With a gate, every call waits for a permit before
/// answering, which holds it in flight for as long as the test needs.
#[derive(Debug, Clone)]
pub struct MockDriver {
    responses: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// A driver that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// A driver that always fails with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// A driver that plays back `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Hold every call until a permit is added to the returned semaphore.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self, request: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        let current = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count - 1
        };
        self.requests.lock().unwrap().push(request.clone());

        let response = self
            .responses
            .get(current)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or(MockResponse::Error(GeminiErrorKind::EmptyCandidates));

        match response {
            MockResponse::Success(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
                usage: None,
            }),
            MockResponse::Error(kind) => Err(StoryboardError::from(GeminiError::new(kind))),
            MockResponse::Transport(message) => Err(StoryboardError::from(HttpError::new(HttpErrorKind::Send(message)))),
        }
    }
}

#[async_trait]
impl StoryboardDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        let response = self.next_response(req);
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.unwrap();
            permit.forget();
        }
        response
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-director"
    }
}
