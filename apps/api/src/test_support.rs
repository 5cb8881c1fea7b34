//! Stub reviewer shared by handler and script tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm_client::{ContentBlock, DocumentReviewer, LlmError, LlmResponse};

/// Answers with a fixed text or a fixed API failure and counts invocations.
pub struct StubReviewer {
    calls: AtomicUsize,
    outcome: Result<String, (u16, String)>,
}

impl StubReviewer {
    pub fn replying(text: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Err((status, message.to_string())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentReviewer for StubReviewer {
    async fn review(&self, _document_base64: &str) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(LlmResponse {
                content: vec![ContentBlock {
                    block_type: Some("text".to_string()),
                    text: Some(text.clone()),
                }],
                usage: None,
            }),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
