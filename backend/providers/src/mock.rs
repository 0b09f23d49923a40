use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use geoforge_core::{ChatProvider, ChatReply, ChatRequest};

/// A mock provider that returns canned replies and records every request.
pub struct MockProvider {
    name: String,
    content: Option<String>,
    reasoning_content: Option<String>,
    failure: Option<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            reasoning_content: None,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning_content = Some(reasoning.into());
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, req: &ChatRequest) -> Result<ChatReply> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(ChatReply {
            content: self.content.clone(),
            reasoning_content: self.reasoning_content.clone(),
            provider: self.name.clone(),
            model: req.model.clone(),
            latency_ms: 0,
        })
    }
}
