use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use geoforge_core::{ChatProvider, ChatReply, ChatRequest, UserContent};

/// Provider for any OpenAI-compatible `/chat/completions` endpoint
/// (DashScope compatible mode by default).
pub struct CompatProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CompatProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<CompletionMessage>,
}

#[derive(Serialize)]
struct CompletionMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
    reasoning_content: Option<String>,
}

fn build_body(request: &ChatRequest) -> CompletionRequest {
    let user = match &request.user {
        UserContent::Text(text) => MessageContent::Text(text.clone()),
        UserContent::ImageUrl(url) => MessageContent::Parts(vec![ContentPart::ImageUrl {
            image_url: ImageUrl { url: url.clone() },
        }]),
    };

    CompletionRequest {
        model: request.model.clone(),
        messages: vec![
            CompletionMessage {
                role: "system",
                content: MessageContent::Text(request.system_prompt.clone()),
            },
            CompletionMessage {
                role: "user",
                content: user,
            },
        ],
    }
}

fn first_message(response: CompletionResponse) -> Option<ReplyMessage> {
    response.choices.into_iter().next().and_then(|c| c.message)
}

#[async_trait]
impl ChatProvider for CompatProvider {
    fn name(&self) -> &str {
        "compat"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply> {
        let start = Instant::now();
        let body = build_body(request);

        debug!(model = %request.model, endpoint = %self.endpoint(), "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Chat completion HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Provider returned {}: {}", status, error_body);
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        let latency_ms = start.elapsed().as_millis() as u64;
        debug!(model = %request.model, latency_ms, "Chat completion finished");

        let message = first_message(parsed);
        Ok(ChatReply {
            content: message.as_ref().and_then(|m| m.content.clone()),
            reasoning_content: message.and_then(|m| m.reasoning_content),
            provider: self.name().to_string(),
            model: request.model.clone(),
            latency_ms,
        })
    }
}
