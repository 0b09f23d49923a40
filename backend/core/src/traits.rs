use anyhow::Result;
use async_trait::async_trait;

/// Trait for chat-completion providers used by the analysis stages.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name (e.g., "dashscope", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the raw reply.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply>;
}

/// User-turn payload of a chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserContent {
    /// Plain text prompt.
    Text(String),
    /// A single image reference, usually a `data:` URI.
    ImageUrl(String),
}

/// Request to a chat provider: one system prompt plus one user turn.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    pub user: UserContent,
}

impl ChatRequest {
    pub fn text(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user: UserContent::Text(text.into()),
        }
    }

    pub fn image(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user: UserContent::ImageUrl(url.into()),
        }
    }
}

/// Reply from a chat provider.
///
/// Reasoning models may leave `content` empty and put the answer into
/// `reasoning_content`; callers decide which field to trust.
#[derive(Debug, Clone, Default)]
pub struct ChatReply {
    pub content: Option<String>,
    pub reasoning_content: Option<String>,
    pub provider: String,
    pub model: String,
    pub latency_ms: u64,
}

impl ChatReply {
    /// Primary content, treating an empty string as absent.
    pub fn primary_text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn reasoning_text(&self) -> Option<&str> {
        self.reasoning_content.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_counts_as_absent() {
        let reply = ChatReply {
            content: Some(String::new()),
            reasoning_content: Some("A = Point({0, 0})".into()),
            ..Default::default()
        };
        assert_eq!(reply.primary_text(), None);
        assert_eq!(reply.reasoning_text(), Some("A = Point({0, 0})"));
    }

    #[test]
    fn image_request_carries_url() {
        let req = ChatRequest::image("vl", "sys", "data:image/png;base64,AAAA");
        assert_eq!(req.user, UserContent::ImageUrl("data:image/png;base64,AAAA".into()));
    }
}
