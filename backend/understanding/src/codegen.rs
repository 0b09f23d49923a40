//! Command-generation stage.
//!
//! Turns the recognised problem text into GeoGebra construction commands
//! drawn from the allow-listed vocabulary, then filters the reply down to
//! command lines.

use std::sync::Arc;

use geoforge_core::{ChatProvider, ChatRequest, GeoError};
use tracing::{debug, error, info, warn};

use crate::commands::filter_commands;
use crate::prompts::CODEGEN_PROMPT;

/// Fixed command sequence used in demo mode.
pub const DEMO_COMMANDS: &str = "B = Point({0, 0})
A = Point({0, 4})
C = Point({3, 0})
D = Midpoint(B, C)
Segment(A, B)
Segment(B, C)
Segment(C, A)
Segment(A, D)
Polygon(A, B, C)";

pub struct CommandGenerationStage {
    /// `None` means demo mode.
    provider: Option<Arc<dyn ChatProvider>>,
    model: String,
}

impl CommandGenerationStage {
    pub fn new(provider: Option<Arc<dyn ChatProvider>>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn demo() -> Self {
        Self::new(None, String::new())
    }

    pub fn is_demo(&self) -> bool {
        self.provider.is_none()
    }

    /// Generate filtered commands for a problem description.
    pub async fn generate(&self, problem_description: &str) -> Result<String, GeoError> {
        let Some(provider) = &self.provider else {
            warn!("No AI credential configured or test mode enabled, returning demo commands");
            return Ok(DEMO_COMMANDS.to_string());
        };

        info!(model = %self.model, provider = provider.name(), "Generating GeoGebra commands");
        let request = ChatRequest::text(&self.model, CODEGEN_PROMPT, problem_description);
        let reply = provider.complete(&request).await?;
        debug!(latency_ms = reply.latency_ms, "Generation reply received");

        // Reasoning models sometimes leave `content` empty
        let content = match (reply.primary_text(), reply.reasoning_text()) {
            (Some(content), _) => content,
            (None, Some(reasoning)) => {
                info!("Using reasoning_content as fallback");
                reasoning
            }
            (None, None) => {
                error!(provider = %reply.provider, model = %reply.model, "Generation reply had no content");
                return Err(GeoError::EmptyResponse(
                    "Codegen AI returned empty response".into(),
                ));
            }
        };

        Ok(filter_commands(content))
    }
}
