//! Recognition stage.
//!
//! Sends the uploaded image to a vision model and returns its transcription
//! of the problem, unprocessed.

use std::sync::Arc;

use geoforge_core::{ChatProvider, ChatRequest, GeoError};
use tracing::{debug, info, warn};

use crate::encode::data_uri;
use crate::prompts::RECOGNITION_PROMPT;

/// Fixed recognition output used in demo mode.
pub const DEMO_OCR_RESULT: &str = "题目原文：
如图，在三角形ABC中，AB = 4，BC = 3，角ABC = 90°。点D是BC的中点，求AD的长度。

图形补充说明：
图中包含三角形ABC和点D，其中D位于边BC上。";

pub struct RecognitionStage {
    /// `None` means demo mode.
    provider: Option<Arc<dyn ChatProvider>>,
    model: String,
}

impl RecognitionStage {
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

    /// Transcribe the problem shown in a base64-encoded image.
    pub async fn recognize(&self, encoded_image: &str, mime_type: &str) -> Result<String, GeoError> {
        let Some(provider) = &self.provider else {
            warn!("No AI credential configured or test mode enabled, returning demo recognition result");
            return Ok(DEMO_OCR_RESULT.to_string());
        };

        info!(model = %self.model, provider = provider.name(), mime_type, "Recognizing image content");
        let request = ChatRequest::image(
            &self.model,
            RECOGNITION_PROMPT,
            data_uri(mime_type, encoded_image),
        );
        let reply = provider.complete(&request).await?;
        debug!(latency_ms = reply.latency_ms, "Recognition reply received");

        reply
            .primary_text()
            .map(str::to_string)
            .ok_or_else(|| GeoError::EmptyResponse("OCR AI returned empty response".into()))
    }
}
