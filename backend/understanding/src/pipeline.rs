//! Two-stage analysis pipeline: recognition, then command generation.

use std::sync::Arc;

use geoforge_config::{AppConfig, ProviderConfig};
use geoforge_core::{AnalysisResult, ChatProvider, GeoError};
use geoforge_providers::CompatProvider;
use tracing::{debug, info};

use crate::codegen::CommandGenerationStage;
use crate::ocr::RecognitionStage;

pub struct AnalysisPipeline {
    recognition: RecognitionStage,
    generation: CommandGenerationStage,
}

impl AnalysisPipeline {
    pub fn new(recognition: RecognitionStage, generation: CommandGenerationStage) -> Self {
        Self {
            recognition,
            generation,
        }
    }

    /// Both stages share one provider, each with its own model.
    pub fn with_provider(provider: Arc<dyn ChatProvider>, settings: &ProviderConfig) -> Self {
        Self::new(
            RecognitionStage::new(Some(provider.clone()), &settings.ocr_model),
            CommandGenerationStage::new(Some(provider), &settings.codegen_model),
        )
    }

    pub fn demo() -> Self {
        Self::new(RecognitionStage::demo(), CommandGenerationStage::demo())
    }

    /// Live pipeline when a credential is configured and test mode is off,
    /// demo pipeline otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.live_api_key() {
            Some(key) => {
                let provider = Arc::new(CompatProvider::new(key, &config.provider.base_url));
                Self::with_provider(provider, &config.provider)
            }
            None => Self::demo(),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.recognition.is_demo() && self.generation.is_demo()
    }

    /// Run recognition, then feed its text to generation.
    ///
    /// The first failing stage aborts the run; there is no partial result.
    pub async fn analyze(&self, encoded_image: &str, mime_type: &str) -> Result<AnalysisResult, GeoError> {
        info!("Step 1: recognizing image content");
        let ocr_result = self.recognition.recognize(encoded_image, mime_type).await?;
        debug!(ocr_result = %ocr_result, "Recognition result");

        info!("Step 2: generating GeoGebra commands");
        let commands = self.generation.generate(&ocr_result).await?;
        debug!(commands = %commands, "Generated commands");

        Ok(AnalysisResult {
            ocr_result,
            commands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::DEMO_COMMANDS;
    use crate::ocr::DEMO_OCR_RESULT;
    use geoforge_core::UserContent;
    use geoforge_providers::MockProvider;

    #[tokio::test]
    async fn demo_pipeline_returns_fixed_results() {
        let pipeline = AnalysisPipeline::demo();
        let result = pipeline.analyze("AAAA", "image/png").await.unwrap();
        assert_eq!(result.ocr_result, DEMO_OCR_RESULT);
        assert_eq!(result.commands, DEMO_COMMANDS);
    }

    #[test]
    fn config_without_key_builds_demo_pipeline() {
        assert!(AnalysisPipeline::from_config(&AppConfig::default()).is_demo());
        let test_mode = AppConfig {
            ai_api_key: Some("sk-live".into()),
            test_mode: true,
            ..Default::default()
        };
        assert!(AnalysisPipeline::from_config(&test_mode).is_demo());
    }

    #[test]
    fn config_with_key_builds_live_pipeline() {
        let config = AppConfig {
            ai_api_key: Some("sk-live".into()),
            ..Default::default()
        };
        assert!(!AnalysisPipeline::from_config(&config).is_demo());
    }

    #[tokio::test]
    async fn recognition_output_feeds_generation() {
        let ocr = Arc::new(MockProvider::new("ocr").with_response("三角形ABC"));
        let generator = Arc::new(MockProvider::new("gen").with_response("A = Point({0, 0})"));
        let pipeline = AnalysisPipeline::new(
            RecognitionStage::new(Some(ocr.clone()), "vl"),
            CommandGenerationStage::new(Some(generator.clone()), "r1"),
        );

        let result = pipeline.analyze("QUJD", "image/png").await.unwrap();
        assert_eq!(result.ocr_result, "三角形ABC");
        assert_eq!(result.commands, "A = Point({0, 0})");
        assert_eq!(generator.requests()[0].user, UserContent::Text("三角形ABC".into()));
    }

    #[tokio::test]
    async fn recognition_failure_skips_generation() {
        let ocr = Arc::new(MockProvider::new("ocr").failing("timeout"));
        let generator = Arc::new(MockProvider::new("gen").with_response("A = Point({0, 0})"));
        let pipeline = AnalysisPipeline::new(
            RecognitionStage::new(Some(ocr), "vl"),
            CommandGenerationStage::new(Some(generator.clone()), "r1"),
        );

        let err = pipeline.analyze("QUJD", "image/png").await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn generation_failure_aborts_without_partial_result() {
        let ocr = Arc::new(MockProvider::new("ocr").with_response("text"));
        let generator = Arc::new(MockProvider::new("gen"));
        let pipeline = AnalysisPipeline::new(
            RecognitionStage::new(Some(ocr), "vl"),
            CommandGenerationStage::new(Some(generator), "r1"),
        );

        let err = pipeline.analyze("QUJD", "image/png").await.unwrap_err();
        assert!(matches!(err, GeoError::EmptyResponse(_)));
    }
}
