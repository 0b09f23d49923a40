//! CLI Analyze Command
//!
//! Runs the same two-stage pipeline as the HTTP endpoint on a local file.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use geoforge_config::AppConfig;
use geoforge_understanding::{detect_mime_type, encode_base64, resolve_mime, AnalysisPipeline};

pub async fn run(config: &AppConfig, path: &Path, mime: Option<&str>) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;

    let mime_type = match mime {
        Some(m) => m.to_string(),
        None => match detect_mime_type(path) {
            "application/octet-stream" => resolve_mime(None, &bytes),
            detected => detected.to_string(),
        },
    };
    info!(path = %path.display(), bytes = bytes.len(), %mime_type, "Analyzing local image");

    let pipeline = AnalysisPipeline::from_config(config);
    let result = pipeline.analyze(&encode_base64(&bytes), &mime_type).await?;

    let output = json!({
        "success": true,
        "ocrResult": result.ocr_result,
        "commands": result.commands,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
