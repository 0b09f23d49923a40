//! `/api/analyze` handler.
//!
//! Checks run cheapest first: preflight, method, origin trust, then the
//! multipart upload. The pipeline is only reached once all of them pass.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap, Method},
    Json,
};
use geoforge_core::{AnalysisResult, GeoError};
use geoforge_security::{Rejection, RequestOrigin};
use geoforge_understanding::{encode_base64, resolve_mime};
use logging::{AuditEvent, AuditLogger};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::GatewayState;

/// Name of the multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// An uploaded image, read fully into memory.
struct Upload {
    bytes: Vec<u8>,
    mime_type: String,
}

/// Handler for every method on `/api/analyze`.
pub async fn analyze(
    State(state): State<GatewayState>,
    request: Request,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("analyze", %request_id);
    handle(state, request, &request_id).instrument(span).await
}

async fn handle(
    state: GatewayState,
    request: Request,
    request_id: &str,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let origin = request_origin(request.headers());

    if request.method() == Method::OPTIONS {
        AuditLogger::log_rejection(request_id, AuditEvent::Preflight { origin: origin.origin.clone() });
        return Err(ApiError::Preflight);
    }
    if request.method() != Method::POST {
        return Err(GeoError::MethodNotAllowed.into());
    }

    if let Err(rejection) = state.origin_policy.check(&origin) {
        AuditLogger::log_rejection(request_id, audit_event(&rejection, &origin));
        return Err(GeoError::AccessDenied(rejection.to_string()).into());
    }

    let upload = read_image(request, &state).await?;
    info!(bytes = upload.bytes.len(), mime_type = %upload.mime_type, "Image received");

    let encoded = encode_base64(&upload.bytes);
    let result = state.pipeline.analyze(&encoded, &upload.mime_type).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}

/// Pull the admission headers out of a request.
pub fn request_origin(headers: &HeaderMap) -> RequestOrigin {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    RequestOrigin {
        origin: get(header::ORIGIN.as_str()),
        referer: get(header::REFERER.as_str()),
        requested_with: get("x-requested-with"),
        user_agent: get(header::USER_AGENT.as_str()),
    }
}

fn audit_event(rejection: &Rejection, origin: &RequestOrigin) -> AuditEvent {
    match rejection {
        Rejection::NotWebRequest => AuditEvent::NonWebRequest {
            origin: origin.origin.clone(),
            referer: origin.referer.clone(),
            user_agent: origin.user_agent.clone(),
        },
        Rejection::UntrustedOrigin => AuditEvent::UntrustedOrigin {
            origin: origin.origin.clone().unwrap_or_default(),
        },
    }
}

/// Read the first `image` field of the multipart body.
async fn read_image(request: Request, state: &GatewayState) -> Result<Upload, GeoError> {
    let mut multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| GeoError::InvalidForm(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GeoError::InvalidForm(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let declared = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GeoError::InvalidForm(e.body_text()))?;
        let mime_type = resolve_mime(declared.as_deref(), &bytes);
        return Ok(Upload {
            bytes: bytes.to_vec(),
            mime_type,
        });
    }

    Err(GeoError::MissingImage)
}
