use thiserror::Error;

/// Top-level error type for the geoforge analysis service.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("no image provided")]
    MissingImage,

    #[error("invalid form data: {0}")]
    InvalidForm(String),

    /// The provider answered, but without any usable text.
    #[error("{0}")]
    EmptyResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Provider failures pass through with their original message.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl GeoError {
    /// Whether this error is caused by the caller rather than by processing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GeoError::MethodNotAllowed | GeoError::AccessDenied(_) | GeoError::MissingImage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_their_message() {
        let err: GeoError = anyhow::anyhow!("provider returned 502 Bad Gateway").into();
        assert_eq!(err.to_string(), "provider returned 502 Bad Gateway");
        assert!(!err.is_client_error());
    }

    #[test]
    fn empty_response_message_is_verbatim() {
        let err = GeoError::EmptyResponse("OCR AI returned empty response".into());
        assert_eq!(err.to_string(), "OCR AI returned empty response");
    }

    #[test]
    fn access_denied_is_client_error() {
        assert!(GeoError::AccessDenied("Origin not trusted".into()).is_client_error());
        assert!(GeoError::MissingImage.is_client_error());
    }
}
