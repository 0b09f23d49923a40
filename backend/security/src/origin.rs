/// Origin trust checks for browser-only endpoints.
///
/// A request is admitted when it looks like it came from a web page and,
/// if it declares an `Origin`, that origin is on the trust list. Pattern
/// matching is kept separate from header handling so it can be tested on
/// its own.
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Value of `X-Requested-With` set by browser XHR clients.
pub const XHR_SENTINEL: &str = "XMLHttpRequest";

/// The headers that decide admission, already extracted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    pub origin: Option<String>,
    pub referer: Option<String>,
    pub requested_with: Option<String>,
    /// Only used for audit logging.
    pub user_agent: Option<String>,
}

impl RequestOrigin {
    /// Whether any header marks this as a browser request.
    ///
    /// Either a web `Origin` or a web `Referer` on its own is enough.
    pub fn is_web_request(&self) -> bool {
        let has_origin = self.origin.as_deref().is_some_and(is_http_url);
        let has_referer = self.referer.as_deref().is_some_and(is_http_url);
        let is_xhr = self.requested_with.as_deref() == Some(XHR_SENTINEL);

        is_xhr || has_origin || has_referer
    }

    /// The declared `Origin`, treating an empty header as absent.
    pub fn declared_origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|o| !o.is_empty())
    }
}

/// Whether a header value is an `http://` or `https://` URL.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// A compiled trusted-origin entry.
#[derive(Debug, Clone)]
pub enum OriginPattern {
    Exact(String),
    /// `*` matches any substring; everything else is literal; anchored.
    Wildcard(Regex),
}

impl OriginPattern {
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        if !pattern.contains('*') {
            return Ok(OriginPattern::Exact(pattern.to_string()));
        }
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        Ok(OriginPattern::Wildcard(Regex::new(&format!("^{body}$"))?))
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            OriginPattern::Exact(expected) => origin == expected,
            OriginPattern::Wildcard(re) => re.is_match(origin),
        }
    }
}

/// Match a single origin against a single pattern.
pub fn origin_matches(origin: &str, pattern: &str) -> bool {
    OriginPattern::parse(pattern)
        .map(|p| p.matches(origin))
        .unwrap_or(false)
}

/// Why a request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("This API can only be called from a web browser")]
    NotWebRequest,
    #[error("Origin not trusted")]
    UntrustedOrigin,
}

/// The trust list, compiled once from configuration.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    patterns: Vec<OriginPattern>,
}

impl OriginPolicy {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| OriginPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_trusted(&self, origin: &str) -> bool {
        !origin.is_empty() && self.patterns.iter().any(|p| p.matches(origin))
    }

    /// Decide admission for one request.
    ///
    /// A request with a web `Referer` but no `Origin` is admitted without
    /// checking the referer against the trust list.
    pub fn check(&self, request: &RequestOrigin) -> Result<(), Rejection> {
        if !request.is_web_request() {
            return Err(Rejection::NotWebRequest);
        }
        if let Some(origin) = request.declared_origin() {
            if !self.is_trusted(origin) {
                return Err(Rejection::UntrustedOrigin);
            }
            debug!(origin, "Origin trusted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> OriginPolicy {
        OriginPolicy::new(["http://localhost:*", "http://127.0.0.1:*", "https://*.workers.dev"])
            .unwrap()
    }

    fn with_origin(origin: &str) -> RequestOrigin {
        RequestOrigin {
            origin: Some(origin.into()),
            ..Default::default()
        }
    }

    #[test]
    fn wildcard_subdomain_matching() {
        let pattern = "https://*.workers.dev";
        assert!(origin_matches("https://foo.workers.dev", pattern));
        assert!(origin_matches("https://a.b.workers.dev", pattern));
        assert!(!origin_matches("https://foo.workers.devx", pattern));
        assert!(!origin_matches("http://foo.workers.dev", pattern));
        assert!(!origin_matches("https://fooworkers.dev", pattern));
    }

    #[test]
    fn wildcard_port_matching() {
        assert!(origin_matches("http://localhost:3000", "http://localhost:*"));
        assert!(origin_matches("http://localhost:", "http://localhost:*"));
        assert!(!origin_matches("http://localhost", "http://localhost:*"));
        assert!(!origin_matches("https://localhost:3000", "http://localhost:*"));
    }

    #[test]
    fn dots_are_literal() {
        assert!(!origin_matches("http://127a0b0c1:8080", "http://127.0.0.1:*"));
        assert!(origin_matches("http://127.0.0.1:8080", "http://127.0.0.1:*"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(origin_matches("https://a+b.example.com", "https://a+b.*"));
        assert!(!origin_matches("https://aab.example.com", "https://a+b.*"));
    }

    #[test]
    fn exact_patterns_need_equality() {
        let pattern = "https://geo.example.com";
        assert!(origin_matches("https://geo.example.com", pattern));
        assert!(!origin_matches("https://geo.example.com:8443", pattern));
        assert!(!origin_matches("https://geo.example.co", pattern));
    }

    #[test]
    fn no_headers_rejected() {
        let request = RequestOrigin::default();
        assert!(!request.is_web_request());
        assert_eq!(default_policy().check(&request), Err(Rejection::NotWebRequest));
    }

    #[test]
    fn xhr_header_alone_admitted() {
        let request = RequestOrigin {
            requested_with: Some(XHR_SENTINEL.into()),
            ..Default::default()
        };
        assert_eq!(default_policy().check(&request), Ok(()));
    }

    #[test]
    fn xhr_header_still_subject_to_origin_trust() {
        let request = RequestOrigin {
            origin: Some("https://evil.example".into()),
            requested_with: Some(XHR_SENTINEL.into()),
            ..Default::default()
        };
        assert_eq!(default_policy().check(&request), Err(Rejection::UntrustedOrigin));
    }

    #[test]
    fn non_http_origin_is_not_web() {
        let request = with_origin("null");
        assert_eq!(default_policy().check(&request), Err(Rejection::NotWebRequest));
    }

    #[test]
    fn trusted_origin_admitted() {
        assert_eq!(default_policy().check(&with_origin("http://localhost:3000")), Ok(()));
        assert_eq!(default_policy().check(&with_origin("https://img.workers.dev")), Ok(()));
    }

    #[test]
    fn untrusted_origin_rejected() {
        assert_eq!(
            default_policy().check(&with_origin("https://example.com")),
            Err(Rejection::UntrustedOrigin)
        );
    }

    #[test]
    fn referer_only_admitted_without_trust_check() {
        let request = RequestOrigin {
            referer: Some("https://anywhere.example/page".into()),
            ..Default::default()
        };
        assert_eq!(default_policy().check(&request), Ok(()));
    }

    #[test]
    fn non_http_referer_is_not_web() {
        let request = RequestOrigin {
            referer: Some("file:///tmp/index.html".into()),
            ..Default::default()
        };
        assert_eq!(default_policy().check(&request), Err(Rejection::NotWebRequest));
    }

    #[test]
    fn operator_entries_extend_defaults() {
        let policy = OriginPolicy::new([
            "http://localhost:*",
            "https://geo.example.com",
            "https://*.pages.dev",
        ])
        .unwrap();
        assert!(policy.is_trusted("https://geo.example.com"));
        assert!(policy.is_trusted("https://preview.pages.dev"));
        assert!(!policy.is_trusted(""));
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            Rejection::NotWebRequest.to_string(),
            "This API can only be called from a web browser"
        );
        assert_eq!(Rejection::UntrustedOrigin.to_string(), "Origin not trusted");
    }
}
