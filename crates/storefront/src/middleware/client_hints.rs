//! User preference client hints.
//!
//! Browsers send `Sec-CH-Prefers-Reduced-Motion` and
//! `Sec-CH-Prefers-Color-Scheme` once the server has asked for them with
//! `Accept-CH` (see `security_headers`). Missing or unknown values mean
//! "no preference".

use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};

use crate::effects::Motion;

/// Reduced motion preference header.
pub const REDUCED_MOTION_HEADER: &str = "sec-ch-prefers-reduced-motion";

/// Colour scheme preference header.
pub const COLOR_SCHEME_HEADER: &str = "sec-ch-prefers-color-scheme";

/// Preferences the visitor's browser reported for this request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientHints {
    pub motion: Motion,
    /// `Some(true)` for light, `Some(false)` for dark, `None` when unreported.
    pub prefers_light: Option<bool>,
}

impl ClientHints {
    /// Read the hints from request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let motion = match hint(headers, REDUCED_MOTION_HEADER).as_deref() {
            Some("reduce") => Motion::Reduced,
            _ => Motion::Full,
        };

        let prefers_light = match hint(headers, COLOR_SCHEME_HEADER).as_deref() {
            Some("light") => Some(true),
            Some("dark") => Some(false),
            _ => None,
        };

        Self {
            motion,
            prefers_light,
        }
    }
}

/// Header value with surrounding quotes and whitespace removed, lowercased.
fn hint(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().trim_matches('"').to_ascii_lowercase())
}

impl<S> FromRequestParts<S> for ClientHints
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
