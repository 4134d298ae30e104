//! Theme toggle handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{AppendHeaders, IntoResponse};
use cottonfront_core::Theme;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::ClientHints;
use crate::services::theme::toggle_theme;

/// Theme toggle button fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/theme_toggle.html")]
pub struct ThemeToggleTemplate {
    pub theme: Theme,
}

/// Flip the visitor's theme and persist it (HTMX).
///
/// Responds with the refreshed toggle button and a `theme-changed` trigger
/// carrying the new value for the page script to apply.
#[instrument(skip(session))]
pub async fn toggle(session: Session, hints: ClientHints) -> Result<impl IntoResponse> {
    let theme = toggle_theme(&session, hints.prefers_light).await?;
    tracing::debug!(%theme, "theme toggled");

    let trigger = serde_json::json!({ "theme-changed": theme.as_str() }).to_string();

    Ok((
        AppendHeaders([("HX-Trigger", trigger)]),
        ThemeToggleTemplate { theme },
    ))
}
