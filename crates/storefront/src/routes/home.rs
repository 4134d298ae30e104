//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use cottonfront_core::CatalogEntry;
use tower_sessions::Session;
use tracing::instrument;

use super::PageShell;
use crate::effects::{GLASS_REVEAL_THRESHOLD, RevealChar, SCROLL_REVEAL_THRESHOLD, text_reveal};
use crate::filters;
use crate::middleware::{ClientHints, CspNonce};
use crate::services::CartStore;
use crate::state::AppState;

/// Hero heading revealed one character at a time.
pub const HERO_HEADING: &str = "Wear Your Story";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub shell: PageShell,
    pub products: &'a [CatalogEntry],
    pub heading: &'static str,
    /// Empty under reduced motion; the heading then renders as plain text.
    pub heading_chars: Vec<RevealChar>,
    pub scroll_reveal_threshold: f64,
    pub glass_reveal_threshold: f64,
}

/// Display the home page with the catalog grid.
#[instrument(skip(state, session, store, nonce))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    store: CartStore<Session>,
    hints: ClientHints,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let shell = PageShell::load(&session, &store, hints, nonce).await;

    HomeTemplate {
        shell,
        products: state.catalog().entries(),
        heading: HERO_HEADING,
        heading_chars: text_reveal(hints.motion, HERO_HEADING),
        scroll_reveal_threshold: SCROLL_REVEAL_THRESHOLD,
        glass_reveal_threshold: GLASS_REVEAL_THRESHOLD,
    }
    .into_response()
}
