//! Quick view route handlers.
//!
//! The modal is a fragment swapped into `#quick-view`. Which product it shows
//! is remembered in the session so the confirm button needs no payload.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cottonfront_core::{CatalogEntry, Size};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::cart::{PointerForm, added_response};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::ClientHints;
use crate::services::{CartStore, QuickView};
use crate::state::AppState;

/// One size button in the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Size buttons with `selected` marked.
#[must_use]
pub fn size_options(selected: Size) -> Vec<SizeOption> {
    Size::ALL
        .iter()
        .map(|size| SizeOption {
            label: size.as_str(),
            selected: *size == selected,
        })
        .collect()
}

/// Size selection form data.
#[derive(Debug, Deserialize)]
pub struct SizeForm {
    pub size: String,
}

/// Quick view fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate<'a> {
    pub product: &'a CatalogEntry,
    pub sizes: Vec<SizeOption>,
}

/// Open the quick view for `key` (HTMX).
///
/// Unknown keys leave any open modal untouched and return 204 so HTMX skips
/// the swap.
#[instrument(skip(state, session))]
pub async fn quick_view(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<Response> {
    let quick_view = QuickView::new(&session, state.catalog());

    let Some(product) = quick_view.open(&key).await? else {
        tracing::debug!(%key, "quick view for unknown product ignored");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    Ok(QuickViewTemplate {
        product,
        sizes: size_options(Size::default()),
    }
    .into_response())
}

/// Record the picked size and re-render the modal (HTMX).
#[instrument(skip(state, session))]
pub async fn select_size(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SizeForm>,
) -> Result<Response> {
    let size = Size::parse(&form.size).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let quick_view = QuickView::new(&session, state.catalog());

    let selection = quick_view.select_size(size).await?;
    let Some(product) = selection.current(state.catalog()) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    Ok(QuickViewTemplate {
        product,
        sizes: size_options(selection.size),
    }
    .into_response())
}

/// Add the open product to the cart and close the modal (HTMX).
///
/// With nothing open this is a no-op answered with 204.
#[instrument(skip(state, session, store, hints))]
pub async fn confirm_add(
    State(state): State<AppState>,
    session: Session,
    store: CartStore<Session>,
    hints: ClientHints,
    Form(pointer): Form<PointerForm>,
) -> Response {
    let quick_view = QuickView::new(&session, state.catalog());

    // Resolve first so a failed add can still name the product in its toast.
    let Some(entry) = quick_view.selection().await.current(state.catalog()) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let result = match quick_view.confirm_add(&store).await {
        Ok(_) => Ok(store.read().await),
        Err(e) => Err(e),
    };

    added_response(result, entry, hints.motion, pointer, true)
}

/// Close the modal (HTMX). The empty body clears `#quick-view`.
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<&'static str> {
    QuickView::new(&session, state.catalog()).close().await?;
    Ok("")
}
