//! Checkout route handlers.
//!
//! A single form with the customer's name. Submitting it places the order by
//! emptying the cart; there is no payment step.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{PageShell, cart_updated};
use super::cart::CartView;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{ClientHints, CspNonce};
use crate::services::checkout::{self, CheckoutOutcome, EMPTY_CART_NOTICE};
use crate::services::CartStore;

/// Checkout form data.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutForm {
    pub full_name: Option<String>,
}

/// Checkout page template.
///
/// Renders the summary and form, an empty-cart alert, or the order
/// confirmation.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub shell: PageShell,
    pub cart: CartView,
    pub notice: Option<&'static str>,
    pub confirmation: Option<String>,
}

/// Display checkout page.
#[instrument(skip(session, store, nonce))]
pub async fn show(
    session: Session,
    store: CartStore<Session>,
    hints: ClientHints,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let cart = store.read().await;

    CheckoutTemplate {
        shell: PageShell::load(&session, &store, hints, nonce).await,
        cart: CartView::from(&cart),
        notice: None,
        confirmation: None,
    }
}

/// Place the order.
///
/// An empty cart answers 422 with a blocking alert and changes nothing.
#[instrument(skip(session, store, nonce, form))]
pub async fn submit(
    session: Session,
    store: CartStore<Session>,
    hints: ClientHints,
    CspNonce(nonce): CspNonce,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let outcome = checkout::submit(&store, form.full_name.as_deref()).await?;
    let confirmation = outcome.confirmation();

    let (status, cart, notice) = match outcome {
        CheckoutOutcome::EmptyCart => (
            StatusCode::UNPROCESSABLE_ENTITY,
            CartView::from(&store.read().await),
            Some(EMPTY_CART_NOTICE),
        ),
        CheckoutOutcome::Placed { order, .. } => {
            add_breadcrumb("checkout", "Order placed", None);
            (StatusCode::OK, CartView::from(&order), None)
        }
    };
    let placed = confirmation.is_some();

    let template = CheckoutTemplate {
        shell: PageShell::load(&session, &store, hints, nonce).await,
        cart,
        notice,
        confirmation,
    };

    if placed {
        Ok((status, cart_updated(), template).into_response())
    } else {
        Ok((status, template).into_response())
    }
}
