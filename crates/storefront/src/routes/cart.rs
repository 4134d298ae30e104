//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session under `cf_cart_items`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cottonfront_core::{Cart, CatalogEntry, LineItem};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{PageShell, cart_updated};
use crate::effects::{Motion, PARTICLE_LIFETIME_MS, Particle, particle_burst};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{ClientHints, CspNonce};
use crate::models::Toast;
use crate::services::{CartError, CartStore};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_price: u64,
    pub image: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: u64,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: item.price.get(),
            quantity: item.quantity,
            line_price: item.line_total().get(),
            image: item.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.total().get(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Pointer position of the click that triggered an add, for the particle
/// burst. Missing coordinates anchor the burst at the page origin.
#[derive(Debug, Default, Deserialize, Clone, Copy)]
pub struct PointerForm {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub key: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AddToCartForm {
    const fn pointer(&self) -> PointerForm {
        PointerForm {
            x: self.x,
            y: self.y,
        }
    }
}

/// Change quantity form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub name: String,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub name: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: PageShell,
    pub cart: CartView,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart page items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Checkout summary lines fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_lines.html")]
pub struct CheckoutLinesTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Response to a successful add: count badge plus out-of-band toast and
/// particle burst.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub count: u32,
    pub toast: Toast,
    pub particles: Vec<Particle>,
    pub particle_lifetime_ms: u32,
    pub close_quick_view: bool,
}

/// Out-of-band toast on its own.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub toast: Toast,
}

// =============================================================================
// Shared Responses
// =============================================================================

/// Build the response for an add attempt.
///
/// On success the count badge, toast and particles are returned with the
/// `cart-updated` trigger. A failed write shows an error toast instead of
/// silently dropping the item.
pub(super) fn added_response(
    result: std::result::Result<Cart, CartError>,
    entry: &CatalogEntry,
    motion: Motion,
    pointer: PointerForm,
    close_quick_view: bool,
) -> Response {
    match result {
        Ok(cart) => {
            add_breadcrumb("cart", "Added item", Some(&[("name", entry.name.as_str())]));
            let particles = particle_burst(
                motion,
                pointer.x.unwrap_or_default(),
                pointer.y.unwrap_or_default(),
                &mut rand::rng(),
            );

            (
                cart_updated(),
                CartAddedTemplate {
                    count: cart.item_count(),
                    toast: Toast::added_to_cart(&entry.name),
                    particles,
                    particle_lifetime_ms: PARTICLE_LIFETIME_MS,
                    close_quick_view,
                },
            )
                .into_response()
        }
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to add item to cart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ToastTemplate {
                    toast: Toast::error("Could not add to cart"),
                },
            )
                .into_response()
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session, store, nonce))]
pub async fn show(
    session: Session,
    store: CartStore<Session>,
    hints: ClientHints,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let cart = store.read().await;

    CartShowTemplate {
        shell: PageShell::load(&session, &store, hints, nonce).await,
        cart: CartView::from(&cart),
    }
}

/// Cart drawer fragment (HTMX).
#[instrument(skip(store))]
pub async fn drawer(store: CartStore<Session>) -> impl IntoResponse {
    CartDrawerTemplate {
        cart: CartView::from(&store.read().await),
    }
}

/// Cart page items fragment (HTMX).
#[instrument(skip(store))]
pub async fn items(store: CartStore<Session>) -> impl IntoResponse {
    CartItemsTemplate {
        cart: CartView::from(&store.read().await),
    }
}

/// Checkout summary lines fragment (HTMX).
#[instrument(skip(store))]
pub async fn summary(store: CartStore<Session>) -> impl IntoResponse {
    CheckoutLinesTemplate {
        cart: CartView::from(&store.read().await),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(store))]
pub async fn count(store: CartStore<Session>) -> impl IntoResponse {
    CartCountTemplate {
        count: store.item_count(None).await,
    }
}

/// Add a catalog product to the cart (HTMX).
#[instrument(skip(state, store, hints))]
pub async fn add(
    State(state): State<AppState>,
    store: CartStore<Session>,
    hints: ClientHints,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let Some(entry) = state.catalog().get(&form.key) else {
        tracing::debug!(key = %form.key, "add for unknown product ignored");
        return StatusCode::NO_CONTENT.into_response();
    };

    let result = store
        .add_item(&entry.name, entry.price, Some(entry.image.clone()))
        .await;

    added_response(result, entry, hints.motion, form.pointer(), false)
}

/// Change a line's quantity by `delta` (HTMX).
#[instrument(skip(store))]
pub async fn quantity(
    store: CartStore<Session>,
    Form(form): Form<QuantityForm>,
) -> Result<impl IntoResponse> {
    let cart = store.change_quantity(&form.name, form.delta).await?;

    Ok((
        cart_updated(),
        CartCountTemplate {
            count: cart.item_count(),
        },
    ))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(store))]
pub async fn remove(
    store: CartStore<Session>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<impl IntoResponse> {
    let cart = store.remove_item(&form.name).await?;

    Ok((
        cart_updated(),
        CartCountTemplate {
            count: cart.item_count(),
        },
    ))
}

/// Empty the cart (HTMX).
#[instrument(skip(store))]
pub async fn clear(store: CartStore<Session>) -> Result<impl IntoResponse> {
    store.clear().await?;

    Ok((cart_updated(), CartCountTemplate { count: 0 }))
}
