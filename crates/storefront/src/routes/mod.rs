//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (catalog grid)
//! GET  /health                    - Health check
//!
//! # Quick view (HTMX fragments)
//! GET  /products/{key}/quick-view - Open quick view (204 if unknown)
//! POST /quick-view/size           - Select size (decorative)
//! POST /quick-view/add            - Add the open product, close the modal
//! POST /quick-view/close          - Close the modal
//!
//! # Cart (HTMX fragments)
//! GET  /cart                      - Cart page
//! GET  /cart/drawer               - Cart drawer (fragment)
//! GET  /cart/items                - Cart page items (fragment)
//! GET  /cart/count                - Cart count badge (fragment)
//! GET  /cart/summary              - Checkout summary lines (fragment)
//! POST /cart/add                  - Add a catalog product
//! POST /cart/quantity             - Change quantity by delta
//! POST /cart/remove               - Remove a line
//! POST /cart/clear                - Empty the cart
//!
//! # Checkout
//! GET  /checkout                  - Checkout page
//! POST /checkout                  - Place the order
//!
//! # Preferences
//! POST /theme/toggle              - Flip light/dark
//!
//! # Fragments
//! GET  /fragments/empty           - Empty body for self-removing elements
//! ```
//!
//! Every route that changes the cart sends `HX-Trigger: cart-updated`. The
//! drawer, cart page, checkout summary and count badge listen for it and
//! re-fetch themselves.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;
pub mod theme;

use axum::{
    Router,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
};
use cottonfront_core::Theme;
use tower_sessions::Session;

use crate::effects::{EffectSettings, Motion};
use crate::middleware::ClientHints;
use crate::services::{CartStore, theme::current_theme};

/// Event name announced after every cart mutation.
pub const CART_UPDATED: &str = "cart-updated";

/// Header pair announcing a cart mutation to HTMX listeners.
pub const fn cart_updated() -> AppendHeaders<[(&'static str, &'static str); 1]> {
    AppendHeaders([("HX-Trigger", CART_UPDATED)])
}

/// Layout data every full page needs.
#[derive(Clone, Debug)]
pub struct PageShell {
    pub theme: Theme,
    pub nonce: String,
    pub cart_count: u32,
    pub reduced_motion: bool,
    /// Pointer and scroll effect tuning; `None` under reduced motion.
    pub effects: Option<EffectSettings>,
}

impl PageShell {
    /// Gather layout data for the current visitor.
    pub async fn load(
        session: &Session,
        store: &CartStore<Session>,
        hints: ClientHints,
        nonce: String,
    ) -> Self {
        Self {
            theme: current_theme(session, hints.prefers_light).await,
            nonce,
            cart_count: store.item_count(None).await,
            reduced_motion: hints.motion == Motion::Reduced,
            effects: EffectSettings::for_motion(hints.motion),
        }
    }
}

/// Create the quick view routes router.
pub fn quick_view_routes() -> Router<crate::state::AppState> {
    Router::new()
        .route("/size", post(products::select_size))
        .route("/add", post(products::confirm_add))
        .route("/close", post(products::close))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<crate::state::AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/drawer", get(cart::drawer))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/summary", get(cart::summary))
        .route("/add", post(cart::add))
        .route("/quantity", post(cart::quantity))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<crate::state::AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/products/{key}/quick-view", get(products::quick_view))
        .nest("/quick-view", quick_view_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .route("/theme/toggle", post(theme::toggle))
        .route("/fragments/empty", get(empty_fragment))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Empty body that replaces a self-removing element (toasts, particles).
async fn empty_fragment() -> Response {
    (StatusCode::OK, "").into_response()
}
