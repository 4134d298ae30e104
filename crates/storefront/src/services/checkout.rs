//! Checkout submission.
//!
//! There is no payment step: placing an order empties the cart and thanks the
//! customer by name. An empty cart blocks the submission and leaves every
//! piece of stored state as it was.

use cottonfront_core::Cart;

use super::cart::{CartError, CartStore};
use crate::storage::KeyValueStorage;

/// Name used when the form leaves it blank.
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Notice shown when checking out with nothing in the cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty.";

/// Result of a checkout submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing changed.
    EmptyCart,
    /// The order was placed and the cart cleared.
    Placed {
        customer_name: String,
        /// The cart as it was when the order was placed.
        order: Cart,
    },
}

impl CheckoutOutcome {
    /// Thank-you line for a placed order.
    #[must_use]
    pub fn confirmation(&self) -> Option<String> {
        match self {
            Self::EmptyCart => None,
            Self::Placed { customer_name, .. } => Some(format!(
                "Thank you, {customer_name}! Your order has been placed."
            )),
        }
    }
}

/// Submit the checkout form for the cart in `store`.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be persisted.
pub async fn submit<S: KeyValueStorage>(
    store: &CartStore<S>,
    full_name: Option<&str>,
) -> Result<CheckoutOutcome, CartError> {
    let order = store.read().await;
    if order.is_empty() {
        tracing::info!("checkout blocked: empty cart");
        return Ok(CheckoutOutcome::EmptyCart);
    }

    let customer_name = full_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CUSTOMER_NAME)
        .to_owned();

    store.complete_checkout().await?;
    tracing::info!(
        items = order.item_count(),
        total = %order.total(),
        "order placed"
    );

    Ok(CheckoutOutcome::Placed {
        customer_name,
        order,
    })
}
