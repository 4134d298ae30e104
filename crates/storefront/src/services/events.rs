//! Cart change notifications.
//!
//! Every committed cart mutation is published as a [`CartEvent`] on a
//! broadcast channel. Views do not get redrawn by the store directly: HTTP
//! responses carry an `HX-Trigger: cart-updated` header and each cart view
//! re-fetches itself, while in-process subscribers (the activity logger,
//! tests) receive the event from this channel.

use cottonfront_core::MinorUnits;
use tokio::sync::broadcast;
use tracing::Instrument;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A unit of `name` was added; `quantity` is the resulting line quantity.
    Added { name: String, quantity: u32 },
    /// The line named `name` was removed.
    Removed { name: String },
    /// The quantity of `name` was set to `quantity`.
    QuantityChanged { name: String, quantity: u32 },
    /// Every line was dropped.
    Cleared,
    /// An order was placed and the cart emptied.
    CheckedOut,
    /// The whole sequence was replaced by a direct write.
    Replaced,
}

/// A committed cart mutation and the resulting aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEvent {
    pub change: CartChange,
    pub item_count: u32,
    pub total: MinorUnits,
}

/// Publisher side of the cart change channel.
///
/// Cheaply cloneable; all clones publish to the same subscribers.
#[derive(Debug, Clone)]
pub struct CartEvents {
    tx: broadcast::Sender<CartEvent>,
}

impl CartEvents {
    /// Create a channel buffering up to `capacity` events per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: CartEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("cart event dropped: no subscribers");
        }
    }

    /// Subscribe to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.tx.subscribe()
    }

    /// Spawn a task that logs every cart event until the channel closes.
    pub fn spawn_activity_logger(&self) -> tokio::task::JoinHandle<()> {
        let mut rx = self.subscribe();
        tokio::spawn(
            async move {
                loop {
                    match rx.recv().await {
                        Ok(event) => tracing::info!(
                            change = ?event.change,
                            item_count = event.item_count,
                            total = %event.total,
                            "cart updated"
                        ),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "cart activity logger lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }
            .instrument(tracing::info_span!("cart_activity")),
        )
    }
}

impl Default for CartEvents {
    fn default() -> Self {
        Self::new(64)
    }
}
