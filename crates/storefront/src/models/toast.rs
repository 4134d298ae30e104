//! Toast notifications.
//!
//! Toasts are rendered server-side and appended to the page's toast
//! container with an out-of-band swap. Each toast removes itself after
//! [`TOAST_LIFETIME_MS`].

/// How long a toast stays visible.
pub const TOAST_LIFETIME_MS: u32 = 4000;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2715}",
            Self::Info => "\u{2139}",
            Self::Warning => "\u{26a0}",
        }
    }

    /// CSS modifier, as in `toast--success`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub kind: ToastKind,
    pub message: Option<String>,
}

impl Toast {
    /// Success toast for an item added to the cart.
    #[must_use]
    pub fn added_to_cart(name: &str) -> Self {
        Self {
            title: name.to_owned(),
            kind: ToastKind::Success,
            message: Some("Added to cart!".to_owned()),
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ToastKind::Error,
            message: None,
        }
    }

    /// Success toasts offer a shortcut that opens the cart drawer.
    #[must_use]
    pub const fn offers_view_cart(&self) -> bool {
        matches!(self.kind, ToastKind::Success)
    }

    #[must_use]
    pub const fn lifetime_ms(&self) -> u32 {
        TOAST_LIFETIME_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_to_cart() {
        let toast = Toast::added_to_cart("Spider-Man: Hero Swing");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message.as_deref(), Some("Added to cart!"));
        assert!(toast.offers_view_cart());
    }

    #[test]
    fn test_error_has_no_view_cart_action() {
        let toast = Toast::error("Could not update cart");
        assert!(!toast.offers_view_cart());
        assert_eq!(toast.kind.icon(), "\u{2715}");
    }
}
