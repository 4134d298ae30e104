//! Display models shared by several route modules.

pub mod toast;

pub use toast::{Toast, ToastKind};
