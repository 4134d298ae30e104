//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use cottonfront_core::CURRENCY_PREFIX;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an amount in minor units with the store's currency prefix.
///
/// Usage in templates: `{{ item.price|currency }}` renders `rs-1699`.
#[askama::filter_fn]
pub fn currency(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{CURRENCY_PREFIX}{amount}"))
}
