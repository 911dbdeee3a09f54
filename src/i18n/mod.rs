//! Internationalization — localized strings for bot replies and result cards.
//!
//! Uses a simple `t(key, locale)` function for static strings and
//! format helpers for strings with interpolation.
//! Supported locales: English (fallback) and French.

mod format;
mod labels;
mod replies;

#[cfg(test)]
mod tests;

pub use format::*;

use banwatch_core::locale::Locale;

/// Return a localized static string for `key` in the given `locale`.
/// Falls back to `"???"` for unknown keys.
pub fn t(key: &str, locale: Locale) -> &'static str {
    if let Some(v) = labels::lookup(key, locale) {
        return v;
    }
    if let Some(v) = replies::lookup(key, locale) {
        return v;
    }
    "???"
}
