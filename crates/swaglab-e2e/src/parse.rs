//! Parsing of rendered storefront text.
//!
//! Every page object reads prices, quantities and badge counts from the
//! rendered DOM; the parsing lives here once instead of per accessor.

use crate::result::{SuiteError, SuiteResult};

/// Parse a rendered price such as `$12.99`.
///
/// # Errors
///
/// Returns [`SuiteError::Parse`] when the text is not a currency amount.
pub fn price(text: &str) -> SuiteResult<f64> {
    let trimmed = text.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);
    amount.parse().map_err(|_| SuiteError::Parse {
        text: text.to_string(),
        expected: "a currency amount",
    })
}

/// Parse a rendered count such as the cart badge `3`.
///
/// # Errors
///
/// Returns [`SuiteError::Parse`] when the text is not a whole number.
pub fn count(text: &str) -> SuiteResult<usize> {
    text.trim().parse().map_err(|_| SuiteError::Parse {
        text: text.to_string(),
        expected: "a whole number",
    })
}

/// Parse a labelled summary amount such as `Item total: $39.98`.
///
/// # Errors
///
/// Returns [`SuiteError::Parse`] when no `$`-prefixed amount is present.
pub fn summary_price(text: &str) -> SuiteResult<f64> {
    let start = text.find('$').ok_or_else(|| SuiteError::Parse {
        text: text.to_string(),
        expected: "a labelled currency amount",
    })?;
    price(&text[start..])
}
