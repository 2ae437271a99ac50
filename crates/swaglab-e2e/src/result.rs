//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur while driving the storefront
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error (creation, url query, ...)
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Element did not appear within the auto-wait budget
    #[error("Element {selector} not found within {timeout_ms}ms")]
    ElementNotFound {
        /// Selector that failed to resolve
        selector: String,
        /// Auto-wait budget in milliseconds
        timeout_ms: u64,
    },

    /// A bounded wait expired
    #[error("Timed out after {ms}ms waiting for {what}")]
    Timeout {
        /// What was being waited for
        what: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// An interaction (click, fill, select) failed on a resolved element
    #[error("Interaction with {selector} failed: {message}")]
    Interaction {
        /// Selector of the target element
        selector: String,
        /// Error message
        message: String,
    },

    /// JavaScript evaluation in the page failed
    #[error("Evaluation failed: {message}")]
    Evaluation {
        /// Error message
        message: String,
    },

    /// Screenshot capture failed
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Rendered text did not parse as the expected shape
    #[error("Could not parse {text:?} as {expected}")]
    Parse {
        /// The rendered text
        text: String,
        /// What the text was expected to be
        expected: &'static str,
    },

    /// The page reached a state the flow cannot make progress from
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_selector_and_budget() {
        let err = SuiteError::ElementNotFound {
            selector: "[data-test=\"login-button\"]".to_string(),
            timeout_ms: 5000,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("login-button"));
        assert!(rendered.contains("5000ms"));
    }

    #[test]
    fn parse_error_shows_offending_text() {
        let err = SuiteError::Parse {
            text: "free".to_string(),
            expected: "a currency amount",
        };
        assert_eq!(err.to_string(), "Could not parse \"free\" as a currency amount");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SuiteError = io.into();
        assert!(matches!(err, SuiteError::Io(_)));
    }
}
