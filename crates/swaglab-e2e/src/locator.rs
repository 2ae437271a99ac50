//! Locator abstraction for element selection and interaction.
//!
//! A [`Selector`] is pure data describing how to address elements; a
//! [`Locator`] binds one to a live page and performs auto-waiting actions
//! against it. Selectors render two ways: as a CSS string consumed by CDP
//! element resolution, and as JavaScript expressions for reads that CDP has
//! no first-class call for (visibility, counts, text-scoped matches).
//!
//! Locators are deferred: nothing touches the DOM until an action or read is
//! invoked, and every action polls until the target is present or the
//! budget expires.

use std::fmt;
use std::time::Duration;

use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use serde::de::DeserializeOwned;

use crate::result::{SuiteError, SuiteResult};
use crate::wait::{self, WaitOptions};

/// Selector expression addressing zero or more elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS selector (e.g. `.inventory_item`)
    Css(String),
    /// Stable `data-test` attribute used by interactive controls
    DataTest(String),
    /// CSS selector filtered by contained text
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text the element must contain
        text: String,
    },
    /// Element inside the first text-matched container
    Within {
        /// Container CSS selector
        scope: String,
        /// Text the container must contain
        text: String,
        /// CSS selector resolved inside the container
        inner: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a `data-test` attribute selector
    #[must_use]
    pub fn data_test(name: impl Into<String>) -> Self {
        Self::DataTest(name.into())
    }

    /// Filter a CSS selector by contained text
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        match self {
            Self::Css(css) => Self::CssWithText {
                css,
                text: text.into(),
            },
            other => other,
        }
    }

    /// Address an element inside a text-matched container.
    ///
    /// Only meaningful on a [`Selector::CssWithText`]; other variants are
    /// returned unchanged.
    #[must_use]
    pub fn child(self, inner: impl Into<String>) -> Self {
        match self {
            Self::CssWithText { css, text } => Self::Within {
                scope: css,
                text,
                inner: inner.into(),
            },
            other => other,
        }
    }

    /// Render as a plain CSS selector, when the variant allows it
    #[must_use]
    pub fn as_css(&self) -> Option<String> {
        match self {
            Self::Css(css) => Some(css.clone()),
            Self::DataTest(name) => Some(format!("[data-test=\"{name}\"]")),
            Self::CssWithText { .. } | Self::Within { .. } => None,
        }
    }

    /// JavaScript expression evaluating to the matched element or `null`
    #[must_use]
    pub fn to_element_expr(&self) -> String {
        match self {
            Self::Css(_) | Self::DataTest(_) => {
                // as_css is total for these variants
                let css = self.as_css().unwrap_or_default();
                format!("document.querySelector({css:?})")
            }
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?})) ?? null"
            ),
            Self::Within { scope, text, inner } => format!(
                "(Array.from(document.querySelectorAll({scope:?})).find(el => el.textContent.includes({text:?}))?.querySelector({inner:?})) ?? null"
            ),
        }
    }

    /// JavaScript expression evaluating to the number of matches
    #[must_use]
    pub fn to_count_expr(&self) -> String {
        match self {
            Self::Css(_) | Self::DataTest(_) => {
                let css = self.as_css().unwrap_or_default();
                format!("document.querySelectorAll({css:?}).length")
            }
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length"
            ),
            Self::Within { .. } => format!("({} ? 1 : 0)", self.to_element_expr()),
        }
    }

    /// JavaScript expression evaluating to whether the match is visible
    #[must_use]
    pub fn to_visibility_expr(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; const box = el.getBoundingClientRect(); return box.width > 0 && box.height > 0; }})()",
            self.to_element_expr()
        )
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => write!(f, "{css}"),
            Self::DataTest(name) => write!(f, "[data-test=\"{name}\"]"),
            Self::CssWithText { css, text } => write!(f, "{css} containing {text:?}"),
            Self::Within { scope, text, inner } => {
                write!(f, "{inner} within {scope} containing {text:?}")
            }
        }
    }
}

/// Options controlling locator auto-waiting
#[derive(Debug, Clone, Copy)]
pub struct LocatorOptions {
    /// Budget before an action or read fails
    pub timeout: Duration,
    /// Pause between resolution attempts
    pub poll_interval: Duration,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        let wait = WaitOptions::default();
        Self {
            timeout: wait.timeout,
            poll_interval: wait.poll_interval,
        }
    }
}

impl LocatorOptions {
    fn wait_options(&self) -> WaitOptions {
        WaitOptions::new()
            .with_timeout(self.timeout)
            .with_poll_interval(self.poll_interval)
    }
}

/// A deferred reference to elements on a live page.
///
/// Resolution happens at the moment an action or read is performed; actions
/// auto-wait for the target with the configured budget.
#[derive(Debug, Clone)]
pub struct Locator {
    page: Page,
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Bind a selector to a page
    #[must_use]
    pub fn new(page: Page, selector: Selector) -> Self {
        Self {
            page,
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Set a custom action budget
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Click the matched element, waiting for it to appear first.
    pub async fn click(&self) -> SuiteResult<()> {
        tracing::debug!(selector = %self.selector, "click");
        if self.selector.as_css().is_some() {
            let element = self.resolve().await?;
            element.click().await.map_err(|e| self.interaction(e))?;
        } else {
            // Text-scoped selectors have no CSS rendering; click through JS.
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                self.selector.to_element_expr()
            );
            self.wait_for_true(&expr, "element to become clickable").await?;
        }
        Ok(())
    }

    /// Clear the matched input and type `text` into it.
    pub async fn fill(&self, text: &str) -> SuiteResult<()> {
        tracing::debug!(selector = %self.selector, "fill");
        let element = self.resolve().await?;
        element.click().await.map_err(|e| self.interaction(e))?;
        let clear = format!(
            "(() => {{ const el = {}; if (!el) return false; el.value = ''; el.dispatchEvent(new Event('input', {{ bubbles: true }})); return true; }})()",
            self.selector.to_element_expr()
        );
        let cleared: bool = self.eval(&clear).await?;
        if !cleared {
            return Err(SuiteError::Interaction {
                selector: self.selector.to_string(),
                message: "element disappeared before it could be cleared".to_string(),
            });
        }
        element.type_str(text).await.map_err(|e| self.interaction(e))?;
        Ok(())
    }

    /// Select an option of the matched `<select>` by value.
    pub async fn select_option(&self, value: &str) -> SuiteResult<()> {
        tracing::debug!(selector = %self.selector, value, "select option");
        // Ensure the dropdown is present before mutating it.
        let _ = self.resolve().await?;
        let expr = format!(
            "(() => {{ const el = {}; if (!el) return false; el.value = {value:?}; el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
            self.selector.to_element_expr()
        );
        let selected: bool = self.eval(&expr).await?;
        if selected {
            Ok(())
        } else {
            Err(SuiteError::Interaction {
                selector: self.selector.to_string(),
                message: format!("could not select option {value:?}"),
            })
        }
    }

    /// Read the text content of the matched element, waiting for it to appear.
    pub async fn text(&self) -> SuiteResult<String> {
        let expr = format!(
            "(() => {{ const el = {}; return el ? el.textContent : null; }})()",
            self.selector.to_element_expr()
        );
        let page = self.page.clone();
        let text = wait::until(&self.options.wait_options(), "text content", move || {
            let page = page.clone();
            let expr = expr.clone();
            async move { eval_on(&page, &expr).await }
        })
        .await
        .map_err(|e| self.not_found_on_timeout(e))?;
        Ok(text)
    }

    /// Read the text content of every matched element.
    pub async fn all_texts(&self) -> SuiteResult<Vec<String>> {
        let css = self.require_css("all_texts")?;
        let expr =
            format!("Array.from(document.querySelectorAll({css:?})).map(el => el.textContent)");
        self.eval(&expr).await
    }

    /// Count matching elements at this instant (no auto-wait).
    pub async fn count(&self) -> SuiteResult<usize> {
        let n: u64 = self.eval(&self.selector.to_count_expr()).await?;
        Ok(n as usize)
    }

    /// Whether the matched element is currently rendered with a non-empty box.
    pub async fn is_visible(&self) -> SuiteResult<bool> {
        self.eval(&self.selector.to_visibility_expr()).await
    }

    /// Whether the matched element is present and not disabled.
    pub async fn is_enabled(&self) -> SuiteResult<bool> {
        let expr = format!(
            "(() => {{ const el = {}; return !!el && !el.disabled; }})()",
            self.selector.to_element_expr()
        );
        self.eval(&expr).await
    }

    /// Wait for the element to become visible.
    pub async fn wait_for_visible(&self) -> SuiteResult<()> {
        let expr = self.selector.to_visibility_expr();
        self.wait_for_true(&expr, "element to become visible")
            .await
            .map_err(|e| self.not_found_on_timeout(e))
    }

    /// Wait for the element to disappear or lose its box.
    pub async fn wait_for_hidden(&self) -> SuiteResult<()> {
        let expr = format!("!{}", self.selector.to_visibility_expr());
        self.wait_for_true(&expr, "element to become hidden").await
    }

    /// Wait until the match count drops to `limit` or fewer.
    pub async fn wait_for_count_at_most(&self, limit: usize) -> SuiteResult<()> {
        let expr = format!("{} <= {limit}", self.selector.to_count_expr());
        self.wait_for_true(&expr, "match count to drop").await
    }

    /// Resolve the matched element handle, polling until it appears.
    async fn resolve(&self) -> SuiteResult<Element> {
        let css = self.require_css("element resolution")?;
        let page = self.page.clone();
        let found = wait::until(&self.options.wait_options(), "element", move || {
            let page = page.clone();
            let css = css.clone();
            async move { Ok(page.find_element(&css).await.ok()) }
        })
        .await;
        found.map_err(|e| self.not_found_on_timeout(e))
    }

    async fn wait_for_true(&self, expr: &str, what: &str) -> SuiteResult<()> {
        let page = self.page.clone();
        let expr = expr.to_string();
        wait::until(&self.options.wait_options(), what, move || {
            let page = page.clone();
            let expr = expr.clone();
            async move {
                let ready: bool = eval_required(&page, &expr).await?;
                Ok(ready.then_some(()))
            }
        })
        .await
    }

    async fn eval<T: DeserializeOwned>(&self, expr: &str) -> SuiteResult<T> {
        eval_required(&self.page, expr).await
    }

    fn require_css(&self, operation: &str) -> SuiteResult<String> {
        self.selector.as_css().ok_or_else(|| SuiteError::Interaction {
            selector: self.selector.to_string(),
            message: format!("{operation} requires a CSS-addressable selector"),
        })
    }

    fn interaction(&self, error: impl fmt::Display) -> SuiteError {
        SuiteError::Interaction {
            selector: self.selector.to_string(),
            message: error.to_string(),
        }
    }

    fn not_found_on_timeout(&self, error: SuiteError) -> SuiteError {
        match error {
            SuiteError::Timeout { ms, .. } => SuiteError::ElementNotFound {
                selector: self.selector.to_string(),
                timeout_ms: ms,
            },
            other => other,
        }
    }
}

/// Evaluate a JS expression, mapping `null`/deserialization gaps to `None`.
async fn eval_on<T: DeserializeOwned>(page: &Page, expr: &str) -> SuiteResult<Option<T>> {
    let result = page.evaluate(expr).await.map_err(|e| SuiteError::Evaluation {
        message: e.to_string(),
    })?;
    Ok(result.into_value().ok())
}

/// Evaluate a JS expression that must produce a value.
async fn eval_required<T: DeserializeOwned>(page: &Page, expr: &str) -> SuiteResult<T> {
    let result = page.evaluate(expr).await.map_err(|e| SuiteError::Evaluation {
        message: e.to_string(),
    })?;
    result.into_value().map_err(|e| SuiteError::Evaluation {
        message: e.to_string(),
    })
}
