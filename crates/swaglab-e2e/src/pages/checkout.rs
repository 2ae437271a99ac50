//! Checkout page object.
//!
//! One object models the application's three-screen checkout: information
//! entry, order overview, completion receipt. Methods never assert; the
//! calling test verifies whatever state transition it expects.

use async_trait::async_trait;

use super::{bound, PageModel};
use crate::browser::Session;
use crate::locator::{Locator, Selector};
use crate::parse;
use crate::result::SuiteResult;

/// Path of the information entry screen
pub const STEP_ONE_PATH: &str = "/checkout-step-one.html";

/// Path of the order overview screen
pub const STEP_TWO_PATH: &str = "/checkout-step-two.html";

/// Path of the completion screen
pub const COMPLETE_PATH: &str = "/checkout-complete.html";

/// Selector table for all three checkout screens.
mod sel {
    use crate::locator::Selector;

    // Information entry
    pub fn first_name() -> Selector {
        Selector::data_test("firstName")
    }

    pub fn last_name() -> Selector {
        Selector::data_test("lastName")
    }

    pub fn postal_code() -> Selector {
        Selector::data_test("postalCode")
    }

    pub fn continue_button() -> Selector {
        Selector::data_test("continue")
    }

    pub fn cancel_button() -> Selector {
        Selector::data_test("cancel")
    }

    pub fn error() -> Selector {
        Selector::data_test("error")
    }

    // Order overview
    pub fn summary() -> Selector {
        Selector::css(".checkout_summary_container")
    }

    pub fn overview_items() -> Selector {
        Selector::css(".cart_item")
    }

    pub fn subtotal() -> Selector {
        Selector::css(".summary_subtotal_label")
    }

    pub fn tax() -> Selector {
        Selector::css(".summary_tax_label")
    }

    pub fn total() -> Selector {
        Selector::css(".summary_total_label")
    }

    pub fn finish_button() -> Selector {
        Selector::data_test("finish")
    }

    // Completion receipt
    pub fn complete_header() -> Selector {
        Selector::css(".complete-header")
    }

    pub fn complete_text() -> Selector {
        Selector::css(".complete-text")
    }

    pub fn back_home_button() -> Selector {
        Selector::data_test("back-to-products")
    }
}

/// The three-screen checkout flow
#[derive(Debug)]
pub struct CheckoutPage<'s> {
    session: &'s Session,
}

impl<'s> CheckoutPage<'s> {
    /// Bind to a session
    #[must_use]
    pub const fn new(session: &'s Session) -> Self {
        Self { session }
    }

    fn locator(&self, selector: Selector) -> Locator {
        bound(self.session, selector)
    }

    /// Navigate directly to the information entry screen.
    pub async fn open_information(&self) -> SuiteResult<()> {
        self.session.goto(STEP_ONE_PATH).await
    }

    /// Navigate directly to the order overview screen.
    pub async fn open_overview(&self) -> SuiteResult<()> {
        self.session.goto(STEP_TWO_PATH).await
    }

    /// Navigate directly to the completion screen.
    pub async fn open_complete(&self) -> SuiteResult<()> {
        self.session.goto(COMPLETE_PATH).await
    }

    /// Populate the information form. Write-only until submitted; validity
    /// is enforced by the application, not here.
    pub async fn fill_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> SuiteResult<()> {
        tracing::info!(first_name, last_name, "filling checkout information");
        self.locator(sel::first_name()).fill(first_name).await?;
        self.locator(sel::last_name()).fill(last_name).await?;
        self.locator(sel::postal_code()).fill(postal_code).await
    }

    /// Submit the information form. May surface a validation banner instead
    /// of advancing.
    pub async fn continue_to_overview(&self) -> SuiteResult<()> {
        self.locator(sel::continue_button()).click().await
    }

    /// Abort from the information screen back to the cart.
    pub async fn cancel_information(&self) -> SuiteResult<()> {
        self.locator(sel::cancel_button()).click().await
    }

    /// Submit the final order from the overview screen.
    pub async fn finish(&self) -> SuiteResult<()> {
        self.locator(sel::finish_button()).click().await
    }

    /// Abort from the overview screen back to the inventory.
    pub async fn cancel_overview(&self) -> SuiteResult<()> {
        self.locator(sel::cancel_button()).click().await
    }

    /// Text of the current validation banner.
    pub async fn error_message(&self) -> SuiteResult<String> {
        self.locator(sel::error()).text().await
    }

    /// Whether a validation banner is currently visible.
    pub async fn error_visible(&self) -> SuiteResult<bool> {
        self.locator(sel::error()).is_visible().await
    }

    /// Whether the order summary container is rendered.
    pub async fn overview_visible(&self) -> SuiteResult<bool> {
        self.locator(sel::summary()).is_visible().await
    }

    /// Wait for the order summary container to render.
    pub async fn wait_for_overview(&self) -> SuiteResult<()> {
        self.locator(sel::summary()).wait_for_visible().await
    }

    /// Number of line items shown on the overview.
    pub async fn overview_item_count(&self) -> SuiteResult<usize> {
        self.locator(sel::overview_items()).count().await
    }

    /// Item subtotal from the overview summary.
    pub async fn subtotal(&self) -> SuiteResult<f64> {
        parse::summary_price(&self.locator(sel::subtotal()).text().await?)
    }

    /// Tax from the overview summary.
    pub async fn tax(&self) -> SuiteResult<f64> {
        parse::summary_price(&self.locator(sel::tax()).text().await?)
    }

    /// Order total from the overview summary.
    pub async fn total(&self) -> SuiteResult<f64> {
        parse::summary_price(&self.locator(sel::total()).text().await?)
    }

    /// Header text of the completion receipt.
    pub async fn complete_header(&self) -> SuiteResult<String> {
        self.locator(sel::complete_header()).text().await
    }

    /// Body text of the completion receipt.
    pub async fn complete_text(&self) -> SuiteResult<String> {
        self.locator(sel::complete_text()).text().await
    }

    /// Return to the inventory from the completion screen.
    pub async fn back_home(&self) -> SuiteResult<()> {
        self.locator(sel::back_home_button()).click().await
    }
}

#[async_trait]
impl PageModel for CheckoutPage<'_> {
    fn url_path(&self) -> &'static str {
        STEP_ONE_PATH
    }

    async fn is_loaded(&self) -> SuiteResult<bool> {
        self.locator(sel::first_name()).is_visible().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_use_data_test_attributes() {
        assert_eq!(sel::first_name().to_string(), "[data-test=\"firstName\"]");
        assert_eq!(sel::last_name().to_string(), "[data-test=\"lastName\"]");
        assert_eq!(sel::postal_code().to_string(), "[data-test=\"postalCode\"]");
    }

    #[test]
    fn three_screens_have_distinct_paths() {
        assert_ne!(STEP_ONE_PATH, STEP_TWO_PATH);
        assert_ne!(STEP_TWO_PATH, COMPLETE_PATH);
        assert!(STEP_ONE_PATH.ends_with(".html"));
    }

    #[test]
    fn summary_labels_use_class_selectors() {
        assert_eq!(sel::subtotal().to_string(), ".summary_subtotal_label");
        assert_eq!(sel::tax().to_string(), ".summary_tax_label");
        assert_eq!(sel::total().to_string(), ".summary_total_label");
    }
}
