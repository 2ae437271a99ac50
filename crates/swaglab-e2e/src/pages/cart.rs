//! Cart page object.

use async_trait::async_trait;

use super::{bound, read_badge, PageModel};
use crate::browser::Session;
use crate::locator::{Locator, Selector};
use crate::parse;
use crate::result::{SuiteError, SuiteResult};

/// Selector table for the cart screen.
mod sel {
    use crate::locator::Selector;

    pub fn title() -> Selector {
        Selector::css(".title")
    }

    pub fn cart_list() -> Selector {
        Selector::css(".cart_list")
    }

    pub fn cart_items() -> Selector {
        Selector::css(".cart_item")
    }

    pub fn item_names() -> Selector {
        Selector::css(".cart_item .inventory_item_name")
    }

    pub fn continue_shopping() -> Selector {
        Selector::data_test("continue-shopping")
    }

    pub fn checkout() -> Selector {
        Selector::data_test("checkout")
    }

    pub fn remove(slug: &str) -> Selector {
        Selector::data_test(format!("remove-{slug}"))
    }

    /// Every per-line remove control, regardless of slug.
    pub fn remove_buttons() -> Selector {
        Selector::css(".cart_item [data-test^=\"remove-\"]")
    }

    pub fn item_by_name(name: &str) -> Selector {
        Selector::css(".cart_item").with_text(name)
    }
}

/// The cart screen
#[derive(Debug)]
pub struct CartPage<'s> {
    session: &'s Session,
}

impl<'s> CartPage<'s> {
    /// Bind to a session
    #[must_use]
    pub const fn new(session: &'s Session) -> Self {
        Self { session }
    }

    fn locator(&self, selector: Selector) -> Locator {
        bound(self.session, selector)
    }

    /// Navigate directly to the cart screen.
    pub async fn open(&self) -> SuiteResult<()> {
        self.session.goto(self.url_path()).await
    }

    /// Number of line items currently rendered.
    pub async fn item_count(&self) -> SuiteResult<usize> {
        self.locator(sel::cart_items()).count().await
    }

    /// Display names of all line items.
    pub async fn item_names(&self) -> SuiteResult<Vec<String>> {
        self.locator(sel::item_names()).all_texts().await
    }

    /// Whether a line item with this display name is present.
    pub async fn has_item(&self, name: &str) -> SuiteResult<bool> {
        Ok(self.locator(sel::item_by_name(name)).count().await? > 0)
    }

    /// Remove one line item by product slug.
    pub async fn remove(&self, slug: &str) -> SuiteResult<()> {
        tracing::info!(slug, "removing line item");
        self.locator(sel::remove(slug)).click().await
    }

    /// Remove every line item.
    ///
    /// The visible control set mutates after each removal, so the set is
    /// re-queried after every single click and the loop runs until it is
    /// empty. A removal that does not shrink the set is reported instead of
    /// retried forever.
    pub async fn remove_all(&self) -> SuiteResult<()> {
        loop {
            let remaining = self.locator(sel::remove_buttons()).count().await?;
            if remaining == 0 {
                return Ok(());
            }
            tracing::debug!(remaining, "removing first line item");
            self.locator(sel::remove_buttons()).click().await?;
            self.locator(sel::remove_buttons())
                .wait_for_count_at_most(remaining - 1)
                .await
                .map_err(|_| SuiteError::InvalidState {
                    message: format!(
                        "cart still shows {remaining} remove controls after a removal"
                    ),
                })?;
        }
    }

    /// Quantity of one line item, addressed by display name.
    pub async fn item_quantity(&self, name: &str) -> SuiteResult<usize> {
        let text = self
            .locator(sel::item_by_name(name).child(".cart_quantity"))
            .text()
            .await?;
        parse::count(&text)
    }

    /// Price of one line item, addressed by display name.
    pub async fn item_price(&self, name: &str) -> SuiteResult<f64> {
        let text = self
            .locator(sel::item_by_name(name).child(".inventory_item_price"))
            .text()
            .await?;
        parse::price(&text)
    }

    /// Description of one line item, addressed by display name.
    pub async fn item_description(&self, name: &str) -> SuiteResult<String> {
        self.locator(sel::item_by_name(name).child(".inventory_item_desc"))
            .text()
            .await
    }

    /// Go back to the inventory screen.
    pub async fn continue_shopping(&self) -> SuiteResult<()> {
        self.locator(sel::continue_shopping()).click().await
    }

    /// Advance to the checkout information screen.
    pub async fn proceed_to_checkout(&self) -> SuiteResult<()> {
        self.locator(sel::checkout()).click().await
    }

    /// Whether the checkout button is present and enabled.
    pub async fn checkout_enabled(&self) -> SuiteResult<bool> {
        self.locator(sel::checkout()).is_enabled().await
    }

    /// Current cart badge count; 0 when the badge is absent.
    pub async fn badge_count(&self) -> SuiteResult<usize> {
        read_badge(self.session).await
    }
}

#[async_trait]
impl PageModel for CartPage<'_> {
    fn url_path(&self) -> &'static str {
        "/cart.html"
    }

    async fn is_loaded(&self) -> SuiteResult<bool> {
        Ok(self.locator(sel::title()).is_visible().await?
            && self.locator(sel::cart_list()).is_visible().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::sel;

    #[test]
    fn remove_buttons_match_any_slug() {
        let selector = sel::remove_buttons();
        let expr = selector.to_count_expr();
        assert!(expr.contains("remove-"));
        assert!(expr.contains(".cart_item"));
    }

    #[test]
    fn remove_control_is_keyed_by_slug() {
        assert_eq!(
            sel::remove("sauce-labs-backpack").to_string(),
            "[data-test=\"remove-sauce-labs-backpack\"]"
        );
    }

    #[test]
    fn item_names_are_scoped_to_line_items() {
        assert_eq!(sel::item_names().to_string(), ".cart_item .inventory_item_name");
    }
}
