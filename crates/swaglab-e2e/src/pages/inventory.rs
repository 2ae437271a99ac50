//! Inventory (product listing) page object.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{bound, read_badge, PageModel};
use crate::browser::Session;
use crate::locator::{Locator, Selector};
use crate::parse;
use crate::result::SuiteResult;

/// Selector table for the inventory screen. Per-product controls carry
/// `data-test` attributes keyed by slug; display text uses class selectors.
mod sel {
    use crate::locator::Selector;

    pub fn title() -> Selector {
        Selector::css(".title")
    }

    pub fn inventory_list() -> Selector {
        Selector::css(".inventory_list")
    }

    pub fn inventory_items() -> Selector {
        Selector::css(".inventory_item")
    }

    pub fn item_names() -> Selector {
        Selector::css(".inventory_item_name")
    }

    pub fn item_prices() -> Selector {
        Selector::css(".inventory_item_price")
    }

    pub fn cart_link() -> Selector {
        Selector::css(".shopping_cart_link")
    }

    pub fn sort_dropdown() -> Selector {
        Selector::css(".product_sort_container")
    }

    pub fn menu_button() -> Selector {
        Selector::css("#react-burger-menu-btn")
    }

    pub fn menu_close_button() -> Selector {
        Selector::css("#react-burger-cross-btn")
    }

    pub fn sidebar() -> Selector {
        Selector::css(".bm-menu")
    }

    pub fn logout_link() -> Selector {
        Selector::css("#logout_sidebar_link")
    }

    pub fn reset_link() -> Selector {
        Selector::css("#reset_sidebar_link")
    }

    pub fn add_to_cart(slug: &str) -> Selector {
        Selector::data_test(format!("add-to-cart-{slug}"))
    }

    pub fn remove(slug: &str) -> Selector {
        Selector::data_test(format!("remove-{slug}"))
    }

    pub fn item_by_name(name: &str) -> Selector {
        Selector::css(".inventory_item").with_text(name)
    }
}

/// Display order options exposed by the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Name A to Z
    NameAsc,
    /// Name Z to A
    NameDesc,
    /// Price low to high
    PriceAsc,
    /// Price high to low
    PriceDesc,
}

impl SortOrder {
    /// The `<option>` value used by the application
    #[must_use]
    pub const fn option_value(self) -> &'static str {
        match self {
            Self::NameAsc => "az",
            Self::NameDesc => "za",
            Self::PriceAsc => "lohi",
            Self::PriceDesc => "hilo",
        }
    }
}

/// One product as rendered on the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Display name
    pub name: String,
    /// Description paragraph
    pub description: String,
    /// Price in dollars
    pub price: f64,
}

/// The inventory screen
#[derive(Debug)]
pub struct InventoryPage<'s> {
    session: &'s Session,
}

impl<'s> InventoryPage<'s> {
    /// Bind to a session
    #[must_use]
    pub const fn new(session: &'s Session) -> Self {
        Self { session }
    }

    fn locator(&self, selector: Selector) -> Locator {
        bound(self.session, selector)
    }

    /// Navigate directly to the inventory screen.
    pub async fn open(&self) -> SuiteResult<()> {
        self.session.goto(self.url_path()).await
    }

    /// Add a product to the cart by slug.
    pub async fn add_to_cart(&self, slug: &str) -> SuiteResult<()> {
        tracing::info!(slug, "adding to cart");
        self.locator(sel::add_to_cart(slug)).click().await
    }

    /// Remove a product from the cart by slug.
    pub async fn remove_from_cart(&self, slug: &str) -> SuiteResult<()> {
        tracing::info!(slug, "removing from cart");
        self.locator(sel::remove(slug)).click().await
    }

    /// Whether the product's control currently shows "remove".
    pub async fn is_in_cart(&self, slug: &str) -> SuiteResult<bool> {
        self.locator(sel::remove(slug)).is_visible().await
    }

    /// Open the cart screen.
    pub async fn go_to_cart(&self) -> SuiteResult<()> {
        self.locator(sel::cart_link()).click().await
    }

    /// Current cart badge count; 0 when the badge is absent.
    pub async fn cart_badge_count(&self) -> SuiteResult<usize> {
        read_badge(self.session).await
    }

    /// Change the display order of the listing.
    pub async fn sort(&self, order: SortOrder) -> SuiteResult<()> {
        self.locator(sel::sort_dropdown())
            .select_option(order.option_value())
            .await
    }

    /// Display names of all listed products, in render order.
    pub async fn product_names(&self) -> SuiteResult<Vec<String>> {
        self.locator(sel::item_names()).all_texts().await
    }

    /// Prices of all listed products, in render order.
    pub async fn product_prices(&self) -> SuiteResult<Vec<f64>> {
        self.locator(sel::item_prices())
            .all_texts()
            .await?
            .iter()
            .map(|text| parse::price(text))
            .collect()
    }

    /// Number of listed products.
    pub async fn product_count(&self) -> SuiteResult<usize> {
        self.locator(sel::inventory_items()).count().await
    }

    /// Price of one product, addressed by display name.
    pub async fn product_price(&self, name: &str) -> SuiteResult<f64> {
        let text = self
            .locator(sel::item_by_name(name).child(".inventory_item_price"))
            .text()
            .await?;
        parse::price(&text)
    }

    /// Description of one product, addressed by display name.
    pub async fn product_description(&self, name: &str) -> SuiteResult<String> {
        self.locator(sel::item_by_name(name).child(".inventory_item_desc"))
            .text()
            .await
    }

    /// Name, description and price of one product.
    pub async fn product_info(&self, name: &str) -> SuiteResult<ProductInfo> {
        Ok(ProductInfo {
            name: name.to_string(),
            description: self.product_description(name).await?,
            price: self.product_price(name).await?,
        })
    }

    /// Open a product's detail page by clicking its name.
    pub async fn open_product(&self, name: &str) -> SuiteResult<()> {
        self.locator(sel::item_names().with_text(name)).click().await
    }

    /// Open the burger menu and wait for the sidebar.
    pub async fn open_menu(&self) -> SuiteResult<()> {
        self.locator(sel::menu_button()).click().await?;
        self.locator(sel::sidebar()).wait_for_visible().await
    }

    /// Close the burger menu.
    pub async fn close_menu(&self) -> SuiteResult<()> {
        self.locator(sel::menu_close_button()).click().await?;
        self.locator(sel::sidebar()).wait_for_hidden().await
    }

    /// Log out through the burger menu.
    pub async fn logout(&self) -> SuiteResult<()> {
        self.open_menu().await?;
        self.locator(sel::logout_link()).click().await
    }

    /// Reset the application state through the burger menu.
    pub async fn reset_app_state(&self) -> SuiteResult<()> {
        self.open_menu().await?;
        self.locator(sel::reset_link()).click().await?;
        self.close_menu().await
    }

    /// Text of the page header.
    pub async fn title(&self) -> SuiteResult<String> {
        self.locator(sel::title()).text().await
    }
}

#[async_trait]
impl PageModel for InventoryPage<'_> {
    fn url_path(&self) -> &'static str {
        "/inventory.html"
    }

    async fn is_loaded(&self) -> SuiteResult<bool> {
        Ok(self.locator(sel::inventory_list()).is_visible().await?
            && self.locator(sel::inventory_items()).count().await? > 0)
    }
}
