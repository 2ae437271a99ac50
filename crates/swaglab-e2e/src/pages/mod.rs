//! Page objects for the storefront screens.
//!
//! Each page object binds one screen's selector table to an
//! action-oriented API; every method performs one user-observable
//! interaction or one read of rendered state. Verification belongs to the
//! calling test, not to the page object.

use std::time::Instant;

use async_trait::async_trait;

use crate::browser::Session;
use crate::locator::{Locator, Selector};
use crate::parse;
use crate::result::{SuiteError, SuiteResult};
use crate::wait::WaitOptions;

mod cart;
mod checkout;
mod inventory;
mod login;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::{InventoryPage, ProductInfo, SortOrder};
pub use login::LoginPage;

/// Common contract of a storefront screen.
#[async_trait]
pub trait PageModel {
    /// Path of this screen under the base URL
    fn url_path(&self) -> &'static str;

    /// Whether the screen's key elements are rendered
    async fn is_loaded(&self) -> SuiteResult<bool>;

    /// Poll until the screen reports loaded.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Timeout`] if the screen never settles.
    async fn wait_until_loaded(&self) -> SuiteResult<()> {
        let options = WaitOptions::default();
        let deadline = Instant::now() + options.timeout;
        loop {
            if self.is_loaded().await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::Timeout {
                    what: format!("{} to finish loading", self.url_path()),
                    ms: options.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(options.poll_interval).await;
        }
    }
}

/// Bind a selector to the session's page with the configured action budget.
pub(crate) fn bound(session: &Session, selector: Selector) -> Locator {
    Locator::new(session.page().clone(), selector)
        .with_timeout(session.config().action_timeout)
}

/// The cart badge, shared by the inventory and cart headers.
pub(crate) fn cart_badge(session: &Session) -> Locator {
    bound(session, Selector::css(".shopping_cart_badge"))
}

/// Read the cart badge count; an absent badge means an empty cart.
pub(crate) async fn read_badge(session: &Session) -> SuiteResult<usize> {
    let badge = cart_badge(session);
    if badge.is_visible().await? {
        parse::count(&badge.text().await?)
    } else {
        Ok(0)
    }
}
