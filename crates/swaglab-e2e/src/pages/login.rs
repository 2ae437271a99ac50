//! Login screen page object.

use async_trait::async_trait;

use super::{bound, PageModel};
use crate::browser::Session;
use crate::locator::{Locator, Selector};
use crate::result::SuiteResult;

/// Selector table for the login screen. All interactive controls carry
/// stable `data-test` attributes.
mod sel {
    use crate::locator::Selector;

    pub fn username() -> Selector {
        Selector::data_test("username")
    }

    pub fn password() -> Selector {
        Selector::data_test("password")
    }

    pub fn login_button() -> Selector {
        Selector::data_test("login-button")
    }

    pub fn error() -> Selector {
        Selector::data_test("error")
    }
}

/// The login screen
#[derive(Debug)]
pub struct LoginPage<'s> {
    session: &'s Session,
}

impl<'s> LoginPage<'s> {
    /// Bind to a session
    #[must_use]
    pub const fn new(session: &'s Session) -> Self {
        Self { session }
    }

    fn locator(&self, selector: Selector) -> Locator {
        bound(self.session, selector)
    }

    /// Navigate to the login screen.
    pub async fn open(&self) -> SuiteResult<()> {
        self.session.goto(self.url_path()).await
    }

    /// Fill both credential fields and submit.
    ///
    /// A successful attempt navigates to the inventory; a failed one renders
    /// an inline banner. The suite only observes either outcome.
    pub async fn login(&self, username: &str, password: &str) -> SuiteResult<()> {
        tracing::info!(username, "logging in");
        self.locator(sel::username()).fill(username).await?;
        self.locator(sel::password()).fill(password).await?;
        self.locator(sel::login_button()).click().await
    }

    /// Text of the current validation banner, waiting for it to render.
    pub async fn error_message(&self) -> SuiteResult<String> {
        self.locator(sel::error()).text().await
    }

    /// Whether a validation banner is currently visible.
    pub async fn error_visible(&self) -> SuiteResult<bool> {
        self.locator(sel::error()).is_visible().await
    }
}

#[async_trait]
impl PageModel for LoginPage<'_> {
    fn url_path(&self) -> &'static str {
        "/"
    }

    async fn is_loaded(&self) -> SuiteResult<bool> {
        self.locator(sel::login_button()).is_visible().await
    }
}
