//! Per-test setup helpers.
//!
//! Each scenario owns a fully independent session; the shared login step is
//! an explicit helper invoked at the start of a test, never shared mutable
//! state between tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::browser::Session;
use crate::config::SuiteConfig;
use crate::pages::{InventoryPage, LoginPage, PageModel};
use crate::result::SuiteResult;

static TRACING: Once = Once::new();

/// Initialize tracing once per process.
///
/// Honors `RUST_LOG`; defaults to `info` for the suite. Safe to call from
/// every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("swaglab_e2e=info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Launch a fresh session and sign in with the configured credentials.
///
/// Waits for the inventory screen before returning, so callers start from a
/// known state.
///
/// # Errors
///
/// Returns any launch, navigation or login failure.
pub async fn logged_in(config: SuiteConfig) -> SuiteResult<Session> {
    let username = config.username.clone();
    let password = config.password.clone();

    let session = Session::launch(config).await?;
    {
        let login = LoginPage::new(&session);
        login.open().await?;
        login.login(&username, &password).await?;

        let inventory = InventoryPage::new(&session);
        inventory.wait_until_loaded().await?;
    }
    Ok(session)
}
