//! Shared setup for browser-driving scenarios.
//!
//! These scenarios need a Chromium binary and network access to the
//! deployment under test; they are gated on `SWAGLAB_E2E=1`.
//!
//! Run:
//! ```bash
//! SWAGLAB_E2E=1 cargo test -p swaglab-e2e -- --nocapture
//! ```

use swaglab_e2e::{fixture, SuiteConfig};

/// Skip the current test unless browser scenarios are enabled.
macro_rules! require_browser {
    () => {
        if !common::browser_enabled() {
            eprintln!(
                "[SKIP] {} requires SWAGLAB_E2E=1 (headless Chromium + network)",
                module_path!()
            );
            return;
        }
    };
}

pub(crate) use require_browser;

/// Whether browser scenarios are enabled for this run.
pub fn browser_enabled() -> bool {
    std::env::var("SWAGLAB_E2E").is_ok()
}

/// Suite configuration for this run, honoring `SWAGLAB_*` overrides.
pub fn config() -> SuiteConfig {
    fixture::init_tracing();
    SuiteConfig::from_env()
}
