//! Suite configuration.
//!
//! Defaults target the public Swag Labs deployment; every knob can be
//! overridden programmatically or through `SWAGLAB_*` environment variables
//! so the same suite runs against a local deployment in CI.

use std::time::Duration;

use crate::wait::{DEFAULT_ACTION_TIMEOUT_MS, DEFAULT_NAVIGATION_TIMEOUT_MS};

/// Default deployment of the application under test
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// The standard fixture account
pub const STANDARD_USER: &str = "standard_user";

/// Password shared by all fixture accounts
pub const STANDARD_PASSWORD: &str = "secret_sauce";

/// Configuration for one suite run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the application under test
    pub base_url: String,
    /// Account used by the logged-in fixture
    pub username: String,
    /// Password used by the logged-in fixture
    pub password: String,
    /// Run the browser headless
    pub headless: bool,
    /// Keep the Chromium sandbox enabled (disable in containers)
    pub sandbox: bool,
    /// Chromium executable override (None = auto-detect)
    pub chrome_path: Option<String>,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Budget for element-level actions and reads
    pub action_timeout: Duration,
    /// Budget for full-page navigation
    pub navigation_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: STANDARD_USER.to_string(),
            password: STANDARD_PASSWORD.to_string(),
            headless: true,
            sandbox: true,
            chrome_path: None,
            viewport_width: 1280,
            viewport_height: 900,
            action_timeout: Duration::from_millis(DEFAULT_ACTION_TIMEOUT_MS),
            navigation_timeout: Duration::from_millis(DEFAULT_NAVIGATION_TIMEOUT_MS),
        }
    }
}

impl SuiteConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the process environment.
    ///
    /// Recognized variables: `SWAGLAB_BASE_URL`, `SWAGLAB_USERNAME`,
    /// `SWAGLAB_PASSWORD`, `SWAGLAB_HEADFUL` (any value disables headless),
    /// `SWAGLAB_NO_SANDBOX` (any value disables the sandbox) and
    /// `CHROME_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup("SWAGLAB_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(username) = lookup("SWAGLAB_USERNAME") {
            config.username = username;
        }
        if let Some(password) = lookup("SWAGLAB_PASSWORD") {
            config.password = password;
        }
        if lookup("SWAGLAB_HEADFUL").is_some() {
            config.headless = false;
        }
        if lookup("SWAGLAB_NO_SANDBOX").is_some() {
            config.sandbox = false;
        }
        config.chrome_path = lookup("CHROME_PATH");
        config
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the fixture credentials
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Disable the Chromium sandbox (containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set the Chromium executable path
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the element action budget
    #[must_use]
    pub const fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout;
        self
    }

    /// Set the full-page navigation budget
    #[must_use]
    pub const fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Resolve a path against the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_public_deployment() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.username, STANDARD_USER);
        assert!(config.headless);
        assert!(config.sandbox);
        assert!(config.chrome_path.is_none());
    }

    #[test]
    fn url_for_joins_without_duplicate_slashes() {
        let config = SuiteConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.url_for("/cart.html"), "http://localhost:8080/cart.html");
        assert_eq!(config.url_for("cart.html"), "http://localhost:8080/cart.html");
        assert_eq!(config.url_for("/"), "http://localhost:8080/");
        assert_eq!(config.url_for(""), "http://localhost:8080/");
    }

    #[test]
    fn builder_methods_chain() {
        let config = SuiteConfig::new()
            .with_credentials("visual_user", "secret_sauce")
            .with_headless(false)
            .with_no_sandbox()
            .with_viewport(800, 600)
            .with_action_timeout(Duration::from_secs(2))
            .with_navigation_timeout(Duration::from_secs(10));

        assert_eq!(config.username, "visual_user");
        assert!(!config.headless);
        assert!(!config.sandbox);
        assert_eq!(config.viewport_width, 800);
        assert_eq!(config.action_timeout, Duration::from_secs(2));
        assert_eq!(config.navigation_timeout, Duration::from_secs(10));
    }

    #[test]
    fn lookup_overrides_apply() {
        let config = SuiteConfig::from_lookup(|key| match key {
            "SWAGLAB_BASE_URL" => Some("http://127.0.0.1:4444".to_string()),
            "SWAGLAB_USERNAME" => Some("problem_user".to_string()),
            "SWAGLAB_NO_SANDBOX" => Some("1".to_string()),
            _ => None,
        });

        assert_eq!(config.base_url, "http://127.0.0.1:4444");
        assert_eq!(config.username, "problem_user");
        assert_eq!(config.password, STANDARD_PASSWORD);
        assert!(config.headless);
        assert!(!config.sandbox);
    }

    #[test]
    fn headful_override_disables_headless() {
        let config = SuiteConfig::from_lookup(|key| {
            (key == "SWAGLAB_HEADFUL").then(|| "yes".to_string())
        });
        assert!(!config.headless);
    }
}
