//! Browser session control over the Chrome DevTools Protocol.
//!
//! One [`Session`] owns one launched Chromium instance, the spawned CDP
//! event handler task, and one page. Each test creates its own session and
//! closes it at the end; nothing is shared across tests.

use base64::Engine;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use chromiumoxide::page::Page;
use futures::StreamExt;

use crate::config::SuiteConfig;
use crate::result::{SuiteError, SuiteResult};

/// An open browser context plus its current page
#[derive(Debug)]
pub struct Session {
    browser: Browser,
    handler: tokio::task::JoinHandle<()>,
    page: Page,
    config: SuiteConfig,
}

impl Session {
    /// Launch a headless browser and open a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::BrowserLaunch`] if Chromium cannot be started,
    /// or [`SuiteError::Page`] if the initial page cannot be created.
    pub async fn launch(config: SuiteConfig) -> SuiteResult<Self> {
        crate::fixture::init_tracing();

        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport_width, config.viewport_height)
            .arg("--disable-gpu");

        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder
            .build()
            .map_err(|message| SuiteError::BrowserLaunch { message })?;

        let (browser, mut cdp_handler) =
            Browser::launch(cdp_config)
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        let handler = tokio::spawn(async move {
            while let Some(event) = cdp_handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;

        tracing::info!(base_url = %config.base_url, headless = config.headless, "session started");

        Ok(Self {
            browser,
            handler,
            page,
            config,
        })
    }

    /// The live page driven by this session
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The configuration this session was launched with
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Navigate to a path under the configured base URL and wait for load.
    ///
    /// The whole request-and-load sequence is bounded by the configured
    /// navigation budget.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Navigation`] if the page fails to load or the
    /// navigation budget expires.
    pub async fn goto(&self, path: &str) -> SuiteResult<()> {
        let url = self.config.url_for(path);
        tracing::debug!(%url, "navigating");
        let navigation = async {
            self.page.goto(url.clone()).await?;
            self.page.wait_for_navigation().await?;
            Ok::<(), chromiumoxide::error::CdpError>(())
        };
        match tokio::time::timeout(self.config.navigation_timeout, navigation).await {
            Ok(loaded) => loaded.map_err(|e| SuiteError::Navigation {
                url,
                message: e.to_string(),
            }),
            Err(_) => Err(SuiteError::Navigation {
                url,
                message: format!(
                    "did not load within {}ms",
                    self.config.navigation_timeout.as_millis()
                ),
            }),
        }
    }

    /// The fully qualified URL the page is currently at.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Page`] if the URL cannot be read.
    pub async fn current_url(&self) -> SuiteResult<String> {
        self.page
            .url()
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?
            .ok_or_else(|| SuiteError::Page {
                message: "page reports no url".to_string(),
            })
    }

    /// The path component of the current URL, relative to the base URL.
    pub async fn current_path(&self) -> SuiteResult<String> {
        let url = self.current_url().await?;
        let base = self.config.base_url.trim_end_matches('/');
        let path = url.strip_prefix(base).unwrap_or(url.as_str());
        Ok(if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        })
    }

    /// Capture a PNG screenshot of the current viewport.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Screenshot`] if capture or decoding fails.
    pub async fn screenshot(&self) -> SuiteResult<Vec<u8>> {
        let params = CaptureScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();

        let captured = self
            .page
            .execute(params)
            .await
            .map_err(|e| SuiteError::Screenshot {
                message: e.to_string(),
            })?;

        base64::engine::general_purpose::STANDARD
            .decode(&captured.data)
            .map_err(|e| SuiteError::Screenshot {
                message: e.to_string(),
            })
    }

    /// Close the browser and wait for the handler task to drain.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::BrowserLaunch`] if shutdown fails.
    pub async fn close(mut self) -> SuiteResult<()> {
        tracing::debug!("closing session");
        self.browser
            .close()
            .await
            .map_err(|e| SuiteError::BrowserLaunch {
                message: e.to_string(),
            })?;
        let _ = self.handler.await;
        Ok(())
    }
}
