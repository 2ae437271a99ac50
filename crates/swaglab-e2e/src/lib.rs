//! End-to-end UI test suite for the Swag Labs demo storefront.
//!
//! The suite drives a real Chromium instance over the Chrome DevTools
//! Protocol and exercises the storefront's login, inventory, cart and
//! three-screen checkout flows through page objects.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐
//! │ Test scenario│──►│ Page object  │──►│ Locator      │──►│ CDP /      │
//! │ (tests/)     │   │ (pages::*)   │   │ (auto-wait)  │   │ rendered   │
//! │              │   │              │   │              │   │ DOM        │
//! └──────────────┘   └──────────────┘   └──────────────┘   └────────────┘
//! ```
//!
//! Each scenario owns a fresh [`Session`]; page objects expose one
//! user-observable interaction or read per method, and all verification
//! happens in the scenario.
//!
//! Browser-driving scenarios live under `tests/` and are gated on
//! `SWAGLAB_E2E=1` since they need a Chromium binary and network access to
//! the deployment under test.

#![warn(missing_docs)]

pub mod browser;
pub mod config;
pub mod fixture;
pub mod locator;
pub mod messages;
pub mod pages;
pub mod parse;
pub mod products;
pub mod result;
pub mod wait;

pub use browser::Session;
pub use config::SuiteConfig;
pub use locator::{Locator, Selector};
pub use pages::{
    CartPage, CheckoutPage, InventoryPage, LoginPage, PageModel, ProductInfo, SortOrder,
};
pub use result::{SuiteError, SuiteResult};
pub use wait::WaitOptions;
