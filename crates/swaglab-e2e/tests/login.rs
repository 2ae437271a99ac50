//! Login scenarios: valid credentials reach the inventory, every invalid
//! attempt surfaces the exact expected banner.

mod common;

use std::time::Duration;

use common::require_browser;
use swaglab_e2e::{config, messages, LoginPage, PageModel, Session, SuiteError};

#[tokio::test]
async fn valid_credentials_reach_the_inventory() {
    require_browser!();
    let session = Session::launch(common::config())
        .await
        .expect("browser should launch");

    let login = LoginPage::new(&session);
    login.open().await.expect("login screen should open");
    login
        .login(config::STANDARD_USER, config::STANDARD_PASSWORD)
        .await
        .expect("login should submit");

    let inventory = swaglab_e2e::InventoryPage::new(&session);
    inventory
        .wait_until_loaded()
        .await
        .expect("inventory should render after login");

    let path = session.current_path().await.expect("url should be readable");
    assert!(
        path.ends_with("/inventory.html"),
        "expected inventory path, got {path}"
    );

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn invalid_credentials_surface_a_banner() {
    require_browser!();
    let session = Session::launch(common::config())
        .await
        .expect("browser should launch");

    let login = LoginPage::new(&session);
    login.open().await.expect("login screen should open");
    login
        .login("invalid_user", "wrong_password")
        .await
        .expect("login should submit");

    let banner = login.error_message().await.expect("banner should render");
    assert!(login.error_visible().await.expect("visibility readable"));
    assert_eq!(banner, messages::LOGIN_INVALID);

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn navigation_budget_bounds_page_loads() {
    require_browser!();
    let config = common::config().with_navigation_timeout(Duration::from_millis(1));
    let session = Session::launch(config).await.expect("browser should launch");

    let result = session.goto("/").await;
    assert!(
        matches!(result, Err(SuiteError::Navigation { .. })),
        "a 1ms budget should expire before the page loads: {result:?}"
    );

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn blank_username_is_rejected() {
    require_browser!();
    let session = Session::launch(common::config())
        .await
        .expect("browser should launch");

    let login = LoginPage::new(&session);
    login.open().await.expect("login screen should open");
    login
        .login("", config::STANDARD_PASSWORD)
        .await
        .expect("login should submit");

    let banner = login.error_message().await.expect("banner should render");
    assert_eq!(banner, messages::LOGIN_USERNAME_REQUIRED);

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn blank_password_is_rejected() {
    require_browser!();
    let session = Session::launch(common::config())
        .await
        .expect("browser should launch");

    let login = LoginPage::new(&session);
    login.open().await.expect("login screen should open");
    login
        .login(config::STANDARD_USER, "")
        .await
        .expect("login should submit");

    let banner = login.error_message().await.expect("banner should render");
    assert_eq!(banner, messages::LOGIN_PASSWORD_REQUIRED);

    session.close().await.expect("session should close");
}
