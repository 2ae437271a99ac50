//! Cart scenarios: line items track what was added, removals shrink the
//! rendered set one at a time.

mod common;

use common::require_browser;
use swaglab_e2e::{fixture, products, CartPage, InventoryPage, PageModel};

#[tokio::test]
async fn adding_two_products_yields_two_line_items() {
    require_browser!();
    let session = fixture::logged_in(common::config())
        .await
        .expect("logged-in session");
    let inventory = InventoryPage::new(&session);

    inventory
        .add_to_cart(products::BACKPACK)
        .await
        .expect("add backpack");
    inventory
        .add_to_cart(products::BIKE_LIGHT)
        .await
        .expect("add bike light");
    inventory.go_to_cart().await.expect("open cart");

    let cart = CartPage::new(&session);
    cart.wait_until_loaded().await.expect("cart should render");

    assert_eq!(cart.item_count().await.expect("count readable"), 2);
    for slug in [products::BACKPACK, products::BIKE_LIGHT] {
        let name = products::display_name(slug).expect("known slug");
        assert!(
            cart.has_item(name).await.expect("item readable"),
            "cart should list {name}"
        );
        assert_eq!(cart.item_quantity(name).await.expect("quantity"), 1);
    }

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn removing_one_line_item_shrinks_the_cart_by_one() {
    require_browser!();
    let session = fixture::logged_in(common::config())
        .await
        .expect("logged-in session");
    let inventory = InventoryPage::new(&session);

    inventory
        .add_to_cart(products::BACKPACK)
        .await
        .expect("add backpack");
    inventory
        .add_to_cart(products::ONESIE)
        .await
        .expect("add onesie");
    inventory.go_to_cart().await.expect("open cart");

    let cart = CartPage::new(&session);
    cart.wait_until_loaded().await.expect("cart should render");
    assert_eq!(cart.item_count().await.expect("count readable"), 2);

    cart.remove(products::ONESIE).await.expect("remove onesie");

    assert_eq!(cart.item_count().await.expect("count readable"), 1);
    let onesie = products::display_name(products::ONESIE).expect("known slug");
    assert!(
        !cart.has_item(onesie).await.expect("item readable"),
        "removed item should be gone"
    );

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn remove_all_empties_the_cart() {
    require_browser!();
    let session = fixture::logged_in(common::config())
        .await
        .expect("logged-in session");
    let inventory = InventoryPage::new(&session);

    for slug in [products::BACKPACK, products::BIKE_LIGHT, products::BOLT_T_SHIRT] {
        inventory.add_to_cart(slug).await.expect("add product");
    }
    inventory.go_to_cart().await.expect("open cart");

    let cart = CartPage::new(&session);
    cart.wait_until_loaded().await.expect("cart should render");
    assert_eq!(cart.item_count().await.expect("count readable"), 3);

    cart.remove_all().await.expect("remove_all should drain");

    assert_eq!(cart.item_count().await.expect("count readable"), 0);
    assert_eq!(cart.badge_count().await.expect("badge readable"), 0);

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn continue_shopping_returns_to_the_inventory() {
    require_browser!();
    let session = fixture::logged_in(common::config())
        .await
        .expect("logged-in session");
    let inventory = InventoryPage::new(&session);

    inventory
        .add_to_cart(products::BACKPACK)
        .await
        .expect("add backpack");
    inventory.go_to_cart().await.expect("open cart");

    let cart = CartPage::new(&session);
    cart.wait_until_loaded().await.expect("cart should render");
    cart.continue_shopping().await.expect("continue shopping");

    inventory
        .wait_until_loaded()
        .await
        .expect("inventory should render again");
    let path = session.current_path().await.expect("url readable");
    assert!(path.ends_with("/inventory.html"), "got {path}");

    session.close().await.expect("session should close");
}

#[tokio::test]
async fn line_item_prices_match_the_listing() {
    require_browser!();
    let session = fixture::logged_in(common::config())
        .await
        .expect("logged-in session");
    let inventory = InventoryPage::new(&session);

    let name = products::display_name(products::BIKE_LIGHT).expect("known slug");
    let listed_price = inventory.product_price(name).await.expect("listing price");

    inventory
        .add_to_cart(products::BIKE_LIGHT)
        .await
        .expect("add bike light");
    inventory.go_to_cart().await.expect("open cart");

    let cart = CartPage::new(&session);
    cart.wait_until_loaded().await.expect("cart should render");

    let line_price = cart.item_price(name).await.expect("line price");
    assert!(
        (line_price - listed_price).abs() < f64::EPSILON,
        "cart shows {line_price}, listing showed {listed_price}"
    );
    assert!(cart.checkout_enabled().await.expect("checkout control"));

    session.close().await.expect("session should close");
}
