//! End-to-end flows through the storefront router.
//!
//! Every action is a form post answered with a redirect; the tests follow
//! up with `GET /` or `GET /toast` to see what the shopper would see.

use std::time::Duration;

use axum::http::StatusCode;

use fungi_fresh_integration_tests::{Browser, test_state};
use fungi_fresh_storefront::app;

fn assert_redirect(response: &fungi_fresh_integration_tests::TestResponse, to: &str) {
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
    assert_eq!(response.location.as_deref(), Some(to));
}

async fn signed_in(email: &str) -> Browser {
    let mut browser = Browser::new();
    browser.post("/auth/open", &[]).await;
    let response = browser
        .post("/auth/login", &[("email", email), ("password", "secret")])
        .await;
    assert_redirect(&response, "/");
    browser
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut browser = Browser::new();
    let response = browser.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_guest_home_page() {
    let mut browser = Browser::new();
    let response = browser.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Our Harvest"));
    assert!(response.body.contains("Grow Kit"));
    assert!(response.body.contains("Guest"));
    assert!(!response.body.contains("Your Basket"));
}

#[tokio::test]
async fn test_navigation_scrolls_to_top() {
    let mut browser = Browser::new();

    let response = browser.post("/view/orders", &[]).await;
    assert_redirect(&response, "/#top");
    let page = browser.page().await;
    assert!(page.contains("My Orders"));
    assert!(page.contains("FF-8842"));

    browser.post("/view/settings", &[]).await;
    assert!(browser.page().await.contains("Profile Settings"));

    browser.post("/view/home", &[]).await;
    assert!(browser.page().await.contains("Our Harvest"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let mut browser = Browser::new();
    let response = browser.post("/view/checkout", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nav_links_return_home_from_orders() {
    let mut browser = Browser::new();
    browser.post("/view/orders", &[]).await;
    browser.post("/menu/mobile", &[]).await;

    let page = browser.page().await;
    assert!(page.contains("mobile-menu"));
    assert!(page.contains(r#"action="/view/home?section=shop""#));
    assert!(!page.contains(r#"id="shop""#));

    let response = browser.post("/view/home?section=shop", &[]).await;
    assert_redirect(&response, "/#shop");

    let page = browser.page().await;
    assert!(page.contains(r#"id="shop""#));
    assert!(!page.contains("mobile-menu"));
    assert!(!page.contains("My Orders"));
}

#[tokio::test]
async fn test_unknown_section_is_not_found() {
    let mut browser = Browser::new();

    let response = browser.post("/view/home?section=cellar", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = browser.post("/view/orders?section=shop", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menus_toggle() {
    let mut browser = Browser::new();

    browser.post("/menu/user", &[]).await;
    assert!(browser.page().await.contains("Login / Register"));

    browser.post("/menu/user", &[]).await;
    assert!(!browser.page().await.contains("Login / Register"));

    browser.post("/menu/mobile", &[]).await;
    assert!(browser.page().await.contains("mobile-menu"));
}

// =============================================================================
// Basket
// =============================================================================

#[tokio::test]
async fn test_basket_flow() {
    let mut browser = Browser::new();

    let response = browser.post("/basket/add", &[("product_id", "1")]).await;
    assert_redirect(&response, "/");
    assert!(
        browser
            .toast()
            .await
            .contains("Button Mushroom added to your basket!")
    );

    browser.post("/basket/add", &[("product_id", "3")]).await;
    browser.post("/basket/open", &[]).await;
    let page = browser.page().await;
    assert!(page.contains("Your Basket"));
    assert!(page.contains("<strong>₹330</strong>"));

    // Cart ids are handed out from 1 in order of adding.
    browser.post("/basket/remove", &[("cart_id", "1")]).await;
    let page = browser.page().await;
    assert!(page.contains("<strong>₹150</strong>"));

    // Removing it again is a no-op.
    browser.post("/basket/remove", &[("cart_id", "1")]).await;
    assert!(browser.page().await.contains("<strong>₹150</strong>"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut browser = Browser::new();
    let response = browser.post("/basket/add", &[("product_id", "99")]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_keeps_basket() {
    let mut browser = Browser::new();
    browser.post("/basket/add", &[("product_id", "6")]).await;
    browser.post("/basket/open", &[]).await;

    browser.post("/basket/checkout", &[]).await;

    let page = browser.page().await;
    assert!(!page.contains("Your Basket"));
    assert!(page.contains("Proceeding to checkout..."));

    browser.post("/basket/open", &[]).await;
    assert!(browser.page().await.contains("<strong>₹320</strong>"));
}

#[tokio::test]
async fn test_baskets_are_per_session() {
    let router = app(test_state());
    let mut first = Browser::with_app(router.clone());
    let mut second = Browser::with_app(router);

    first.post("/basket/add", &[("product_id", "2")]).await;
    first.post("/basket/open", &[]).await;
    second.post("/basket/open", &[]).await;

    assert!(first.page().await.contains("<strong>₹120</strong>"));
    assert!(second.page().await.contains("Basket is empty"));
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_login_greets_shopper() {
    let mut browser = signed_in("alice@example.com").await;

    let page = browser.page().await;
    assert!(page.contains("Alice"));
    assert!(!page.contains("Guest"));
    assert!(!page.contains("Sign In"));
    assert!(page.contains("Welcome back to FungiFresh, Alice!"));
}

#[tokio::test]
async fn test_empty_login_keeps_modal_open() {
    let mut browser = Browser::new();
    browser.post("/auth/open", &[]).await;

    let response = browser.post("/auth/login", &[("email", "")]).await;
    assert_redirect(&response, "/");

    let page = browser.page().await;
    assert!(page.contains("Sign In"));
    assert!(page.contains("Guest"));
}

#[tokio::test]
async fn test_logout_from_settings_returns_home() {
    let mut browser = signed_in("ravi@farm.in").await;
    browser.post("/view/settings", &[]).await;
    assert!(browser.page().await.contains("+91 98765 43210"));

    browser.post("/auth/logout", &[]).await;

    let page = browser.page().await;
    assert!(page.contains("Our Harvest"));
    assert!(page.contains("Guest"));
    let toast = browser.toast().await;
    assert!(toast.contains("toast-info"));
    assert!(toast.contains("You have been signed out successfully."));
}

#[tokio::test]
async fn test_account_actions() {
    let mut browser = signed_in("nisha@farm.in").await;

    browser.post("/account/profile", &[("name", "Nisha")]).await;
    assert!(browser.toast().await.contains("Profile updated successfully!"));

    browser.post("/account/delete", &[]).await;
    assert!(browser.page().await.contains("Guest"));
}

// =============================================================================
// Contact and toasts
// =============================================================================

#[tokio::test]
async fn test_contact_form() {
    let mut browser = Browser::new();

    let response = browser
        .post(
            "/contact",
            &[("name", "Asha"), ("email", ""), ("message", "Hello")],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(browser.toast().await.trim().is_empty());

    let response = browser
        .post(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("message", "Do you deliver to Pune?"),
            ],
        )
        .await;
    assert_redirect(&response, "/");
    assert!(
        browser
            .toast()
            .await
            .contains("Thank you! Our farm team will contact you shortly.")
    );
}

#[tokio::test]
async fn test_toast_dismiss() {
    let mut browser = Browser::new();
    browser.post("/basket/add", &[("product_id", "4")]).await;
    assert!(!browser.toast().await.trim().is_empty());

    browser.post("/toast/dismiss", &[]).await;
    assert!(browser.toast().await.trim().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_toast_expires_after_four_seconds() {
    let mut browser = Browser::new();
    browser.post("/basket/add", &[("product_id", "5")]).await;

    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(browser.toast().await.contains("Dry Mushroom added"));

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert!(browser.toast().await.trim().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_new_toast_survives_old_deadline() {
    let mut browser = Browser::new();
    browser.post("/basket/add", &[("product_id", "1")]).await;

    tokio::time::sleep(Duration::from_millis(2000)).await;
    browser.post("/basket/add", &[("product_id", "2")]).await;

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert!(browser.toast().await.contains("Oyster Mushrooms added"));

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(browser.toast().await.trim().is_empty());
}
