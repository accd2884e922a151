//! Session cart behavior.

use otthub_core::PlanId;
use otthub_integration_tests::{TestApp, location};

/// Number of cart rows linking to `/plan/{id}`.
fn rows_for(body: &str, id: u32) -> usize {
    body.matches(&format!("<td><a href=\"/plan/{id}\">")).count()
}

#[tokio::test]
async fn test_add_redirects_to_cart_with_notice() {
    let app = TestApp::spawn().await;

    let resp = app.get("/add-to-cart/1").await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), Some("/cart"));

    let body = app.page("/cart").await;
    assert!(body.contains("Added to cart"));
    assert!(body.contains("Netflix Premium"));
    assert!(body.contains("₹199"));
}

#[tokio::test]
async fn test_notice_is_shown_once() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/1").await;

    assert!(app.page("/cart").await.contains("Added to cart"));
    assert!(!app.page("/cart").await.contains("Added to cart"));
}

#[tokio::test]
async fn test_adding_twice_keeps_one_entry() {
    let app = TestApp::spawn().await;

    app.get("/add-to-cart/2").await;
    app.get("/add-to-cart/2").await;

    let body = app.page("/cart").await;
    assert_eq!(rows_for(&body, 2), 1);
    assert!(body.contains("<th class=\"total\">₹149</th>"));
}

#[tokio::test]
async fn test_add_unknown_plan_flashes_and_returns_to_plans() {
    let app = TestApp::spawn().await;

    let resp = app.get("/add-to-cart/42").await;
    assert_eq!(location(&resp), Some("/plans"));

    assert!(app.page("/plans").await.contains("Invalid product"));
    assert!(app.page("/cart").await.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_add_out_of_range_id_is_invalid_product() {
    let app = TestApp::spawn().await;

    for segment in ["4294967296", "abc"] {
        let resp = app.get(&format!("/add-to-cart/{segment}")).await;
        assert_eq!(location(&resp), Some("/plans"), "{segment}");
        assert!(app.page("/plans").await.contains("Invalid product"));
    }
    assert!(app.page("/cart").await.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_remove_out_of_range_id_is_noop() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/5").await;

    for segment in ["4294967296", "-1"] {
        let resp = app.get(&format!("/remove/{segment}")).await;
        assert_eq!(location(&resp), Some("/cart"), "{segment}");
    }

    let body = app.page("/cart").await;
    assert_eq!(rows_for(&body, 5), 1);
    assert!(body.contains("<th class=\"total\">₹99</th>"));
}

#[tokio::test]
async fn test_remove_absent_id_is_noop() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/5").await;
    let before = app.page("/cart").await;

    let resp = app.get("/remove/3").await;
    assert_eq!(location(&resp), Some("/cart"));

    let after = app.page("/cart").await;
    assert_eq!(rows_for(&after, 5), 1);
    assert!(before.contains("<th class=\"total\">₹99</th>"));
    assert!(after.contains("<th class=\"total\">₹99</th>"));
}

#[tokio::test]
async fn test_remove_present_id() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/1").await;
    app.get("/add-to-cart/5").await;

    app.get("/remove/1").await;

    let body = app.page("/cart").await;
    assert_eq!(rows_for(&body, 1), 0);
    assert_eq!(rows_for(&body, 5), 1);
    assert!(body.contains("<th class=\"total\">₹99</th>"));
}

#[tokio::test]
async fn test_stale_ids_are_skipped_in_total() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/3").await;
    app.get("/add-to-cart/5").await;

    app.state.catalog().delete(PlanId::new(3));

    let resp = app.get("/cart").await;
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.expect("body");
    assert!(!body.contains("Disney+ Hotstar"));
    assert_eq!(rows_for(&body, 5), 1);
    assert!(body.contains("<th class=\"total\">₹99</th>"));
}

#[tokio::test]
async fn test_header_shows_cart_count() {
    let app = TestApp::spawn().await;
    app.get("/add-to-cart/1").await;
    app.get("/add-to-cart/2").await;

    assert!(app.page("/").await.contains("<span class=\"badge\">2</span>"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let app = TestApp::spawn().await;
    let other = app.new_visitor();

    app.get("/add-to-cart/1").await;

    assert_eq!(rows_for(&app.page("/cart").await, 1), 1);
    assert!(other.page("/cart").await.contains("Your cart is empty"));
}
