//! Checkout submission through the HTTP surface.

use axum::http::StatusCode;
use cottonfront_integration_tests::TestClient;

#[tokio::test]
async fn test_empty_checkout_is_blocked() {
    let mut client = TestClient::new();

    let resp = client.post_form("/checkout", &[("full_name", "Ada")]).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("role=\"alert\""));
    assert!(resp.body.contains("Your cart is empty."));
    assert!(!resp.body.contains("Thank you"));
    assert!(resp.header("hx-trigger").is_none());
}

#[tokio::test]
async fn test_checkout_clears_cart_and_thanks_customer() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "jurassic-park")]).await;
    client.post_form("/cart/add", &[("key", "jurassic-park")]).await;

    let resp = client.post_form("/checkout", &[("full_name", "Ada Lovelace")]).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Thank you, Ada Lovelace! Your order has been placed."));
    assert_eq!(client.cart_count().await, 0);

    // The cart is now empty, so a second submission is blocked.
    let again = client.post_form("/checkout", &[]).await;
    assert_eq!(again.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_blank_name_defaults_to_customer() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "bugs-bunny")]).await;

    let resp = client.post_form("/checkout", &[("full_name", "   ")]).await;

    assert!(resp.body.contains("Thank you, Customer! Your order has been placed."));
}

#[tokio::test]
async fn test_checkout_page_shows_summary() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "samurai-jack")]).await;

    let page = client.get("/checkout").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Samurai Jack: Warrior"));
    assert!(page.body.contains("rs-1699"));
    assert!(page.body.contains("name=\"full_name\""));
}

#[tokio::test]
async fn test_checkout_summary_refreshes_from_its_own_fragment() {
    let mut client = TestClient::new();

    let page = client.get("/checkout").await;
    assert!(page.body.contains("hx-get=\"/cart/summary\""));
    assert!(!page.body.contains("hx-select"));

    let empty = client.get("/cart/summary").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert!(empty.body.contains("Your cart is empty."));

    client.post_form("/cart/add", &[("key", "samurai-jack")]).await;
    let filled = client.get("/cart/summary").await;
    assert!(filled.body.contains("Samurai Jack: Warrior"));
    assert!(filled.body.contains("rs-1699"));
    assert!(!filled.body.contains("Clear cart"));

    client.post_form("/cart/clear", &[]).await;
    let cleared = client.get("/cart/summary").await;
    assert!(cleared.body.contains("Your cart is empty."));
}
