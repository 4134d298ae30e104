//! Quick view modal through the HTTP surface.

use axum::http::StatusCode;
use cottonfront_integration_tests::TestClient;

#[tokio::test]
async fn test_unknown_product_is_ignored() {
    let mut client = TestClient::new();

    let resp = client.get("/products/not-a-tee/quick-view").await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn test_open_select_size_and_add() {
    let mut client = TestClient::new();

    let open = client.get("/products/samurai-jack/quick-view").await;
    assert_eq!(open.status, StatusCode::OK);
    assert!(open.body.contains("Samurai Jack: Warrior"));
    assert!(open.body.contains("Honor and style collide"));

    let sized = client.post_form("/quick-view/size", &[("size", "xl")]).await;
    assert_eq!(sized.status, StatusCode::OK);
    assert!(sized.body.contains("is-selected"));

    let added = client.post_form("/quick-view/add", &[]).await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.header("hx-trigger"), Some("cart-updated"));
    assert!(added.body.contains("Added to cart!"));
    assert!(added.body.contains("id=\"quick-view\" hx-swap-oob"));
    assert_eq!(client.cart_count().await, 1);

    // Confirming closed the modal, so a second confirm adds nothing.
    let again = client.post_form("/quick-view/add", &[]).await;
    assert_eq!(again.status, StatusCode::NO_CONTENT);
    assert_eq!(client.cart_count().await, 1);
}

#[tokio::test]
async fn test_size_does_not_split_lines() {
    let mut client = TestClient::new();

    for size in ["S", "L"] {
        client.get("/products/spider-man/quick-view").await;
        client.post_form("/quick-view/size", &[("size", size)]).await;
        client.post_form("/quick-view/add", &[]).await;
    }

    let drawer = client.get("/cart/drawer").await;
    assert_eq!(drawer.body.matches("class=\"cart-line\"").count(), 1);
    assert_eq!(client.cart_count().await, 2);
}

#[tokio::test]
async fn test_close_then_confirm_is_noop() {
    let mut client = TestClient::new();

    client.get("/products/bugs-bunny/quick-view").await;
    let closed = client.post_form("/quick-view/close", &[]).await;
    assert_eq!(closed.status, StatusCode::OK);
    assert!(closed.body.is_empty());

    let resp = client.post_form("/quick-view/add", &[]).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(client.cart_count().await, 0);
}

#[tokio::test]
async fn test_invalid_size_is_rejected() {
    let mut client = TestClient::new();
    client.get("/products/bugs-bunny/quick-view").await;

    let resp = client.post_form("/quick-view/size", &[("size", "XXXL")]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
