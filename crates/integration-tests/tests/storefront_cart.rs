//! Cart flows through the HTTP surface.

use axum::http::StatusCode;
use cottonfront_integration_tests::TestClient;
use cottonfront_storefront::services::CartChange;
use tokio::task::JoinSet;

#[tokio::test]
async fn test_add_same_product_merges_line() {
    let mut client = TestClient::new();

    for _ in 0..2 {
        let resp = client.post_form("/cart/add", &[("key", "spider-man")]).await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.header("hx-trigger"), Some("cart-updated"));
    }

    assert_eq!(client.cart_count().await, 2);

    let drawer = client.get("/cart/drawer").await;
    assert_eq!(drawer.body.matches("class=\"cart-line\"").count(), 1);
    assert!(drawer.body.contains("Spider-Man: Hero Swing"));
    assert!(drawer.body.contains("rs-3398"));
}

#[tokio::test]
async fn test_add_response_has_toast_and_particles() {
    let mut client = TestClient::new();

    let resp = client
        .post_form("/cart/add", &[("key", "bugs-bunny"), ("x", "120"), ("y", "300")])
        .await;

    assert!(resp.body.contains("Bugs Bunny: Hot Moves"));
    assert!(resp.body.contains("Added to cart!"));
    assert!(resp.body.contains("View Cart"));
    assert_eq!(resp.body.matches("class=\"particle\"").count(), 15);
    assert!(resp.body.contains("left:120px;top:300px"));
}

#[tokio::test]
async fn test_reduced_motion_skips_particles() {
    let mut client = TestClient::new();

    let resp = client
        .post_form_with(
            "/cart/add",
            &[("key", "bugs-bunny")],
            &[("sec-ch-prefers-reduced-motion", "reduce")],
        )
        .await;

    assert!(resp.body.contains("Added to cart!"));
    assert!(!resp.body.contains("class=\"particle\""));
    assert_eq!(client.cart_count().await, 1);
}

#[tokio::test]
async fn test_add_unknown_product_is_ignored() {
    let mut client = TestClient::new();

    let resp = client.post_form("/cart/add", &[("key", "no-such-tee")]).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.header("hx-trigger").is_none());
    assert_eq!(client.cart_count().await, 0);
}

#[tokio::test]
async fn test_change_quantity_never_below_one() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "super-pants")]).await;

    let name = "Super Pants: Brown Stripes";
    client
        .post_form("/cart/quantity", &[("name", name), ("delta", "2")])
        .await;
    assert_eq!(client.cart_count().await, 3);

    let resp = client
        .post_form("/cart/quantity", &[("name", name), ("delta", "-10")])
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("hx-trigger"), Some("cart-updated"));
    assert_eq!(client.cart_count().await, 1);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "super-pants")]).await;
    client.post_form("/cart/add", &[("key", "jurassic-park")]).await;

    client
        .post_form("/cart/remove", &[("name", "Super Pants: Brown Stripes")])
        .await;
    let items = client.get("/cart/items").await;
    assert!(!items.body.contains("Super Pants"));
    assert!(items.body.contains("Jurassic Park: Tilescape"));

    // Unknown names change nothing.
    client.post_form("/cart/remove", &[("name", "Ghost Tee")]).await;
    assert_eq!(client.cart_count().await, 1);

    let resp = client.post_form("/cart/clear", &[]).await;
    assert_eq!(resp.header("hx-trigger"), Some("cart-updated"));
    assert_eq!(client.cart_count().await, 0);

    let drawer = client.get("/cart/drawer").await;
    assert!(drawer.body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_cart_page_lists_totals() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "samurai-jack")]).await;
    client.post_form("/cart/add", &[("key", "spider-man")]).await;
    client.post_form("/cart/add", &[("key", "spider-man")]).await;

    let page = client.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Samurai Jack: Warrior"));
    assert!(page.body.contains("rs-5097"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let mut alice = TestClient::new();
    let mut bob = alice.sharing();

    alice.post_form("/cart/add", &[("key", "spider-man")]).await;

    assert_eq!(alice.cart_count().await, 1);
    assert_eq!(bob.cart_count().await, 0);
}

#[tokio::test]
async fn test_each_mutation_publishes_one_event() {
    let mut client = TestClient::new();
    let mut events = client.state().cart_events().subscribe();

    client.post_form("/cart/add", &[("key", "spider-man")]).await;
    client.post_form("/cart/remove", &[("name", "Nobody")]).await;
    client.post_form("/cart/clear", &[]).await;

    let added = events.try_recv().unwrap_or_else(|e| panic!("no add event: {e}"));
    assert!(matches!(added.change, CartChange::Added { quantity: 1, .. }));
    assert_eq!(added.item_count, 1);

    let cleared = events.try_recv().unwrap_or_else(|e| panic!("no clear event: {e}"));
    assert!(matches!(cleared.change, CartChange::Cleared));
    assert_eq!(cleared.item_count, 0);

    assert!(events.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_from_one_visitor_all_land() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "spider-man")]).await;

    let mut requests = JoinSet::new();
    for _ in 0..20 {
        let mut tab = client.fork();
        requests.spawn(async move {
            tab.post_form("/cart/add", &[("key", "spider-man")])
                .await
                .status
        });
    }
    while let Some(status) = requests.join_next().await {
        let status = status.unwrap_or_else(|e| panic!("request task failed: {e}"));
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(client.cart_count().await, 21);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_quantity_steps_all_land() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", &[("key", "spider-man")]).await;

    let mut requests = JoinSet::new();
    for _ in 0..10 {
        let mut tab = client.fork();
        requests.spawn(async move {
            tab.post_form(
                "/cart/quantity",
                &[("name", "Spider-Man: Hero Swing"), ("delta", "1")],
            )
            .await
            .status
        });
    }
    while let Some(status) = requests.join_next().await {
        let status = status.unwrap_or_else(|e| panic!("request task failed: {e}"));
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(client.cart_count().await, 11);
}
