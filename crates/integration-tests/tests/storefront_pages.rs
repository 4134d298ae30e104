//! Pages, theme and ambient headers.

use axum::http::StatusCode;
use cottonfront_core::Catalog;
use cottonfront_integration_tests::TestClient;

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let resp = client.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_home_lists_catalog() {
    let mut client = TestClient::new();

    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    for entry in Catalog::builtin().entries() {
        assert!(resp.body.contains(&entry.name), "missing {}", entry.name);
        assert!(resp.body.contains(&format!("/products/{}/quick-view", entry.key)));
    }
    assert!(resp.body.contains("data-theme=\"dark\""));
    assert!(resp.body.contains("class=\"reveal-char\""));
}

#[tokio::test]
async fn test_home_without_motion_renders_plain_heading() {
    let mut client = TestClient::new();

    let resp = client
        .get_with("/", &[("sec-ch-prefers-reduced-motion", "reduce")])
        .await;

    assert!(!resp.body.contains("class=\"reveal-char\""));
    assert!(resp.body.contains("data-motion=\"reduced\""));
    assert!(!resp.body.contains("data-tilt-max"));
}

#[tokio::test]
async fn test_home_carries_effect_tuning() {
    let mut client = TestClient::new();

    let resp = client.get("/").await;

    assert!(resp.body.contains("data-glow-lerp=\"0.15\""));
    assert!(resp.body.contains("data-tilt-max=\"3\""));
    assert!(resp.body.contains("data-parallax-factor=\"-0.2\""));
}

#[tokio::test]
async fn test_security_headers() {
    let mut client = TestClient::new();

    let resp = client.get("/").await;

    let csp = resp.header("content-security-policy").unwrap_or_default();
    assert!(csp.contains("'nonce-"));
    let nonce = csp
        .split("'nonce-")
        .nth(1)
        .and_then(|rest| rest.split('\'').next())
        .unwrap_or_default();
    assert!(!nonce.is_empty());
    assert!(resp.body.contains(&format!("nonce=\"{nonce}\"")));

    assert_eq!(resp.header("x-frame-options"), Some("DENY"));
    assert!(
        resp.header("accept-ch")
            .is_some_and(|v| v.contains("Sec-CH-Prefers-Reduced-Motion"))
    );
    assert!(resp.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_theme_toggle_persists() {
    let mut client = TestClient::new();

    let resp = client.post_form("/theme/toggle", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    let trigger: serde_json::Value =
        serde_json::from_str(resp.header("hx-trigger").unwrap_or("{}")).unwrap_or_default();
    assert_eq!(trigger["theme-changed"], "light");

    let home = client.get("/").await;
    assert!(home.body.contains("data-theme=\"light\""));

    client.post_form("/theme/toggle", &[]).await;
    let home = client.get("/").await;
    assert!(home.body.contains("data-theme=\"dark\""));
}

#[tokio::test]
async fn test_color_scheme_hint_applies_until_toggled() {
    let mut client = TestClient::new();
    let hint = [("sec-ch-prefers-color-scheme", "light")];

    let home = client.get_with("/", &hint).await;
    assert!(home.body.contains("data-theme=\"light\""));

    // The stored choice wins over the hint afterwards.
    client.post_form_with("/theme/toggle", &[], &hint).await;
    let home = client.get_with("/", &hint).await;
    assert!(home.body.contains("data-theme=\"dark\""));
}

#[tokio::test]
async fn test_empty_fragment() {
    let mut client = TestClient::new();
    let resp = client.get("/fragments/empty").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_empty());
}
