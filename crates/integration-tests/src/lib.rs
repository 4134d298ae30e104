//! Integration tests for Cotton Front.
//!
//! The tests drive the complete storefront router in-process with
//! `tower::ServiceExt::oneshot`, carrying the session cookie between requests
//! the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cottonfront-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let mut client = TestClient::new();
//! let resp = client.post_form("/cart/add", &[("key", "spider-man")]).await;
//! assert_eq!(resp.header("hx-trigger"), Some("cart-updated"));
//! ```

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use cottonfront_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Largest response body the helpers will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as text, if present and valid.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// One simulated visitor.
///
/// Each client owns its own router (and so its own session store) unless
/// built with [`TestClient::sharing`].
pub struct TestClient {
    app: Router,
    state: AppState,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Client for a fresh storefront with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::new(StorefrontConfig::default()))
    }

    /// Client for a fresh storefront built from `state`.
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            app: app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// A second visitor on the same storefront, starting without a session.
    #[must_use]
    pub fn sharing(&self) -> Self {
        Self {
            app: self.app.clone(),
            state: self.state.clone(),
            cookie: None,
        }
    }

    /// The same visitor on another connection: shares the router and the
    /// current session cookie, for sending requests concurrently.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            app: self.app.clone(),
            state: self.state.clone(),
            cookie: self.cookie.clone(),
        }
    }

    /// The storefront's application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request, attaching and then updating the session cookie.
    ///
    /// # Panics
    ///
    /// Panics if the response body cannot be read.
    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(value) = self.cookie.as_deref().and_then(|c| c.parse().ok()) {
            request.headers_mut().insert(header::COOKIE, value);
        }

        let Ok(response) = self.app.clone().oneshot(request).await;

        let session_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|set_cookie| set_cookie.split(';').next())
            .map(str::to_string);
        if session_cookie.is_some() {
            self.cookie = session_cookie;
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .unwrap_or_else(|e| panic!("failed to read response body: {e}"));

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// `GET uri`.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.get_with(uri, &[]).await
    }

    /// `GET uri` with extra request headers.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get_with(&mut self, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(Body::empty())
            .unwrap_or_else(|e| panic!("invalid request: {e}"));
        self.send(request).await
    }

    /// `POST uri` with a urlencoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.post_form_with(uri, fields, &[]).await
    }

    /// `POST uri` with a urlencoded form and extra request headers.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn post_form_with(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(Body::from(encode_form(fields)))
            .unwrap_or_else(|e| panic!("invalid request: {e}"));
        self.send(request).await
    }

    /// Current badge count from `/cart/count`.
    ///
    /// # Panics
    ///
    /// Panics if the badge does not contain a number.
    pub async fn cart_count(&mut self) -> u32 {
        let resp = self.get("/cart/count").await;
        let text = resp
            .body
            .split('>')
            .nth(1)
            .and_then(|rest| rest.split('<').next())
            .unwrap_or_default()
            .trim()
            .to_string();
        text.parse()
            .unwrap_or_else(|_| panic!("unexpected cart count fragment: {}", resp.body))
    }
}

/// Encode form fields as `application/x-www-form-urlencoded`.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
