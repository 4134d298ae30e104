//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CSP nonce (generate per-request nonce for inline scripts)
//! 5. Security headers (CSP, `Accept-CH`, etc.)
//! 6. Session lock (serialize one visitor's POSTs, session save included)
//! 7. Session layer (tower-sessions with in-memory store)

pub mod client_hints;
pub mod csp;
pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_lock;

pub use client_hints::ClientHints;
pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use session_lock::{SessionLocks, session_lock_middleware};
