//! Integration tests for the FungiFresh storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fungi-fresh-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_scenarios` - Basket, session, toast and view behaviour against the core store
//! - `storefront_http` - Full request flows through the router
//!
//! No server or network is needed: [`Browser`] drives the router in-process
//! with `tower::ServiceExt::oneshot` and carries the session cookie between
//! requests like a real browser would.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use tower::ServiceExt;

use fungi_fresh_core::{Price, Product, ProductId};
use fungi_fresh_storefront::{app, config::StorefrontConfig, content, state::AppState};

/// Largest response body the helpers will read.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build a product for store-level tests.
#[must_use]
pub fn product(id: i32, name: &str, price: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        image_url: format!("https://images.example/{id}.jpg"),
        description: String::new(),
    }
}

/// Application state backed by the built-in catalog and orders.
///
/// # Panics
///
/// Panics if the built-in content is malformed.
#[must_use]
pub fn test_state() -> AppState {
    AppState::from_parts(
        StorefrontConfig::default(),
        content::builtin_catalog().expect("built-in catalog"),
        content::builtin_orders().expect("built-in orders"),
    )
}

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// One browser talking to an in-process storefront.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    /// A browser with no cookies against a fresh storefront.
    #[must_use]
    pub fn new() -> Self {
        Self::with_app(app(test_state()))
    }

    /// A browser with no cookies against `app`.
    ///
    /// Two browsers built from clones of one router share the storefront but
    /// not their sessions.
    #[must_use]
    pub const fn with_app(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// `GET path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request("GET", path).body(Body::empty());
        self.send(request).await
    }

    /// `POST path` with a url-encoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn post(&mut self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let request = self
            .request("POST", path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body));
        self.send(request).await
    }

    /// `GET /` and return the page body.
    pub async fn page(&mut self) -> String {
        self.get("/").await.body
    }

    /// `GET /toast` and return the fragment body.
    pub async fn toast(&mut self) -> String {
        self.get("/toast").await.body
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Result<Request<Body>, axum::http::Error>) -> TestResponse {
        let request = request.expect("valid request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
