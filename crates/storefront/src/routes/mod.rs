//! HTTP route handlers for storefront.
//!
//! Every action is a form POST that dispatches one event into the shopper's
//! store and answers with `303 See Other` back to the page
//! (Post/Redirect/Get). The page itself is always rendered from state.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Full page for the shopper's current view
//! GET  /health                 - Health check
//!
//! # Toast
//! GET  /toast                  - Toast fragment (polled by storefront.js)
//! POST /toast/dismiss          - Hide the toast now
//!
//! # Basket
//! POST /basket/open            - Open the basket drawer
//! POST /basket/close           - Close the basket drawer
//! POST /basket/add             - Add a product (product_id)
//! POST /basket/remove          - Remove an entry (cart_id)
//! POST /basket/checkout        - Checkout stub
//!
//! # Auth
//! POST /auth/open              - Open the login modal
//! POST /auth/close             - Close the login modal
//! POST /auth/login             - Sign in (email)
//! POST /auth/logout            - Sign out
//!
//! # View
//! POST /view/{page}            - Navigate to home, orders or settings
//!                                (?section= lands on a home anchor)
//! POST /menu/user              - Toggle the user menu
//! POST /menu/mobile            - Toggle the mobile menu
//!
//! # Account
//! POST /account/profile        - Save profile settings
//! POST /account/delete         - Delete account (signs out)
//!
//! # Contact
//! POST /contact                - Contact form
//! ```

pub mod account;
pub mod auth;
pub mod basket;
pub mod contact;
pub mod home;
pub mod toast;
pub mod view;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use fungi_fresh_core::Effect;

use crate::state::AppState;

/// Create the basket routes router.
pub fn basket_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(basket::open))
        .route("/close", post(basket::close))
        .route("/add", post(basket::add))
        .route("/remove", post(basket::remove))
        .route("/checkout", post(basket::checkout))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(auth::open))
        .route("/close", post(auth::close))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(account::save_profile))
        .route("/delete", post(account::delete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/toast", get(toast::show))
        .route("/toast/dismiss", post(toast::dismiss))
        .nest("/basket", basket_routes())
        .nest("/auth", auth_routes())
        .route("/view/{page}", post(view::navigate))
        .route("/menu/user", post(view::toggle_user_menu))
        .route("/menu/mobile", post(view::toggle_mobile_menu))
        .nest("/account", account_routes())
        .route("/contact", post(contact::submit))
}

/// Redirect back to the page after an action.
///
/// A `ScrollToTop` effect lands the browser on the `#top` anchor.
#[must_use]
pub fn back_to_page(effects: &[Effect]) -> Redirect {
    if effects.contains(&Effect::ScrollToTop) {
        Redirect::to("/#top")
    } else {
        Redirect::to("/")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{http::header::LOCATION, response::IntoResponse};

    use super::*;

    #[test]
    fn test_back_to_page_honours_scroll() {
        let response = back_to_page(&[Effect::ScrollToTop]).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/#top");

        let response = back_to_page(&[Effect::CancelToastDismiss]).into_response();
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }
}
