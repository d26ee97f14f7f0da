//! Sign-in route handlers.
//!
//! There is no credential check: any non-empty email signs the shopper in
//! and the password field is accepted but ignored.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use fungi_fresh_core::{Event, Overlay};

use super::back_to_page;
use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::Shopper;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Open the login modal.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn open(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::OpenOverlay(Overlay::LoginModal)).await)
}

/// Close the login modal.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn close(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::CloseOverlay(Overlay::LoginModal)).await)
}

/// Sign in with an email address.
///
/// The address is kept as the form draft first, so an attempt that does not
/// sign in re-renders the modal with what was typed.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn login(Shopper(shopper): Shopper, Form(form): Form<LoginForm>) -> Redirect {
    let email = form.email.trim().to_string();

    shopper.dispatch(Event::EmailInput(email.clone())).await;
    let effects = shopper
        .dispatch(Event::Login {
            email: email.clone(),
        })
        .await;

    if effects.is_empty() {
        tracing::debug!("Empty login ignored");
    } else {
        set_sentry_user(&email);
        add_breadcrumb("auth", "Signed in", None);
        tracing::info!("Shopper signed in");
    }

    back_to_page(&effects)
}

/// Sign out.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn logout(Shopper(shopper): Shopper) -> Redirect {
    let effects = shopper.dispatch(Event::Logout).await;
    clear_sentry_user();
    add_breadcrumb("auth", "Signed out", None);
    back_to_page(&effects)
}
