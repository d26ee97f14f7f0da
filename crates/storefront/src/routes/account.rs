//! Profile settings actions.

use axum::response::Redirect;
use tracing::instrument;

use fungi_fresh_core::Event;

use super::back_to_page;
use crate::error::{add_breadcrumb, clear_sentry_user};
use crate::middleware::Shopper;

/// Save the profile form.
///
/// The submitted fields are not stored; the shopper only gets a confirmation.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn save_profile(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::SaveProfile).await)
}

/// Delete the account, which signs the shopper out.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn delete(Shopper(shopper): Shopper) -> Redirect {
    let effects = shopper.dispatch(Event::Logout).await;
    clear_sentry_user();
    add_breadcrumb("auth", "Account deleted", None);
    back_to_page(&effects)
}
