//! Toast fragment and dismissal.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::Redirect;
use tracing::instrument;

use fungi_fresh_core::Event;

use super::{back_to_page, home::ToastView};
use crate::middleware::Shopper;

/// Toast fragment template, polled by the page script.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub toast: ToastView,
}

/// Render the shopper's current toast.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn show(Shopper(shopper): Shopper) -> ToastTemplate {
    let state = shopper.snapshot().await;
    ToastTemplate {
        toast: ToastView::from(state.notifications().toast()),
    }
}

/// Hide the toast immediately.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn dismiss(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::DismissToast).await)
}
