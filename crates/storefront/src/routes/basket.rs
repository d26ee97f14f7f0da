//! Basket route handlers.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use fungi_fresh_core::{CartId, Event, Overlay, ProductId};

use super::back_to_page;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::Shopper;
use crate::state::AppState;

/// Add to basket form data.
#[derive(Debug, Deserialize)]
pub struct AddToBasketForm {
    pub product_id: i32,
}

/// Remove from basket form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromBasketForm {
    pub cart_id: u64,
}

/// Open the basket drawer.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn open(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::OpenOverlay(Overlay::BasketDrawer)).await)
}

/// Close the basket drawer.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn close(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::CloseOverlay(Overlay::BasketDrawer)).await)
}

/// Add a catalog product to the basket.
///
/// Products are looked up in the catalog; the form only carries the id.
#[instrument(skip_all, fields(shopper = %shopper.key(), product_id = form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Shopper(shopper): Shopper,
    Form(form): Form<AddToBasketForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    add_breadcrumb(
        "basket",
        "Added to basket",
        Some(&[("product", product.name.as_str())]),
    );

    Ok(back_to_page(
        &shopper.dispatch(Event::AddToBasket(product)).await,
    ))
}

/// Remove one basket entry. Unknown entries are ignored.
#[instrument(skip_all, fields(shopper = %shopper.key(), cart_id = form.cart_id))]
pub async fn remove(
    Shopper(shopper): Shopper,
    Form(form): Form<RemoveFromBasketForm>,
) -> Redirect {
    let cart_id = CartId::new(form.cart_id);
    add_breadcrumb("basket", "Removed from basket", None);
    back_to_page(&shopper.dispatch(Event::RemoveFromBasket(cart_id)).await)
}

/// Start checkout.
///
/// Only announces the checkout and closes the drawer; the basket is kept.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn checkout(Shopper(shopper): Shopper) -> Redirect {
    add_breadcrumb("basket", "Checkout started", None);
    back_to_page(&shopper.dispatch(Event::Checkout).await)
}
