//! Navigation and menu toggles.

use axum::{
    extract::{Path, Query},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use fungi_fresh_core::{Event, Overlay, Page};

use super::back_to_page;
use crate::error::{AppError, Result};
use crate::middleware::Shopper;

/// Anchored sections of the home page.
const HOME_SECTIONS: &[&str] = &["home", "benefits", "shop", "contact"];

/// Optional landing section for a navigation.
#[derive(Debug, Default, Deserialize)]
pub struct NavigateQuery {
    pub section: Option<String>,
}

/// Switch the top-level view.
///
/// With a `section`, the browser lands on that anchor of the home page
/// instead of the top.
#[instrument(skip_all, fields(shopper = %shopper.key(), page = %page))]
pub async fn navigate(
    Shopper(shopper): Shopper,
    Path(page): Path<String>,
    Query(query): Query<NavigateQuery>,
) -> Result<Redirect> {
    let page: Page = page
        .parse()
        .map_err(|_| AppError::NotFound(format!("page {page}")))?;

    let section = match query.section {
        Some(section) if page == Page::Home && HOME_SECTIONS.contains(&section.as_str()) => {
            Some(section)
        }
        Some(section) => return Err(AppError::NotFound(format!("section {section}"))),
        None => None,
    };

    let effects = shopper.dispatch(Event::Navigate(page)).await;
    Ok(section.map_or_else(
        || back_to_page(&effects),
        |section| Redirect::to(&format!("/#{section}")),
    ))
}

/// Toggle the user dropdown.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn toggle_user_menu(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::ToggleOverlay(Overlay::UserMenu)).await)
}

/// Toggle the mobile menu.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn toggle_mobile_menu(Shopper(shopper): Shopper) -> Redirect {
    back_to_page(&shopper.dispatch(Event::ToggleOverlay(Overlay::MobileMenu)).await)
}
