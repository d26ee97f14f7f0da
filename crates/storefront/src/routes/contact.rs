//! Contact form handler.
//!
//! Submissions are acknowledged with a toast. Nothing is stored or sent.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use fungi_fresh_core::Event;

use super::back_to_page;
use crate::error::{AppError, Result};
use crate::middleware::Shopper;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Names of required fields left blank.
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Submit the contact form.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn submit(Shopper(shopper): Shopper, Form(form): Form<ContactForm>) -> Result<Redirect> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} required",
            missing.join(", ")
        )));
    }

    Ok(back_to_page(&shopper.dispatch(Event::SubmitContact).await))
}
