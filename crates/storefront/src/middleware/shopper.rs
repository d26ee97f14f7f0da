//! Shopper extractor.
//!
//! Resolves the request's session to its shopper store, assigning a new
//! shopper key the first time a session is seen.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::shopper::{ShopperHandle, ShopperKey};
use crate::state::AppState;

/// Session key holding the shopper key.
pub const SHOPPER_KEY: &str = "shopper";

/// Extractor for the current shopper's store.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Shopper(shopper): Shopper) -> impl IntoResponse {
///     let state = shopper.snapshot().await;
///     format!("{} items", state.basket().len())
/// }
/// ```
pub struct Shopper(pub ShopperHandle);

impl FromRequestParts<AppState> for Shopper {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let key = match session.get::<ShopperKey>(SHOPPER_KEY).await? {
            Some(key) => key,
            None => {
                let key = ShopperKey::generate();
                session.insert(SHOPPER_KEY, key).await?;
                tracing::debug!(shopper = %key, "Assigned shopper to session");
                key
            }
        };

        Ok(Self(state.shopper(key).await))
    }
}
