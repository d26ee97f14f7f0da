//! Per-visitor shopper stores.
//!
//! Each browser session owns one [`Store`]. Events for a shopper are applied
//! one at a time under a lock, and the effects the store returns are carried
//! out here: toast dismiss timers run as tokio tasks that feed
//! [`Event::ToastExpired`] back into the same store.

use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use fungi_fresh_core::{DismissTimer, Effect, Event, ShopState, Store};

/// Key linking a browser session to its shopper store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopperKey(Uuid);

impl ShopperKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ShopperKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

struct ShopperInner {
    store: Store,
    dismiss_task: Option<JoinHandle<()>>,
}

impl ShopperInner {
    fn cancel_dismiss(&mut self) {
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }
    }
}

/// Shared handle to one shopper's store.
///
/// Cheap to clone. The store is dropped once the last handle goes away; a
/// pending dismiss timer does not keep it alive.
#[derive(Clone)]
pub struct ShopperHandle {
    key: ShopperKey,
    inner: Arc<Mutex<ShopperInner>>,
}

impl std::fmt::Debug for ShopperHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopperHandle")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ShopperHandle {
    /// Create a new store for `key` with state-change logging attached.
    #[must_use]
    pub fn new(key: ShopperKey) -> Self {
        let mut store = Store::new();
        store.subscribe(move |state: &ShopState| log_state_change(key, state));

        Self {
            key,
            inner: Arc::new(Mutex::new(ShopperInner {
                store,
                dismiss_task: None,
            })),
        }
    }

    #[must_use]
    pub const fn key(&self) -> ShopperKey {
        self.key
    }

    /// Apply `event` and run its timer effects.
    ///
    /// The effects are returned so the caller can act on the rest (scrolling).
    pub async fn dispatch(&self, event: Event) -> Vec<Effect> {
        let mut inner = self.inner.lock().await;
        let effects = inner.store.dispatch(event);

        for effect in &effects {
            match effect {
                Effect::ScheduleToastDismiss(timer) => {
                    inner.cancel_dismiss();
                    inner.dismiss_task = Some(spawn_dismiss(Arc::downgrade(&self.inner), *timer));
                }
                Effect::CancelToastDismiss => inner.cancel_dismiss(),
                Effect::ScrollToTop => {}
            }
        }

        effects
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> ShopState {
        self.inner.lock().await.store.state().clone()
    }
}

/// Schedule the toast of `timer.generation` to be hidden.
fn spawn_dismiss(store: Weak<Mutex<ShopperInner>>, timer: DismissTimer) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(timer.after).await;

        let Some(inner) = store.upgrade() else {
            return;
        };
        let mut inner = inner.lock().await;
        inner.store.dispatch(Event::ToastExpired {
            generation: timer.generation,
        });
    })
}

fn log_state_change(key: ShopperKey, state: &ShopState) {
    tracing::debug!(
        shopper = %key,
        page = %state.view().page(),
        basket_items = state.basket().len(),
        basket_total = %state.basket().total(),
        signed_in = state.session().is_signed_in(),
        toast_visible = state.notifications().toast().visible,
        "Shopper state changed"
    );
}
