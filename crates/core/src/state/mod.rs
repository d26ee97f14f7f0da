//! Shopper state: basket, session, toast and view, driven by UI events.
//!
//! # Flow
//!
//! ```text
//! UI event ──► Store::dispatch(Event)
//!                 │
//!                 ├─► ShopState::apply  (pure update, returns effects)
//!                 ├─► observers notified if anything changed
//!                 └─► Vec<Effect> handed back to the host
//! ```
//!
//! The host runs the effects: it schedules toast dismiss timers on its event
//! loop and scrolls the page when asked. A fired timer comes back in as
//! [`Event::ToastExpired`].

pub mod basket;
pub mod notification;
pub mod session;
pub mod store;
pub mod view;

pub use basket::{Basket, BasketItem, CartIdSource, SequentialCartIds};
pub use notification::{DismissTimer, Notifications, TOAST_DISMISS_AFTER, Toast};
pub use session::{PLACEHOLDER_ADDRESS, PLACEHOLDER_PHONE, SessionController, User};
pub use store::{Observer, ShopState, Store, SubscriptionId};
pub use view::{Overlay, Page, ViewState};

use crate::types::{CartId, Product};

/// Something the shopper did, or a timer that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AddToBasket(Product),
    RemoveFromBasket(CartId),
    /// Stub: announces checkout and closes the drawer. The basket is kept.
    Checkout,
    /// The sign-in form's email field changed.
    EmailInput(String),
    Login { email: String },
    Logout,
    Navigate(Page),
    OpenOverlay(Overlay),
    CloseOverlay(Overlay),
    ToggleOverlay(Overlay),
    /// Contact form sent. Nothing is stored or transmitted.
    SubmitContact,
    /// Profile settings saved. The profile itself is not edited.
    SaveProfile,
    DismissToast,
    ToastExpired { generation: u64 },
}

/// Work the host must carry out after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fire [`Event::ToastExpired`] once the timer elapses.
    ScheduleToastDismiss(DismissTimer),
    /// Any scheduled dismiss timer may be dropped.
    CancelToastDismiss,
    /// Scroll the viewport back to the top.
    ScrollToTop,
}
