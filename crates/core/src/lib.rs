//! FungiFresh Core - Domain types and the shopper state container.
//!
//! This crate provides everything the storefront needs to model a shopper's
//! visit without touching I/O:
//! - [`types`] - Newtype wrappers for ids, prices, emails, statuses, plus the
//!   product catalog and order records
//! - [`state`] - The basket, session, notification and view controllers, and
//!   the [`Store`](state::Store) that drives them from UI events
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure state transitions - no
//! I/O, no async runtime, no HTTP. Anything time-based (the toast dismiss
//! timer) is returned to the caller as an [`Effect`](state::Effect) to
//! schedule on its own event loop.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod state;
pub mod types;

pub use state::{
    Basket, BasketItem, CartIdSource, DismissTimer, Effect, Event, Notifications, Observer,
    Overlay, Page, SequentialCartIds, SessionController, ShopState, Store, SubscriptionId, Toast,
    User, ViewState,
};
pub use types::*;
