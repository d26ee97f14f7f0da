//! The state container and its reducer.

use std::sync::Arc;

use super::{
    Basket, CartIdSource, Effect, Event, Notifications, Overlay, Page, SequentialCartIds,
    SessionController, Toast, User, ViewState,
};
use crate::types::{CartId, Price, Product, ToastKind};

crate::define_id!(SubscriptionId, u64);

const CHECKOUT_MESSAGE: &str = "Proceeding to checkout...";
const SIGNED_OUT_MESSAGE: &str = "You have been signed out successfully.";
const CONTACT_MESSAGE: &str = "Thank you! Our farm team will contact you shortly.";
const PROFILE_SAVED_MESSAGE: &str = "Profile updated successfully!";

fn added_message(product: &Product) -> String {
    format!("{} added to your basket!", product.name)
}

fn welcome_message(user: &User) -> String {
    format!(
        "Welcome back to FungiFresh, {}! Happy mushroom hunting. ✨",
        user.display_name
    )
}

/// Everything the presentation layer renders for one shopper.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShopState {
    basket: Basket,
    session: SessionController,
    notifications: Notifications,
    view: ViewState,
}

/// Result of applying one event.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Outcome {
    changed: bool,
    effects: Vec<Effect>,
}

impl Outcome {
    const fn unchanged() -> Self {
        Self {
            changed: false,
            effects: Vec::new(),
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }
}

impl ShopState {
    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.basket
    }

    #[must_use]
    pub const fn session(&self) -> &SessionController {
        &self.session
    }

    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    fn apply(&mut self, event: Event, ids: &mut dyn CartIdSource) -> Outcome {
        match event {
            Event::AddToBasket(product) => self.add_to_basket(&product, ids),
            Event::RemoveFromBasket(cart_id) => self.remove_from_basket(cart_id),
            Event::Checkout => self.checkout(),
            Event::EmailInput(input) => {
                self.session.set_email_input(input);
                Outcome::changed(Vec::new())
            }
            Event::Login { email } => self.login(&email),
            Event::Logout => self.logout(),
            Event::Navigate(page) => {
                self.view.navigate(page);
                Outcome::changed(vec![Effect::ScrollToTop])
            }
            Event::OpenOverlay(overlay) => {
                self.view.open(overlay);
                Outcome::changed(Vec::new())
            }
            Event::CloseOverlay(overlay) => {
                self.view.close(overlay);
                Outcome::changed(Vec::new())
            }
            Event::ToggleOverlay(overlay) => {
                self.view.toggle(overlay);
                Outcome::changed(Vec::new())
            }
            Event::SubmitContact => self.notify(CONTACT_MESSAGE, ToastKind::Success),
            Event::SaveProfile => self.notify(PROFILE_SAVED_MESSAGE, ToastKind::Success),
            Event::DismissToast => {
                self.notifications.dismiss();
                Outcome::changed(vec![Effect::CancelToastDismiss])
            }
            Event::ToastExpired { generation } => {
                if self.notifications.expire(generation) {
                    Outcome::changed(Vec::new())
                } else {
                    Outcome::unchanged()
                }
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Outcome {
        let timer = self.notifications.notify(message, kind);
        Outcome::changed(vec![Effect::ScheduleToastDismiss(timer)])
    }

    fn add_to_basket(&mut self, product: &Product, ids: &mut dyn CartIdSource) -> Outcome {
        let cart_id = self.basket.add(product, ids);
        tracing::debug!(%cart_id, product_id = %product.id, "added to basket");
        self.notify(added_message(product), ToastKind::Success)
    }

    fn remove_from_basket(&mut self, cart_id: CartId) -> Outcome {
        match self.basket.remove(cart_id) {
            Some(_) => Outcome::changed(Vec::new()),
            None => {
                tracing::debug!(%cart_id, "remove ignored, not in basket");
                Outcome::unchanged()
            }
        }
    }

    fn checkout(&mut self) -> Outcome {
        self.view.close(Overlay::BasketDrawer);
        self.notify(CHECKOUT_MESSAGE, ToastKind::Success)
    }

    fn login(&mut self, email: &str) -> Outcome {
        let Some(user) = self.session.login(email) else {
            return Outcome::unchanged();
        };
        let message = welcome_message(user);
        self.view.close(Overlay::LoginModal);
        self.notify(message, ToastKind::Success)
    }

    fn logout(&mut self) -> Outcome {
        self.session.logout();
        self.view.close(Overlay::UserMenu);
        self.view.set_page(Page::Home);
        self.notify(SIGNED_OUT_MESSAGE, ToastKind::Info)
    }
}

/// Receives the new state after every dispatch that changed something.
pub trait Observer: Send + Sync {
    fn state_changed(&self, state: &ShopState);
}

impl<F> Observer for F
where
    F: Fn(&ShopState) + Send + Sync,
{
    fn state_changed(&self, state: &ShopState) {
        self(state);
    }
}

/// One shopper's state plus the machinery around it.
///
/// ```
/// use fungi_fresh_core::{Event, Price, Product, ProductId, Store};
///
/// let mut store = Store::new();
/// store.dispatch(Event::AddToBasket(Product {
///     id: ProductId::new(1),
///     name: "Button Mushroom".to_string(),
///     price: Price::new(180),
///     image_url: String::new(),
///     description: String::new(),
/// }));
/// assert_eq!(store.total(), Price::new(180));
/// ```
pub struct Store {
    state: ShopState,
    cart_ids: Box<dyn CartIdSource>,
    observers: Vec<(SubscriptionId, Arc<dyn Observer>)>,
    next_subscription: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Empty basket, guest session, home page, no toast.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cart_ids(SequentialCartIds::default())
    }

    /// Use a custom source for basket entry ids.
    #[must_use]
    pub fn with_cart_ids(cart_ids: impl CartIdSource + 'static) -> Self {
        Self {
            state: ShopState::default(),
            cart_ids: Box::new(cart_ids),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply `event` and return the effects the caller must run.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let outcome = self.state.apply(event, self.cart_ids.as_mut());
        if outcome.changed {
            for (_, observer) in &self.observers {
                observer.state_changed(&self.state);
            }
        }
        outcome.effects
    }

    /// Register `observer` for state changes.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId::new(self.next_subscription);
        self.observers.push((id, Arc::new(observer)));
        id
    }

    /// Remove a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    #[must_use]
    pub const fn state(&self) -> &ShopState {
        &self.state
    }

    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.state.basket
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.state.basket.total()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.session.user()
    }

    #[must_use]
    pub fn email_input(&self) -> &str {
        self.state.session.email_input()
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.state.view
    }

    #[must_use]
    pub const fn toast(&self) -> &Toast {
        self.state.notifications.toast()
    }
}
