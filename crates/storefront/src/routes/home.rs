//! Page rendering.
//!
//! The whole storefront is one page: the shell renders the navigation, the
//! toast slot, whichever top-level view is current, the footer and any open
//! overlays, all from a snapshot of the shopper's state.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use fungi_fresh_core::{BasketItem, Order, Overlay, Product, ShopState, Toast, User};

use crate::filters;
use crate::middleware::Shopper;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
        }
    }
}

/// Basket entry display data for templates.
#[derive(Clone)]
pub struct BasketItemView {
    pub cart_id: u64,
    pub name: String,
    pub price: String,
    pub image_url: String,
}

impl From<&BasketItem> for BasketItemView {
    fn from(item: &BasketItem) -> Self {
        Self {
            cart_id: item.cart_id.get(),
            name: item.name().to_string(),
            price: item.price().to_string(),
            image_url: item.product.image_url.clone(),
        }
    }
}

/// Basket display data for templates.
#[derive(Clone)]
pub struct BasketView {
    pub items: Vec<BasketItemView>,
    pub total: String,
    pub count: usize,
}

/// Signed-in shopper display data for templates.
#[derive(Clone)]
pub struct UserView {
    pub email: String,
    pub display_name: String,
    pub phone: String,
    pub address: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.to_string(),
            display_name: user.display_name.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub number: String,
    pub date: String,
    pub status: String,
    pub total: String,
    pub summary: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            number: order.id.to_string(),
            date: order.display_date(),
            status: order.status.to_string(),
            total: order.total.to_string(),
            summary: order.summary(),
        }
    }
}

/// Toast display data for templates.
#[derive(Clone)]
pub struct ToastView {
    pub message: String,
    pub kind: String,
    pub visible: bool,
}

impl From<&Toast> for ToastView {
    fn from(toast: &Toast) -> Self {
        Self {
            message: toast.message.clone(),
            kind: toast.kind.to_string(),
            visible: toast.visible,
        }
    }
}

/// Full page template.
#[derive(Template, WebTemplate)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub page: &'static str,
    pub products: Vec<ProductView>,
    pub orders: Vec<OrderView>,
    pub basket: BasketView,
    pub user: Option<UserView>,
    pub email_input: String,
    pub toast: ToastView,
    pub basket_open: bool,
    pub login_open: bool,
    pub user_menu_open: bool,
    pub mobile_menu_open: bool,
}

impl ShellTemplate {
    /// Build the page for one shopper's state.
    #[must_use]
    pub fn render_state(app: &AppState, state: &ShopState) -> Self {
        let basket = state.basket();
        let view = state.view();

        Self {
            page: view.page().as_str(),
            products: app.catalog().products().iter().map(ProductView::from).collect(),
            orders: app.orders().iter().map(OrderView::from).collect(),
            basket: BasketView {
                items: basket.items().iter().map(BasketItemView::from).collect(),
                total: basket.total().to_string(),
                count: basket.len(),
            },
            user: state.session().user().map(UserView::from),
            email_input: state.session().email_input().to_string(),
            toast: ToastView::from(state.notifications().toast()),
            basket_open: view.is_open(Overlay::BasketDrawer),
            login_open: view.is_open(Overlay::LoginModal),
            user_menu_open: view.is_open(Overlay::UserMenu),
            mobile_menu_open: view.is_open(Overlay::MobileMenu),
        }
    }
}

/// Display the storefront.
#[instrument(skip_all, fields(shopper = %shopper.key()))]
pub async fn home(State(state): State<AppState>, Shopper(shopper): Shopper) -> ShellTemplate {
    let snapshot = shopper.snapshot().await;
    ShellTemplate::render_state(&state, &snapshot)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fungi_fresh_core::{Event, Page, ProductId, Store};

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::content;

    fn app_state() -> AppState {
        AppState::from_parts(
            StorefrontConfig::default(),
            content::builtin_catalog().unwrap(),
            content::builtin_orders().unwrap(),
        )
    }

    #[test]
    fn test_guest_home_page() {
        let app = app_state();
        let store = Store::new();
        let page = ShellTemplate::render_state(&app, store.state());

        assert_eq!(page.page, "home");
        assert_eq!(page.products.len(), 6);
        assert!(page.user.is_none());
        assert_eq!(page.basket.total, "₹0");

        let html = page.render().unwrap();
        assert!(html.contains("Our Harvest"));
        assert!(html.contains("Button Mushroom"));
        assert!(html.contains("Guest"));
    }

    #[test]
    fn test_basket_drawer_lists_items() {
        let app = app_state();
        let mut store = Store::new();
        let shiitake = app.catalog().get(ProductId::new(3)).unwrap().clone();
        store.dispatch(Event::AddToBasket(shiitake));
        store.dispatch(Event::OpenOverlay(Overlay::BasketDrawer));

        let page = ShellTemplate::render_state(&app, store.state());
        assert!(page.basket_open);
        assert_eq!(page.basket.count, 1);
        assert_eq!(page.basket.total, "₹150");

        let html = page.render().unwrap();
        assert!(html.contains("Your Basket"));
        assert!(html.contains("Checkout Now"));
    }

    #[test]
    fn test_orders_page() {
        let app = app_state();
        let mut store = Store::new();
        store.dispatch(Event::Login {
            email: "meera@farm.in".to_string(),
        });
        store.dispatch(Event::Navigate(Page::Orders));

        let page = ShellTemplate::render_state(&app, store.state());
        assert_eq!(page.page, "orders");
        assert_eq!(page.user.as_ref().unwrap().display_name, "Meera");

        let html = page.render().unwrap();
        assert!(html.contains("My Orders"));
        assert!(html.contains("FF-9021"));
        assert!(html.contains("Button Mushroom x2, Shiitake x1"));
    }
}
