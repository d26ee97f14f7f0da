//! Which page is showing and which overlays float above it.

use serde::{Deserialize, Serialize};

/// Top-level page. All pages are reachable from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Orders,
    Settings,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Orders => "orders",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "orders" => Ok(Self::Orders),
            "settings" => Ok(Self::Settings),
            _ => Err(format!("invalid page: {s}")),
        }
    }
}

/// Panels shown on top of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    BasketDrawer,
    LoginModal,
    UserMenu,
    MobileMenu,
}

/// Current page plus one open/closed flag per overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    page: Page,
    basket_drawer_open: bool,
    login_modal_open: bool,
    user_menu_open: bool,
    mobile_menu_open: bool,
}

impl ViewState {
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Switch page. Closes the user menu and the mobile menu.
    ///
    /// The caller is responsible for scrolling back to the top.
    pub const fn navigate(&mut self, page: Page) {
        self.page = page;
        self.user_menu_open = false;
        self.mobile_menu_open = false;
    }

    /// Switch page without touching any overlay.
    pub const fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    #[must_use]
    pub const fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::BasketDrawer => self.basket_drawer_open,
            Overlay::LoginModal => self.login_modal_open,
            Overlay::UserMenu => self.user_menu_open,
            Overlay::MobileMenu => self.mobile_menu_open,
        }
    }

    /// Open `overlay`. Opening the login modal closes the user menu.
    pub const fn open(&mut self, overlay: Overlay) {
        self.set(overlay, true);
    }

    pub const fn close(&mut self, overlay: Overlay) {
        self.set(overlay, false);
    }

    /// Flip `overlay` and return its new state.
    pub const fn toggle(&mut self, overlay: Overlay) -> bool {
        let open = !self.is_open(overlay);
        self.set(overlay, open);
        open
    }

    const fn set(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::BasketDrawer => self.basket_drawer_open = open,
            Overlay::LoginModal => {
                self.login_modal_open = open;
                if open {
                    self.user_menu_open = false;
                }
            }
            Overlay::UserMenu => self.user_menu_open = open,
            Overlay::MobileMenu => self.mobile_menu_open = open,
        }
    }
}
