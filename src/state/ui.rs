#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;

/// Shared header state: mobile menu, search box, and cart badge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub search_term: String,
    /// Item count shown on the header cart badge.
    pub cart_count: u32,
    /// Products with an add-to-cart request in flight.
    pub adding_to_cart: BTreeSet<i64>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Font Awesome icon for the mobile menu button.
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open { "fas fa-times" } else { "fas fa-bars" }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.menu_open { "nav-menu show" } else { "nav-menu" }
    }

    /// Claim the add-to-cart slot for a product; `false` if already taken.
    pub fn begin_add_to_cart(&mut self, product_id: i64) -> bool {
        self.adding_to_cart.insert(product_id)
    }

    pub fn finish_add_to_cart(&mut self, product_id: i64) {
        self.adding_to_cart.remove(&product_id);
    }

    pub fn is_adding_to_cart(&self, product_id: i64) -> bool {
        self.adding_to_cart.contains(&product_id)
    }
}

/// Links rendered in the header's user-actions area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// "Minha Conta"
    Account,
    /// "Sair"
    Logout,
    /// "Entrar"
    Login,
}

impl UserAction {
    /// Actions offered for the current login state.
    pub fn for_session(authenticated: bool) -> &'static [Self] {
        if authenticated { &[Self::Account, Self::Logout] } else { &[Self::Login] }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Minha Conta",
            Self::Logout => "Sair",
            Self::Login => "Entrar",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Account => "fas fa-user-circle",
            Self::Logout => "fas fa-sign-out-alt",
            Self::Login => "fas fa-user",
        }
    }

    /// Link target; `None` for actions handled in place.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Account => Some(crate::util::nav::MY_STORE),
            Self::Logout => None,
            Self::Login => Some(crate::util::nav::LOGIN),
        }
    }
}
