//! Seller dashboard shell: sidebar tab selection and panel swapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/minha-loja` page keeps one content area. Selecting a sidebar tab
//! shows a loading placeholder and, after a short fixed delay, swaps in the
//! tab's block. Nothing is cached across switches.
//!
//! DESIGN
//! ======
//! Every selection bumps a generation counter. The delayed swap carries the
//! generation it was scheduled with and is dropped if another selection
//! happened in the meantime, so rapid clicking always ends on the last tab.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{DashboardStats, RecentOrder, StoreInfo};

/// Sidebar entries, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    Orders,
    Products,
    Store,
    Sales,
    Messages,
    Settings,
}

impl DashboardTab {
    pub const ALL: [Self; 7] =
        [Self::Dashboard, Self::Orders, Self::Products, Self::Store, Self::Sales, Self::Messages, Self::Settings];

    /// Fragment used by the sidebar link (`#pedidos`).
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "pedidos",
            Self::Products => "produtos",
            Self::Store => "loja",
            Self::Sales => "vendas",
            Self::Messages => "mensagens",
            Self::Settings => "configuracoes",
        }
    }

    /// Unknown anchors fall back to the dashboard block.
    pub fn from_anchor(anchor: &str) -> Self {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|t| t.anchor() == anchor).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Pedidos",
            Self::Products => "Produtos",
            Self::Store => "Minha Loja",
            Self::Sales => "Vendas",
            Self::Messages => "Mensagens",
            Self::Settings => "Configurações",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "fas fa-tachometer-alt",
            Self::Orders => "fas fa-shopping-bag",
            Self::Products => "fas fa-box",
            Self::Store => "fas fa-store",
            Self::Sales => "fas fa-chart-line",
            Self::Messages => "fas fa-envelope",
            Self::Settings => "fas fa-cog",
        }
    }
}

/// Which tab is active and which block is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardShell {
    pub active: DashboardTab,
    /// `None` while the loading placeholder is showing.
    pub shown: Option<DashboardTab>,
    generation: u64,
}

impl DashboardShell {
    /// Shell with the dashboard block already rendered.
    pub fn new() -> Self {
        Self { active: DashboardTab::Dashboard, shown: Some(DashboardTab::Dashboard), generation: 0 }
    }

    /// Mark `tab` active and show the placeholder. Returns the generation
    /// to hand back to [`Self::finish`] once the swap delay elapses.
    pub fn select(&mut self, tab: DashboardTab) -> u64 {
        self.generation += 1;
        self.active = tab;
        self.shown = None;
        self.generation
    }

    /// Swap in the active block unless a newer selection superseded this one.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.shown = Some(self.active);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.shown.is_none()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no selection newer than `generation` has been made.
    /// Data requested for an older selection must not be written.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// Data backing the dashboard block; `None` renders placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardData {
    pub stats: Option<DashboardStats>,
    pub recent_orders: Option<Vec<RecentOrder>>,
    pub store: Option<StoreInfo>,
}

/// Portuguese label for an order status; unknown values pass through.
pub fn status_label(status: &str) -> &str {
    match status {
        "pending" => "Pendente",
        "processing" => "Processando",
        "shipped" => "Enviado",
        "delivered" => "Entregue",
        "cancelled" => "Cancelado",
        other => other,
    }
}

/// Badge modifier for an order status.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "delivered" => "status-badge status-completed",
        "cancelled" => "status-badge status-cancelled",
        "shipped" | "processing" => "status-badge status-processing",
        _ => "status-badge status-pending",
    }
}

/// Buttons rendered inside the swapped blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    EditStore,
    ViewOrder(i64),
    ExportOrders,
    FilterOrders { status: String, date: String },
}

/// What a dashboard button does once clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    Navigate(String),
    /// Informational notice.
    Notify(&'static str),
}

impl DashboardAction {
    pub fn effect(&self) -> ActionEffect {
        match self {
            Self::EditStore => ActionEffect::Navigate(crate::util::nav::EDIT_STORE.to_owned()),
            Self::ViewOrder(id) => ActionEffect::Navigate(crate::util::nav::order_url(*id)),
            Self::ExportOrders => ActionEffect::Notify("Exportando pedidos..."),
            Self::FilterOrders { .. } => ActionEffect::Notify("Aplicando filtros..."),
        }
    }
}
