//! Content blocks swapped into the seller dashboard.
//!
//! Blocks only render; buttons report a [`DashboardAction`] through
//! `on_action` and the page decides what happens.

#[cfg(test)]
#[path = "dashboard_panels_test.rs"]
mod dashboard_panels_test;

use leptos::prelude::*;

use crate::net::types::{RecentOrder, StoreInfo};
use crate::state::dashboard::{DashboardAction, DashboardData, DashboardTab, status_class, status_label};
use crate::util::clock::today_br;
use crate::util::format::{format_brl, format_date_br};

const ORDER_STATUS_FILTERS: &[(&str, &str)] = &[
    ("", "Todos"),
    ("pendente", "Pendente"),
    ("processando", "Processando"),
    ("enviado", "Enviado"),
    ("entregue", "Entregue"),
    ("cancelado", "Cancelado"),
];

/// Block for `tab`, reading live data from `data`.
#[component]
pub fn DashboardPanel(
    tab: DashboardTab,
    data: RwSignal<DashboardData>,
    on_action: Callback<DashboardAction>,
) -> impl IntoView {
    match tab {
        DashboardTab::Dashboard => view! { <OverviewPanel data=data on_action=on_action/> }.into_any(),
        DashboardTab::Orders => view! { <OrdersPanel data=data on_action=on_action/> }.into_any(),
        other => view! {
            <div class="dashboard-header">
                <h1>
                    <i class=other.icon()></i>
                    " "
                    {other.label()}
                </h1>
            </div>
            <p class="dashboard-placeholder">{placeholder_text(other)}</p>
        }
        .into_any(),
    }
}

/// Loading spinner shown while a block is being swapped in.
#[component]
pub fn PanelLoading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
        </div>
    }
}

#[component]
fn OverviewPanel(data: RwSignal<DashboardData>, on_action: Callback<DashboardAction>) -> impl IntoView {
    let stat = move |f: fn(&DashboardData) -> String| move || data.with(f);

    view! {
        <div class="dashboard-header">
            <h1>
                <i class=DashboardTab::Dashboard.icon()></i>
                " Dashboard"
            </h1>
            <div>{format!("Última atualização: {}", today_br())}</div>
        </div>
        <div class="stats-grid">
            <StatCard icon="fas fa-shopping-cart" label="Pedidos Hoje" value=Signal::derive(stat(|d| {
                d.stats.as_ref().map_or(0, |s| s.pedidos_hoje).to_string()
            }))/>
            <StatCard icon="fas fa-dollar-sign" label="Vendas do Dia" value=Signal::derive(stat(|d| {
                format_brl(d.stats.as_ref().map(|s| s.vendas_dia).unwrap_or_default())
            }))/>
            <StatCard icon="fas fa-eye" label="Visualizações" value=Signal::derive(stat(|d| {
                d.stats.as_ref().map_or(0, |s| s.visualizacoes).to_string()
            }))/>
            <StatCard icon="fas fa-heart" label="Novos Seguidores" value=Signal::derive(stat(|d| {
                d.stats.as_ref().map_or(0, |s| s.novos_seguidores).to_string()
            }))/>
        </div>
        <section class="recent-orders">
            <h2 class="section-title-dash">"Pedidos Recentes"</h2>
            <OrdersTable data=data on_action=on_action/>
        </section>
        <section class="store-info-section">
            <h2 class="section-title-dash">"Informações da Loja"</h2>
            <div class="info-grid">
                {move || {
                    data.with(|d| d.store.as_ref().map(store_info_rows))
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="info-item">
                                    <div class="info-label">{label}</div>
                                    <div class="info-value">{value}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button
                type="button"
                class="btn-edit-store"
                on:click=move |_| on_action.run(DashboardAction::EditStore)
            >
                <i class="fas fa-edit"></i>
                " Editar Loja"
            </button>
        </section>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card-dash">
            <div class="stat-icon">
                <i class=icon></i>
            </div>
            <div class="stat-number-dash">{value}</div>
            <div class="stat-label-dash">{label}</div>
        </div>
    }
}

#[component]
fn OrdersPanel(data: RwSignal<DashboardData>, on_action: Callback<DashboardAction>) -> impl IntoView {
    let status = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());

    view! {
        <div class="dashboard-header">
            <h1>
                <i class=DashboardTab::Orders.icon()></i>
                " Pedidos"
            </h1>
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| on_action.run(DashboardAction::ExportOrders)
            >
                <i class="fas fa-download"></i>
                " Exportar"
            </button>
        </div>
        <div class="filters">
            <div class="filter-group">
                <label for="filtro-status">"Status"</label>
                <select id="filtro-status" on:change=move |ev| status.set(event_target_value(&ev))>
                    {ORDER_STATUS_FILTERS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="filter-group">
                <label for="filtro-data">"Período"</label>
                <input type="date" id="filtro-data" on:change=move |ev| date.set(event_target_value(&ev))/>
            </div>
            <button
                type="button"
                class="btn-filter"
                on:click=move |_| {
                    on_action.run(DashboardAction::FilterOrders {
                        status: status.get_untracked(),
                        date: date.get_untracked(),
                    })
                }
            >
                "Filtrar"
            </button>
        </div>
        <OrdersTable data=data on_action=on_action/>
    }
}

#[component]
fn OrdersTable(data: RwSignal<DashboardData>, on_action: Callback<DashboardAction>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"ID Pedido"</th>
                        <th>"Cliente"</th>
                        <th>"Data"</th>
                        <th>"Valor"</th>
                        <th>"Status"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        data.with(|d| d.recent_orders.clone())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|order| order_row(order, on_action))
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn order_row(order: RecentOrder, on_action: Callback<DashboardAction>) -> impl IntoView {
    let id = order.id;
    view! {
        <tr>
            <td>{format!("#{id}")}</td>
            <td>{order.cliente_nome}</td>
            <td>{format_date_br(&order.data)}</td>
            <td>{format_brl(order.valor)}</td>
            <td>
                <span class=status_class(&order.status)>{status_label(&order.status).to_owned()}</span>
            </td>
            <td>
                <button
                    type="button"
                    class="btn-action btn-view"
                    on:click=move |_| on_action.run(DashboardAction::ViewOrder(id))
                >
                    <i class="fas fa-eye"></i>
                    " Ver"
                </button>
            </td>
        </tr>
    }
}

/// Label/value pairs of the store summary, with the fallbacks shown for
/// missing fields.
fn store_info_rows(store: &StoreInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Nome da Loja:", store.nome.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "Não cadastrada".to_owned())),
        ("CNPJ:", store.cnpj.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "Não cadastrado".to_owned())),
        ("Status:", if store.ativa { "Ativa" } else { "Inativa" }.to_owned()),
        ("Produtos Cadastrados:", store.total_produtos.to_string()),
        ("Vendas Totais:", store.total_vendas.to_string()),
        (
            "Avaliação Média:",
            format!("{} ⭐", store.avaliacao_media.map_or_else(|| "0.0".to_owned(), |r| format!("{r:.1}"))),
        ),
    ]
}

fn placeholder_text(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Products => "Conteúdo dos produtos...",
        DashboardTab::Store => "Conteúdo da loja...",
        DashboardTab::Sales => "Conteúdo das vendas...",
        DashboardTab::Messages => "Conteúdo das mensagens...",
        DashboardTab::Settings => "Conteúdo das configurações...",
        DashboardTab::Dashboard | DashboardTab::Orders => "",
    }
}
