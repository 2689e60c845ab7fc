//! `/minha-loja`: seller dashboard with a sidebar and one swapped content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tab switching rules live in [`DashboardShell`]. The dashboard block's data
//! is fetched again every time that block is swapped in; the three requests
//! are independent and a failed one only leaves its placeholders.

use leptos::prelude::*;

use crate::components::dashboard_panels::{DashboardPanel, PanelLoading};
use crate::components::notification_stack::Notifier;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::dashboard::{ActionEffect, DashboardAction, DashboardData, DashboardShell, DashboardTab};
use crate::state::session::SessionContext;
use crate::util::auth::require_session;
use crate::util::clock::sleep_ms;
use crate::util::nav;

/// Apply `write` unless a newer tab selection superseded `generation`.
fn store_if_current(
    shell: RwSignal<DashboardShell>,
    data: RwSignal<DashboardData>,
    generation: u64,
    write: impl FnOnce(&mut DashboardData),
) {
    if shell.with_untracked(|s| s.is_current(generation)) {
        data.update(write);
    } else {
        leptos::logging::log!("dropping dashboard data from superseded load {generation}");
    }
}

/// Fetch stats, recent orders, and store info into `data`.
fn load_dashboard_data(
    api: ApiClient,
    shell: RwSignal<DashboardShell>,
    data: RwSignal<DashboardData>,
    generation: u64,
) {
    let stats_api = api.clone();
    leptos::task::spawn_local(async move {
        match stats_api.dashboard_stats().await {
            Ok(stats) => store_if_current(shell, data, generation, |d| d.stats = Some(stats)),
            Err(e) => leptos::logging::error!("loading dashboard stats failed: {e}"),
        }
    });
    let orders_api = api.clone();
    leptos::task::spawn_local(async move {
        match orders_api.recent_orders().await {
            Ok(orders) => store_if_current(shell, data, generation, |d| d.recent_orders = Some(orders)),
            Err(e) => leptos::logging::error!("loading recent orders failed: {e}"),
        }
    });
    leptos::task::spawn_local(async move {
        match api.store_info().await {
            Ok(store) => store_if_current(shell, data, generation, |d| d.store = Some(store)),
            Err(e) => leptos::logging::error!("loading store info failed: {e}"),
        }
    });
}

#[component]
pub fn MyStorePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    if !require_session(&session, nav::MY_STORE) {
        return ().into_any();
    }

    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let swap_ms = expect_context::<ClientConfig>().dashboard_swap_ms;

    let shell = RwSignal::new(DashboardShell::new());
    let data = RwSignal::new(DashboardData::default());

    let api_select = api.clone();
    let select = move |tab: DashboardTab| {
        let generation = shell.try_update(|s| s.select(tab)).unwrap_or_default();
        let api = api_select.clone();
        leptos::task::spawn_local(async move {
            sleep_ms(swap_ms).await;
            if shell.try_update(|s| s.finish(generation)) != Some(true) {
                return;
            }
            if tab == DashboardTab::Dashboard {
                data.set(DashboardData::default());
                load_dashboard_data(api, shell, data, generation);
            }
        });
    };

    match DashboardTab::from_anchor(&nav::current_hash()) {
        DashboardTab::Dashboard => {
            let generation = shell.with_untracked(DashboardShell::generation);
            load_dashboard_data(api, shell, data, generation);
        }
        tab => select(tab),
    }

    let on_action = Callback::new(move |action: DashboardAction| match action.effect() {
        ActionEffect::Navigate(href) => nav::navigate(&href),
        ActionEffect::Notify(message) => notifier.info(message),
    });

    view! {
        <div class="dashboard-container">
            <aside class="sidebar">
                <nav class="sidebar-nav">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            let select = select.clone();
                            view! {
                                <a
                                    href=format!("#{}", tab.anchor())
                                    class=move || if shell.with(|s| s.active == tab) { "active" } else { "" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        select(tab);
                                    }
                                >
                                    <i class=tab.icon()></i>
                                    " "
                                    {tab.label()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <main class="dashboard-content">
                {move || match shell.with(|s| s.shown) {
                    Some(tab) => view! { <DashboardPanel tab=tab data=data on_action=on_action/> }.into_any(),
                    None => view! { <PanelLoading/> }.into_any(),
                }}
            </main>
        </div>
    }
    .into_any()
}
