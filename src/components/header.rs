//! Site header: logo, search bar, mobile menu, user actions, and cart badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet, so the cart badge is loaded at
//! page start and then polled on every page. Other components refresh it
//! after a successful cart mutation through [`refresh_cart_badge`].

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::notification_stack::Notifier;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::SessionContext;
use crate::state::ui::{UiState, UserAction};
use crate::util::nav;

/// Re-fetch the cart item count into the header badge.
pub fn refresh_cart_badge(api: ApiClient, ui: RwSignal<UiState>) {
    leptos::task::spawn_local(async move {
        let result = api.cart_count().await;
        if let Err(e) = &result {
            leptos::logging::log!("cart count unavailable: {e}");
        }
        ui.update(|u| u.cart_count = badge_count(u.cart_count, &result));
    });
}

/// New badge value: the server count, zero when the server refused, or the
/// current value when the request never completed.
fn badge_count(current: u32, result: &Result<u32, ApiError>) -> u32 {
    match result {
        Ok(count) => *count,
        Err(e) if e.is_http_status() => 0,
        Err(_) => current,
    }
}

/// Clear the local session, tell the backend, and return home.
fn logout(api: ApiClient, notifier: Notifier, delay_ms: u32) {
    api.session().clear_session();
    leptos::task::spawn_local(async move {
        match api.logout().await {
            Ok(()) => notifier.success("Logout realizado com sucesso!"),
            Err(e) => {
                leptos::logging::warn!("logout request failed: {e}");
                notifier.success("Logout realizado!");
            }
        }
        nav::navigate_after(nav::HOME.to_owned(), delay_ms);
    });
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let config = expect_context::<ClientConfig>();

    let authenticated = RwSignal::new(session.is_authenticated());

    refresh_cart_badge(api.clone(), ui);

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let api_poll = api.clone();
        let poll_ms = config.badge_poll_ms;
        leptos::task::spawn_local(async move {
            loop {
                crate::util::clock::sleep_ms(poll_ms).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_cart_badge(api_poll.clone(), ui);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let api_check = api.clone();
    leptos::task::spawn_local(async move {
        match api_check.check_auth().await {
            Ok(status) if status.authenticated => {
                leptos::logging::log!("authenticated as {}", status.username.unwrap_or_default());
            }
            Ok(_) => {}
            Err(e) => leptos::logging::log!("check-auth skipped: {e}"),
        }
    });

    let search = move || {
        if let Some(url) = nav::search_url(&ui.get_untracked().search_term) {
            nav::navigate(&url);
        }
    };
    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            search();
        }
    };

    let session_delay = config.redirects.session_change_ms;
    let on_logout = Callback::new(move |()| {
        authenticated.set(false);
        logout(api.clone(), notifier, session_delay);
    });

    view! {
        <header class="header">
            <div class="container header__inner">
                <a href=nav::HOME class="logo">
                    <i class="fas fa-store"></i>
                    " Na Loja Tem"
                </a>
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Buscar produtos, lojas..."
                        prop:value=move || ui.get().search_term
                        on:input=move |ev| ui.update(|u| u.search_term = event_target_value(&ev))
                        on:keypress=on_search_key
                    />
                    <button type="button" title="Buscar" on:click=move |_| search()>
                        <i class="fas fa-search"></i>
                    </button>
                </div>
                <button
                    class="mobile-menu-btn"
                    type="button"
                    title="Menu"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <i class=move || ui.get().menu_icon()></i>
                </button>
                <nav id="nav-menu" class=move || ui.get().nav_class()>
                    <a href=nav::HOME>"Início"</a>
                    <a href="/categorias">"Categorias"</a>
                    <a href="/lojas">"Lojas"</a>
                    <a href=nav::STORE_REGISTRATION>"Venda Conosco"</a>
                </nav>
                <div class="user-actions" id="user-actions-container">
                    <a href=nav::CART class="cart-link" title="Carrinho">
                        <i class="fas fa-shopping-cart"></i>
                        <span id="cart-count" class="cart-count">{move || ui.get().cart_count}</span>
                    </a>
                    {move || {
                        UserAction::for_session(authenticated.get())
                            .iter()
                            .map(|action| user_action_link(*action, on_logout))
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </header>
    }
}

fn user_action_link(action: UserAction, on_logout: Callback<()>) -> impl IntoView {
    let href = action.href().unwrap_or("#");
    view! {
        <a
            href=href
            class="user-action"
            on:click=move |ev| {
                if action == UserAction::Logout {
                    ev.prevent_default();
                    on_logout.run(());
                }
            }
        >
            <i class=action.icon()></i>
            " "
            {action.label()}
        </a>
    }
}
