//! `/carrinho`: cart lines, quantity edits, removal, and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a [`CartState`] signal. Quantity edits go through
//! [`CartState::request_quantity`] so the clamped value shows at once and
//! only the newest server answer per item is applied. Removals wait for the
//! server before the row disappears. Every confirmed mutation refreshes the
//! header badge.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::components::cart_item_row::CartItemRow;
use crate::components::header::refresh_cart_badge;
use crate::components::notification_stack::Notifier;
use crate::config::{ClientConfig, RedirectDelays};
use crate::net::api::ApiClient;
use crate::state::cart::{CartState, QuantityChange};
use crate::state::session::SessionContext;
use crate::state::ui::UiState;
use crate::util::dom;
use crate::util::format::{FREE_SHIPPING_LABEL, format_brl};
use crate::util::nav;

const CONFIRM_REMOVE: &str = "Tem certeza que deseja remover este item do carrinho?";

/// What the checkout button does for the current session and cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckoutStep {
    LoginRequired,
    EmptyCart,
    Proceed,
}

impl CheckoutStep {
    fn decide(authenticated: bool, item_count: usize) -> Self {
        if !authenticated {
            Self::LoginRequired
        } else if item_count == 0 {
            Self::EmptyCart
        } else {
            Self::Proceed
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::LoginRequired => "Você precisa estar logado para finalizar a compra!",
            Self::EmptyCart => "Seu carrinho está vazio!",
            Self::Proceed => "Redirecionando para checkout...",
        }
    }

    /// Where the button sends the user, and after how long.
    fn redirect(self, delays: RedirectDelays) -> Option<(String, u32)> {
        match self {
            Self::LoginRequired => Some((nav::login_redirect(nav::CART), delays.checkout_login_ms)),
            Self::EmptyCart => None,
            Self::Proceed => Some((nav::CHECKOUT.to_owned(), delays.checkout_ms)),
        }
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let cart = RwSignal::new(CartState::default());

    cart.update(CartState::begin_load);
    let api_load = api.clone();
    leptos::task::spawn_local(async move {
        let result = api_load.cart_items().await;
        if let Err(e) = &result {
            leptos::logging::warn!("cart load failed: {e}");
        }
        cart.update(|c| c.finish_load(result));
    });

    let api_quantity = api.clone();
    let on_quantity = Callback::new(move |(item_id, change): (i64, QuantityChange)| {
        let Some(ticket) = cart.try_update(|c| c.request_quantity(item_id, change)).flatten() else {
            return;
        };
        let api = api_quantity.clone();
        leptos::task::spawn_local(async move {
            match api.update_cart_item(ticket.item_id, ticket.quantity).await {
                Ok(resp) => {
                    if cart.try_update(|c| c.apply_quantity(&ticket, &resp)) != Some(true) {
                        leptos::logging::log!("dropping stale quantity response for item {}", ticket.item_id);
                    }
                    refresh_cart_badge(api, ui);
                }
                Err(e) => {
                    leptos::logging::warn!("quantity update for item {} failed: {e}", ticket.item_id);
                    notifier.error("Erro ao atualizar quantidade");
                }
            }
        });
    });

    let api_remove = api.clone();
    let on_remove = Callback::new(move |item_id: i64| {
        if cart.with_untracked(|c| c.is_removing(item_id)) || !dom::confirm(CONFIRM_REMOVE) {
            return;
        }
        if cart.try_update(|c| c.begin_remove(item_id)) != Some(true) {
            return;
        }
        let api = api_remove.clone();
        leptos::task::spawn_local(async move {
            let result = api.remove_cart_item(item_id).await;
            cart.update(|c| {
                c.finish_remove(item_id, result.is_ok());
            });
            match result {
                Ok(()) => {
                    notifier.success("Item removido do carrinho");
                    refresh_cart_badge(api, ui);
                }
                Err(e) => {
                    leptos::logging::warn!("removing item {item_id} failed: {e}");
                    notifier.error("Erro ao remover item do carrinho");
                }
            }
        });
    });

    let redirects = config.redirects;
    let on_checkout = Callback::new(move |_: leptos::ev::MouseEvent| {
        let step = CheckoutStep::decide(session.is_authenticated(), cart.with_untracked(CartState::item_count));
        if step == CheckoutStep::Proceed {
            notifier.info(step.message());
        } else {
            notifier.error(step.message());
        }
        if let Some((href, delay_ms)) = step.redirect(redirects) {
            nav::navigate_after(href, delay_ms);
        }
    });

    let item_ids = move || {
        cart.with(|c| c.snapshot().map(|s| s.items.iter().map(|i| i.id).collect::<Vec<_>>()).unwrap_or_default())
    };
    let summary = move || cart.with(|c| c.snapshot().map(|s| s.summary()));
    let subtotal = move || format_brl(summary().map_or(Decimal::ZERO, |s| s.subtotal));
    let total = move || format_brl(summary().map_or(Decimal::ZERO, |s| s.total));

    view! {
        <section class="cart-page container">
            <h1>"Meu Carrinho"</h1>
            <Show when=move || cart.with(CartState::is_loading)>
                <div class="loading">
                    <i class="fas fa-spinner fa-spin"></i>
                    " Carregando carrinho..."
                </div>
            </Show>
            <Show when=move || cart.with(CartState::shows_empty)>
                <EmptyCart/>
            </Show>
            <Show when=move || cart.with(|c| c.snapshot().is_some())>
                <div class="cart-content">
                    <div class="cart-items">
                        <For
                            each=item_ids
                            key=|id| *id
                            children=move |item_id: i64| {
                                view! {
                                    <CartItemRow item_id=item_id cart=cart on_quantity=on_quantity on_remove=on_remove/>
                                }
                            }
                        />
                    </div>
                    <aside class="cart-summary">
                        <h2>"Resumo do Pedido"</h2>
                        <div class="summary-row">
                            <span>"Subtotal"</span>
                            <span id="subtotal">{subtotal}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Frete"</span>
                            <span class="free-shipping">{FREE_SHIPPING_LABEL}</span>
                        </div>
                        <div class="summary-row summary-total">
                            <span>"Total"</span>
                            <span id="total">{total}</span>
                        </div>
                        <button type="button" class="btn-checkout" on:click=move |ev| on_checkout.run(ev)>
                            "Finalizar Compra"
                        </button>
                    </aside>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="empty-cart">
            <i class="fas fa-shopping-cart"></i>
            <h2>"Seu carrinho está vazio"</h2>
            <p>"Adicione produtos para ver seus itens aqui."</p>
            <a href=nav::HOME class="btn-continue">"Continuar Comprando"</a>
        </div>
    }
}
