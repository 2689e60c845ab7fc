//! "Comprar" button adding one unit of a product to the cart.

#[cfg(test)]
#[path = "add_to_cart_button_test.rs"]
mod add_to_cart_button_test;

use leptos::prelude::*;

use crate::components::header::refresh_cart_badge;
use crate::components::notification_stack::Notifier;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::ui::UiState;
use crate::util::auth::redirect_to_login_after;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AddOutcome {
    Added,
    LoginRequired,
    Failed,
}

impl AddOutcome {
    fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Added,
            Err(e) if e.requires_login() => Self::LoginRequired,
            Err(_) => Self::Failed,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Added => "Produto adicionado ao carrinho!",
            Self::LoginRequired => "Você precisa estar logado para adicionar itens ao carrinho.",
            Self::Failed => "Ocorreu um erro ao adicionar o produto.",
        }
    }
}

#[component]
pub fn AddToCartButton(product_id: i64, #[prop(optional)] small: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let login_delay = expect_context::<ClientConfig>().redirects.auth_required_ms;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if ui.try_update(|u| u.begin_add_to_cart(product_id)) != Some(true) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.add_cart_item(product_id).await;
            let outcome = AddOutcome::from_result(&result);
            match outcome {
                AddOutcome::Added => {
                    notifier.success(outcome.message());
                    refresh_cart_badge(api, ui);
                }
                AddOutcome::LoginRequired => {
                    notifier.error(outcome.message());
                    redirect_to_login_after(login_delay);
                }
                AddOutcome::Failed => {
                    if let Err(e) = result {
                        leptos::logging::warn!("add to cart failed for {product_id}: {e}");
                    }
                    notifier.error(outcome.message());
                }
            }
            ui.update(|u| u.finish_add_to_cart(product_id));
        });
    };

    view! {
        <button
            type="button"
            class={if small { "btn-buy-sm" } else { "btn-comprar" }}
            disabled=move || ui.get().is_adding_to_cart(product_id)
            on:click=on_click
        >
            <i class="fas fa-cart-plus"></i>
            " Comprar"
        </button>
    }
}
