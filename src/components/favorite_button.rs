//! Heart button that toggles a product's favorite flag.

#[cfg(test)]
#[path = "favorite_button_test.rs"]
mod favorite_button_test;

use leptos::prelude::*;

use crate::components::notification_stack::Notifier;
use crate::net::api::ApiClient;
use crate::state::favorites::FavoriteState;

/// Flips immediately; a refused or failed request flips back without a
/// success notice.
#[component]
pub fn FavoriteButton(product_id: i64, #[prop(optional)] small: bool) -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoriteState>>();
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let Some(toggle) = favorites.try_update(|f| f.begin_toggle(product_id)).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.toggle_favorite(toggle.action, product_id).await;
            favorites.update(|f| f.settle(toggle, result.is_ok()));
            match result {
                Ok(()) => notifier.success(toggle.action.success_message()),
                Err(e) => leptos::logging::warn!("favorite toggle for {product_id} failed: {e}"),
            }
        });
    };

    let is_favorite = move || favorites.get().is_favorite(product_id);

    view! {
        <button
            type="button"
            class=move || button_class(small, is_favorite())
            title="Favoritar"
            disabled=move || favorites.get().is_pending(product_id)
            on:click=on_click
        >
            <i class=move || heart_icon(is_favorite())></i>
        </button>
    }
}

fn button_class(small: bool, active: bool) -> &'static str {
    match (small, active) {
        (false, false) => "btn-favorito",
        (false, true) => "btn-favorito ativo",
        (true, false) => "btn-fav-sm",
        (true, true) => "btn-fav-sm ativo",
    }
}

fn heart_icon(active: bool) -> &'static str {
    if active { "fas fa-heart" } else { "far fa-heart" }
}
