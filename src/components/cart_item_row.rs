//! One cart line with quantity stepper and remove button.

use leptos::prelude::*;

use crate::state::cart::{CartItem, CartState, QuantityChange, parse_quantity_input};
use crate::util::format::format_brl;

const PLACEHOLDER_IMAGE: &str = "/imagens/placeholder.png";
const DEFAULT_DESCRIPTION: &str = "Produto de qualidade";

/// Row reading its line from `cart` by id, so quantity and price edits
/// re-render in place.
#[component]
pub fn CartItemRow(
    item_id: i64,
    cart: RwSignal<CartState>,
    on_quantity: Callback<(i64, QuantityChange)>,
    on_remove: Callback<i64>,
) -> impl IntoView {
    let item = move || cart.with(|c| c.snapshot().and_then(|s| s.item(item_id)).cloned());
    let field = move |f: fn(&CartItem) -> String| item().map(|i| f(&i)).unwrap_or_default();

    let name = move || field(|i| i.name.clone());
    let description = move || field(|i| i.description.clone().unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()));
    let image = move || field(|i| i.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()));
    let line_price = move || field(|i| format_brl(i.line_price));
    let unit_price = move || field(|i| format!("{} / un.", format_brl(i.unit_price)));
    let quantity = move || item().map_or(1, |i| i.quantity);
    let max_quantity = move || item().map_or(1, |i| i.max_quantity);
    let removing = move || cart.with(|c| c.is_removing(item_id));

    view! {
        <div class="cart-item" data-item-id=item_id.to_string()>
            <img src=image alt=name class="cart-item-img"/>
            <div class="cart-item-info">
                <h3>{name}</h3>
                <p>{description}</p>
                <div class="cart-item-price">{line_price}</div>
                <div class="cart-item-unit-price">{unit_price}</div>
                <div class="cart-item-quantity">
                    <button
                        type="button"
                        class="quantity-btn quantity-minus"
                        disabled=move || quantity() <= 1
                        on:click=move |_| on_quantity.run((item_id, QuantityChange::Decrement))
                    >
                        "-"
                    </button>
                    <input
                        type="number"
                        class="quantity-input"
                        min="1"
                        max=move || max_quantity().to_string()
                        prop:value=move || quantity().to_string()
                        on:change=move |ev| {
                            let requested = parse_quantity_input(&event_target_value(&ev));
                            on_quantity.run((item_id, QuantityChange::Set(requested)));
                        }
                    />
                    <button
                        type="button"
                        class="quantity-btn quantity-plus"
                        disabled=move || quantity() >= max_quantity()
                        on:click=move |_| on_quantity.run((item_id, QuantityChange::Increment))
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="cart-item-actions">
                <button
                    type="button"
                    class="btn-remove"
                    disabled=removing
                    on:click=move |_| on_remove.run(item_id)
                >
                    <i class="fas fa-trash"></i>
                    " Remover"
                </button>
            </div>
        </div>
    }
}
