//! Product card used by the home carousel.

use leptos::prelude::*;

use crate::components::add_to_cart_button::AddToCartButton;
use crate::components::favorite_button::FavoriteButton;
use crate::net::types::ProductCard as ProductCardData;
use crate::util::format::format_brl;

const PLACEHOLDER_IMAGE: &str = "/images/produto-sem-foto.png";

#[component]
pub fn ProductCard(product: ProductCardData) -> impl IntoView {
    let image = product.foto_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let href = format!("/produto/{}", product.id);

    view! {
        <div class="produto-card">
            <div class="produto-card__image">
                <a href=href.clone()>
                    <img src=image alt=product.nome.clone() loading="lazy"/>
                </a>
                <FavoriteButton product_id=product.id/>
            </div>
            <div class="produto-card__info">
                <a href=href class="produto-card__name">{product.nome.clone()}</a>
                {product.loja_nome.clone().map(|loja| view! { <span class="produto-card__store">{loja}</span> })}
                <span class="produto-card__price">{format_brl(product.preco)}</span>
                <AddToCartButton product_id=product.id/>
            </div>
        </div>
    }
}
