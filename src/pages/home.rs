//! `/`: hero banner and the featured-products carousel.

use leptos::prelude::*;

use crate::components::product_carousel::ProductCarousel;
use crate::net::types::ProductCard;
use crate::state::favorites::FavoriteState;
use crate::util::nav;
use crate::util::page_data::{FEATURED_PRODUCTS_ID, embedded_json};

#[component]
pub fn HomePage() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoriteState>>();
    let products: Vec<ProductCard> = embedded_json(FEATURED_PRODUCTS_ID).unwrap_or_default();
    favorites.update(|f| f.seed(products.iter().map(|p| (p.id, p.favorito))));

    let has_products = !products.is_empty();

    view! {
        <section class="hero">
            <div class="container">
                <h1>"Tudo o que você procura, perto de você"</h1>
                <p>"Compre de lojas da sua cidade com entrega rápida."</p>
                <a href=nav::STORE_REGISTRATION class="btn btn-primary">"Venda Conosco"</a>
            </div>
        </section>
        <section class="produtos-destaque container">
            <h2 class="section-title">"Produtos em Destaque"</h2>
            {if has_products {
                view! { <ProductCarousel products=products/> }.into_any()
            } else {
                view! { <p class="empty-state">"Nenhum produto em destaque no momento."</p> }.into_any()
            }}
        </section>
    }
}
