//! Home page product carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paging rules live in [`CarouselState`]; this component measures the card
//! stride from the DOM, follows viewport resizes, and drives auto-advance
//! while the document is visible.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::config::ClientConfig;
use crate::net::types::ProductCard as ProductCardData;
use crate::state::carousel::CarouselState;

/// Width assumed when the viewport cannot be measured.
const FALLBACK_VIEWPORT_PX: f64 = 1200.0;

#[component]
pub fn ProductCarousel(products: Vec<ProductCardData>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let carousel = RwSignal::new(CarouselState::new(products.len(), viewport_width()));
    let stride = RwSignal::new(0.0_f64);
    let track_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if let Some(track) = track_ref.get() {
                stride.set(measure_stride(&track));
            }
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if carousel.try_update(|c| c.resize(viewport_width())) == Some(true) {
                if let Some(track) = track_ref.get_untracked() {
                    stride.set(measure_stride(&track));
                }
            }
        });
        on_cleanup(move || resize.remove());

        if products.len() > 1 {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            let interval_ms = config.carousel_interval_ms;
            leptos::task::spawn_local(async move {
                loop {
                    crate::util::clock::sleep_ms(interval_ms).await;
                    if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    let visible = page_visible();
                    carousel.update(|c| {
                        c.tick(visible);
                    });
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (&config, stride);
    }

    let transform = move || format!("translateX({}px)", carousel.get().offset_px(stride.get()));

    view! {
        <div class="carrossel-container">
            <button
                type="button"
                class="carrossel-btn prev"
                title="Anterior"
                disabled=move || !carousel.get().can_go_prev()
                on:click=move |_| carousel.update(CarouselState::prev)
            >
                <i class="fas fa-chevron-left"></i>
            </button>
            <div class="carrossel-viewport">
                <div class="carrossel" node_ref=track_ref style:transform=transform>
                    {products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <button
                type="button"
                class="carrossel-btn next"
                title="Próximo"
                disabled=move || !carousel.get().can_go_next()
                on:click=move |_| carousel.update(CarouselState::next)
            >
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}

fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_PX)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_VIEWPORT_PX
    }
}

#[cfg(feature = "csr")]
fn page_visible() -> bool {
    web_sys::window().and_then(|w| w.document()).is_some_and(|d| !d.hidden())
}

/// First card's width plus its horizontal margins.
#[cfg(feature = "csr")]
fn measure_stride(track: &web_sys::HtmlElement) -> f64 {
    use wasm_bindgen::JsCast as _;

    let Some(card) = track.first_element_child().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
        return 0.0;
    };
    let margins = web_sys::window()
        .and_then(|w| w.get_computed_style(&card).ok().flatten())
        .map_or(0.0, |style| {
            let px = |prop: &str| {
                style
                    .get_property_value(prop)
                    .ok()
                    .and_then(|v| v.trim_end_matches("px").trim().parse::<f64>().ok())
                    .unwrap_or(0.0)
            };
            px("margin-left") + px("margin-right")
        });
    f64::from(card.offset_width()) + margins
}
