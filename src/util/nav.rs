//! Navigation targets and full-page redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Most destinations (checkout, order detail, search results) are pages
//! rendered by the backend, so navigation leaves the client app through
//! `window.location` rather than the in-app router.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const CART: &str = "/carrinho";
pub const CHECKOUT: &str = "/checkout";
pub const MY_STORE: &str = "/minha-loja";
pub const STORE_REGISTRATION: &str = "/cadastro-loja";
pub const EDIT_STORE: &str = "/cadastro-loja?editar=true";

fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// `/login?redirect=<path>` so login can return the user where they were.
pub fn login_redirect(return_path: &str) -> String {
    format!("{LOGIN}?redirect={}", encode_component(return_path))
}

/// Search results URL, or `None` for a blank term.
pub fn search_url(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("/busca-resultado?q={}", encode_component(term)))
}

pub fn order_url(order_id: i64) -> String {
    format!("/pedido/{order_id}")
}

/// Sanitize a `redirect` query value to a same-origin absolute path.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => HOME.to_owned(),
    }
}

/// Path of the current page (`/` outside the browser).
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| HOME.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        HOME.to_owned()
    }
}

/// Fragment of the current URL including `#` (empty outside the browser).
pub fn current_hash() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Leave the client app for `href`.
pub fn navigate(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.location().set_href(href) {
                leptos::logging::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Navigate after `delay_ms`, leaving time for a notification to be read.
pub fn navigate_after(href: String, delay_ms: u32) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(delay_ms).await;
        navigate(&href);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (href, delay_ms);
    }
}
