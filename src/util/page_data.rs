//! Data embedded in the server-rendered page.
//!
//! The backend renders product lists into
//! `<script type="application/json" id="...">` blocks so the client can build
//! cards without an extra request.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use serde::de::DeserializeOwned;

/// Element id holding the home page's featured products.
pub const FEATURED_PRODUCTS_ID: &str = "produtos-destaque-data";

/// Parse an embedded JSON block; absent or malformed data yields `None`.
pub fn parse_embedded<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("embedded page data is malformed: {e}");
            None
        }
    }
}

/// Read and parse the JSON block with the given element id.
pub fn embedded_json<T: DeserializeOwned>(element_id: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.text_content());
        parse_embedded(text.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = element_id;
        None
    }
}
