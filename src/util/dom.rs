//! Small DOM conveniences that have no reactive counterpart.

/// Move keyboard focus to the element with `id`, if present.
pub fn focus_element(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = el {
            if let Err(e) = el.focus() {
                leptos::logging::warn!("focus #{id} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Native confirmation dialog. Always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
