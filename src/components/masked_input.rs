//! Text inputs that re-apply a Brazilian field mask on every keystroke.

use leptos::prelude::*;

use crate::components::notification_stack::Notifier;
use crate::net::api::ApiClient;
use crate::net::types::AddressLookup;
use crate::util::mask::{CepWatcher, MaskKind};

/// Input bound to `value`, formatted with `kind`.
#[component]
pub fn MaskedInput(
    id: &'static str,
    kind: MaskKind,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=id
            type="text"
            inputmode="numeric"
            placeholder=kind.placeholder()
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(kind.apply(&event_target_value(&ev)))
        />
    }
}

/// CEP input that resolves the address once per complete code, on input or
/// on blur, and hands the result to `on_address`.
#[component]
pub fn CepField(value: RwSignal<String>, on_address: Callback<AddressLookup>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let watcher = StoredValue::new(CepWatcher::default());

    let lookup = move |cep: String| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.lookup_address(&cep).await {
                Ok(address) if !address.erro => {
                    on_address.run(address);
                    notifier.success("Endereço preenchido automaticamente!");
                }
                Ok(_) => leptos::logging::log!("CEP {cep} not found"),
                Err(e) => leptos::logging::error!("CEP lookup for {cep} failed: {e}"),
            }
        });
    };
    let lookup_on_blur = lookup.clone();

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let Some(input) = watcher.try_update_value(|w| w.on_input(&raw)) else {
            return;
        };
        value.set(input.display);
        if let Some(cep) = input.lookup {
            lookup(cep);
        }
    };
    let on_blur = move |_| {
        let raw = value.get_untracked();
        if let Some(cep) = watcher.try_update_value(|w| w.on_blur(&raw)).flatten() {
            lookup_on_blur(cep);
        }
    };

    view! {
        <input
            id="cep"
            name="cep"
            type="text"
            inputmode="numeric"
            placeholder=MaskKind::Cep.placeholder()
            required=true
            prop:value=move || value.get()
            on:input=on_input
            on:blur=on_blur
        />
    }
}
