//! `/cadastro-loja`: three-step store registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! All steps stay mounted so typed values survive moving back and forth;
//! only the active one is visible. [`FormWizardState`] decides whether the
//! user may move forward, and the final submit sends the multipart request
//! with the optional logo.

#[cfg(test)]
#[path = "store_registration_test.rs"]
mod store_registration_test;

use leptos::prelude::*;

use crate::components::masked_input::{CepField, MaskedInput};
use crate::components::notification_stack::Notifier;
use crate::components::step_indicator::StepIndicator;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::AddressLookup;
use crate::state::session::SessionContext;
use crate::state::wizard::{
    FIELD_CEP, FIELD_CITY, FIELD_CNPJ, FIELD_DESCRIPTION, FIELD_DISTRICT, FIELD_NUMBER, FIELD_STATE, FIELD_STORE_NAME,
    FIELD_STREET, FormValues, FormWizardState, StepError, registration_form, store_registration_steps,
};
use crate::util::auth::require_session;
use crate::util::dom::focus_element;
use crate::util::mask::MaskKind;
use crate::util::nav;
use crate::util::upload::{LogoUpload, UploadError};

/// One signal per form field.
#[derive(Clone, Copy)]
struct FieldSignals {
    store_name: RwSignal<String>,
    cnpj: RwSignal<String>,
    description: RwSignal<String>,
    cep: RwSignal<String>,
    street: RwSignal<String>,
    number: RwSignal<String>,
    district: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
}

impl FieldSignals {
    fn new() -> Self {
        Self {
            store_name: RwSignal::new(String::new()),
            cnpj: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            cep: RwSignal::new(String::new()),
            street: RwSignal::new(String::new()),
            number: RwSignal::new(String::new()),
            district: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
        }
    }

    fn values(&self) -> FormValues {
        [
            (FIELD_STORE_NAME, self.store_name),
            (FIELD_CNPJ, self.cnpj),
            (FIELD_DESCRIPTION, self.description),
            (FIELD_CEP, self.cep),
            (FIELD_STREET, self.street),
            (FIELD_NUMBER, self.number),
            (FIELD_DISTRICT, self.district),
            (FIELD_CITY, self.city),
            (FIELD_STATE, self.state),
        ]
        .into_iter()
        .map(|(id, signal)| (id.to_owned(), signal.get_untracked()))
        .collect()
    }

    /// Fill the address fields from a CEP lookup.
    fn apply_address(&self, address: &AddressLookup) {
        self.street.set(address.logradouro.clone());
        self.district.set(address.bairro.clone());
        self.city.set(address.localidade.clone());
        self.state.set(address.uf.clone());
    }
}

/// Notification text for a refused registration.
fn registration_failure_message(err: &ApiError) -> String {
    let reason = match err {
        ApiError::Rejected { message, .. } => message.as_str(),
        _ => "Erro ao cadastrar loja",
    };
    format!("Erro ao cadastrar loja: {reason}")
}

fn report_step_error(notifier: Notifier, err: &StepError) {
    notifier.error(err.to_string());
    focus_element(err.field());
}

#[component]
pub fn StoreRegistrationPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    if !require_session(&session, nav::STORE_REGISTRATION) {
        return ().into_any();
    }

    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let redirect_delay = expect_context::<ClientConfig>().redirects.registration_ms;

    let wizard = RwSignal::new(FormWizardState::new(store_registration_steps()));
    let fields = FieldSignals::new();
    let logo = RwSignal::new_local(None::<LogoUpload>);
    let logo_preview = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_next = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let values = fields.values();
        if let Some(Err(e)) = wizard.try_update(|w| w.advance(&values)) {
            report_step_error(notifier, &e);
        }
    };
    let on_prev = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        wizard.update(FormWizardState::retreat);
    };

    let on_address = Callback::new(move |address: AddressLookup| fields.apply_address(&address));

    let on_logo = move |ev: leptos::ev::Event| {
        let Some(selection) = selected_logo(&ev) else {
            return;
        };
        match selection {
            Ok(upload) => {
                logo_preview.set(preview_url(&upload));
                logo.set(Some(upload));
            }
            Err(e) => notifier.error(e.to_string()),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let values = fields.values();
        if let Err(e) = wizard.with_untracked(|w| w.validate_current(&values)) {
            report_step_error(notifier, &e);
            notifier.error("Por favor, preencha todos os campos obrigatórios");
            return;
        }
        submitting.set(true);

        let form = registration_form(&values);
        let upload = logo.get_untracked();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.register_store(&form, upload.as_ref()).await {
                Ok(()) => {
                    leptos::logging::log!("store {} registered", form.nome);
                    notifier.success("Loja cadastrada com sucesso!");
                    nav::navigate_after(nav::MY_STORE.to_owned(), redirect_delay);
                }
                Err(e) => {
                    leptos::logging::warn!("store registration failed: {e}");
                    notifier.error(registration_failure_message(&e));
                    submitting.set(false);
                }
            }
        });
    };

    let step_class = move |index: usize| {
        move || if wizard.with(|w| w.current_step == index) { "form-step active" } else { "form-step" }
    };

    view! {
        <section class="store-registration container">
            <h1>"Cadastre sua Loja"</h1>
            <StepIndicator wizard=wizard/>
            <form id="store-form" on:submit=on_submit>
                <div class=step_class(0)>
                    <TextField id=FIELD_STORE_NAME label="Nome da Loja" value=fields.store_name required=true/>
                    <div class="form-group">
                        <label for=FIELD_CNPJ>"CNPJ"</label>
                        <MaskedInput id=FIELD_CNPJ kind=MaskKind::Cnpj value=fields.cnpj required=true/>
                    </div>
                    <div class="form-group">
                        <label for=FIELD_DESCRIPTION>"Descrição"</label>
                        <textarea
                            id=FIELD_DESCRIPTION
                            rows="4"
                            prop:value=move || fields.description.get()
                            on:input=move |ev| fields.description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn-next" on:click=on_next>"Próximo"</button>
                    </div>
                </div>
                <div class=step_class(1)>
                    <div class="form-group">
                        <label for=FIELD_CEP>"CEP"</label>
                        <CepField value=fields.cep on_address=on_address/>
                    </div>
                    <TextField id=FIELD_STREET label="Rua" value=fields.street required=true/>
                    <TextField id=FIELD_NUMBER label="Número" value=fields.number required=true/>
                    <TextField id=FIELD_DISTRICT label="Bairro" value=fields.district required=true/>
                    <TextField id=FIELD_CITY label="Cidade" value=fields.city required=true/>
                    <TextField id=FIELD_STATE label="Estado" value=fields.state required=true/>
                    <div class="form-actions">
                        <button type="button" class="btn-prev" on:click=on_prev>"Anterior"</button>
                        <button type="button" class="btn-next" on:click=on_next>"Próximo"</button>
                    </div>
                </div>
                <div class=step_class(2)>
                    <label class="file-upload" for="logo-loja">
                        <Show
                            when=move || logo_preview.get().is_some()
                            fallback=|| {
                                view! {
                                    <i class="fas fa-cloud-upload-alt"></i>
                                    <p>"Clique para enviar o logo (JPG ou PNG, até 5MB)"</p>
                                }
                            }
                        >
                            <img class="preview-image" src=move || logo_preview.get().unwrap_or_default() alt="Logo"/>
                        </Show>
                        <input id="logo-loja" type="file" accept="image/jpeg,image/png" on:change=on_logo/>
                    </label>
                    <div class="form-actions">
                        <button type="button" class="btn-prev" on:click=on_prev>"Anterior"</button>
                        <button type="submit" class="btn-submit" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    view! { <i class="fas fa-spinner fa-spin"></i> " Cadastrando..." }.into_any()
                                } else {
                                    view! { <i class="fas fa-check"></i> " Cadastrar Loja" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </form>
        </section>
    }
    .into_any()
}

#[component]
fn TextField(id: &'static str, label: &'static str, value: RwSignal<String>, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type="text"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Validated logo from a file input change, or `None` when nothing was picked.
#[cfg(feature = "csr")]
fn selected_logo(ev: &leptos::ev::Event) -> Option<Result<LogoUpload, UploadError>> {
    use wasm_bindgen::JsCast as _;
    let file = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?.files()?.get(0)?;
    Some(LogoUpload::from_file(file))
}

#[cfg(not(feature = "csr"))]
fn selected_logo(_ev: &leptos::ev::Event) -> Option<Result<LogoUpload, UploadError>> {
    None
}

/// Object URL for previewing the selected logo.
fn preview_url(upload: &LogoUpload) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::Url::create_object_url_with_blob(&upload.file).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = upload;
        None
    }
}
