//! `/login`: credential form, post-registration notice, and return redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::notification_stack::Notifier;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::LoginResponse;
use crate::state::session::{SessionContext, StoredProfile};
use crate::util::nav;

/// Inline message for a failed login.
fn login_error_message(err: &ApiError) -> &'static str {
    if err.is_http_status() { "Credenciais inválidas" } else { "Não foi possível conectar ao servidor." }
}

fn stored_profile(resp: &LoginResponse) -> StoredProfile {
    StoredProfile { username: resp.username.clone(), authorities: resp.authorities.clone() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();

    if session.is_authenticated() {
        nav::navigate(nav::HOME);
    }
    if query.with_untracked(|q| q.get("registroSucesso").as_deref() == Some("true")) {
        notifier.success("Conta criada com sucesso! Faça login para continuar.");
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let redirect_delay = config.redirects.session_change_ms;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let target = nav::post_login_target(query.with_untracked(|q| q.get("redirect")).as_deref());
        leptos::task::spawn_local(async move {
            match api.login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(resp) => {
                    api.session().set_session(&resp.token, &stored_profile(&resp));
                    leptos::logging::log!("logged in as {}", resp.username);
                    notifier.success("Login realizado com sucesso!");
                    nav::navigate_after(target, redirect_delay);
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(login_error_message(&e)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="login-page container">
            <form id="login-form" class="login-form" on:submit=on_submit>
                <h1>"Entrar"</h1>
                <Show when=move || error.get().is_some()>
                    <div id="login-message" class="alert alert-error">
                        <i class="fas fa-exclamation-circle"></i>
                        " "
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <div class="form-group">
                    <label for="email">"E-mail"</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Senha"</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button id="login-button" type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            view! { <i class="fas fa-spinner fa-spin"></i> " Entrando..." }.into_any()
                        } else {
                            view! { <i class="fas fa-sign-in-alt"></i> " Entrar" }.into_any()
                        }
                    }}
                </button>
                <a
                    href="#"
                    id="forgot-password"
                    on:click=move |ev| {
                        ev.prevent_default();
                        notifier.warning("Em breve implementaremos a recuperação de senha!");
                    }
                >
                    "Esqueci minha senha"
                </a>
            </form>
        </section>
    }
}
