//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::notification_stack::{NotificationStack, Notifier};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    cart::CartPage, home::HomePage, login::LoginPage, my_store::MyStorePage,
    store_registration::StoreRegistrationPage,
};
use crate::state::favorites::FavoriteState;
use crate::state::session::SessionContext;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared handles every page reads and sets up client-side
/// routing below the header.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    let session = SessionContext::browser(&config);
    let api = ApiClient::new(config.clone(), session.clone());
    let notifier = Notifier::new(config.notification_ttl_ms);

    provide_context(config);
    provide_context(session);
    provide_context(api);
    provide_context(notifier);
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(FavoriteState::default()));

    view! {
        <Stylesheet id="storefront" href="/styles/global.css"/>
        <Title text="Na Loja Tem"/>

        <Router>
            <Header/>
            <main class="page">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("carrinho") view=CartPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("cadastro-loja") view=StoreRegistrationPage/>
                    <Route path=StaticSegment("minha-loja") view=MyStorePage/>
                </Routes>
            </main>
            <NotificationStack/>
        </Router>
    }
}
