use std::sync::Arc;

use super::*;
use crate::state::session::MemoryStore;

fn client(config: ClientConfig) -> ApiClient {
    let session = SessionContext::new(Arc::new(MemoryStore::default()), &config);
    ApiClient::new(config, session)
}

#[test]
fn cart_item_path_embeds_id() {
    assert_eq!(cart_item_path(17), "/api/carrinho/itens/17");
}

#[test]
fn cep_lookup_url_targets_json_endpoint() {
    assert_eq!(cep_lookup_url("https://viacep.com.br", "01310930"), "https://viacep.com.br/ws/01310930/json/");
    assert_eq!(cep_lookup_url("https://viacep.com.br/", "01310930"), "https://viacep.com.br/ws/01310930/json/");
}

#[test]
fn urls_are_prefixed_with_api_base() {
    let api = client(ClientConfig { api_base: "https://loja.example".to_owned(), ..ClientConfig::default() });
    assert_eq!(api.url(CART_ITEMS_PATH), "https://loja.example/api/carrinho/itens");

    let same_origin = client(ClientConfig::default());
    assert_eq!(same_origin.url(LOGIN_PATH), "/api/auth/login");
}

#[test]
fn client_exposes_its_session() {
    let api = client(ClientConfig::default());
    api.session().set_session("tok", &crate::state::session::StoredProfile::default());
    assert_eq!(api.session().token().as_deref(), Some("tok"));
    assert_eq!(api.config().token_key, "jwtToken");
}
