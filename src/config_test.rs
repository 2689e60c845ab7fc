use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn from_meta_without_tags_uses_defaults() {
    let cfg = ClientConfig::from_meta(|_| None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.token_key, "jwtToken");
    assert_eq!(cfg.profile_key, "usuario");
    assert_eq!(cfg.cep_service_base, DEFAULT_CEP_SERVICE_BASE);
    assert_eq!(cfg.notification_ttl_ms, 5_000);
    assert_eq!(cfg.badge_poll_ms, 30_000);
    assert_eq!(cfg.carousel_interval_ms, 5_000);
}

#[test]
fn from_meta_trims_trailing_slashes_on_bases() {
    let cfg = ClientConfig::from_meta(lookup_from(&[
        ("marketplace:api-base", "https://loja.example.com/"),
        ("marketplace:cep-service", "http://cep.local//"),
    ]));
    assert_eq!(cfg.api_base, "https://loja.example.com");
    assert_eq!(cfg.cep_service_base, "http://cep.local");
}

#[test]
fn from_meta_ignores_blank_values() {
    let cfg = ClientConfig::from_meta(lookup_from(&[("marketplace:token-key", "   ")]));
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);
}

#[test]
fn from_meta_rejects_invalid_poll_interval() {
    let zero = ClientConfig::from_meta(lookup_from(&[("marketplace:badge-poll-ms", "0")]));
    assert_eq!(zero.badge_poll_ms, DEFAULT_BADGE_POLL_MS);

    let junk = ClientConfig::from_meta(lookup_from(&[("marketplace:badge-poll-ms", "soon")]));
    assert_eq!(junk.badge_poll_ms, DEFAULT_BADGE_POLL_MS);

    let custom = ClientConfig::from_meta(lookup_from(&[("marketplace:badge-poll-ms", "10000")]));
    assert_eq!(custom.badge_poll_ms, 10_000);
}

#[test]
fn api_url_prefixes_base() {
    let same_origin = ClientConfig::default();
    assert_eq!(same_origin.api_url("/api/carrinho"), "/api/carrinho");

    let remote = ClientConfig { api_base: "https://api.example.com".to_owned(), ..ClientConfig::default() };
    assert_eq!(remote.api_url("/api/carrinho"), "https://api.example.com/api/carrinho");
}

#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}

#[test]
fn redirect_delays_default_to_page_timings() {
    let delays = ClientConfig::default().redirects;
    assert_eq!(delays.auth_required_ms, 2_000);
    assert_eq!(delays.session_change_ms, 1_500);
    assert_eq!(delays.registration_ms, 2_000);
    assert_eq!(delays.checkout_ms, 1_000);
    assert_eq!(delays.checkout_login_ms, 1_500);
}
