use super::*;

fn memory_session() -> (Arc<MemoryStore>, SessionContext) {
    let store = Arc::new(MemoryStore::default());
    let ctx = SessionContext::new(store.clone(), &ClientConfig::default());
    (store, ctx)
}

fn profile(name: &str, roles: &[&str]) -> StoredProfile {
    StoredProfile { username: name.to_owned(), authorities: roles.iter().map(|r| (*r).to_owned()).collect() }
}

// =============================================================
// Headers
// =============================================================

#[test]
fn auth_headers_without_token_only_content_type() {
    let (_, ctx) = memory_session();
    assert_eq!(ctx.auth_headers(), vec![("Content-Type", "application/json".to_owned())]);
    assert_eq!(ctx.bearer_header(), None);
}

#[test]
fn auth_headers_with_token_adds_bearer() {
    let (_, ctx) = memory_session();
    ctx.set_session("abc.def.ghi", &profile("ana@loja.com", &["ROLE_USER"]));
    assert_eq!(
        ctx.auth_headers(),
        vec![
            ("Content-Type", "application/json".to_owned()),
            ("Authorization", "Bearer abc.def.ghi".to_owned()),
        ]
    );
    assert_eq!(ctx.bearer_header(), Some(("Authorization", "Bearer abc.def.ghi".to_owned())));
}

#[test]
fn blank_token_counts_as_absent() {
    let (store, ctx) = memory_session();
    store.set("jwtToken", "  ");
    assert_eq!(ctx.token(), None);
    assert_eq!(ctx.auth_headers().len(), 1);
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn set_session_persists_both_keys() {
    let (store, ctx) = memory_session();
    ctx.set_session("tok", &profile("ana", &["ROLE_USER", "ROLE_LOJISTA"]));

    assert_eq!(store.get("jwtToken").as_deref(), Some("tok"));
    let raw = store.get("usuario").unwrap();
    let parsed: StoredProfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.username, "ana");

    let session = ctx.current();
    assert!(session.is_authenticated());
    assert_eq!(session.display_name, "ana");
    assert!(session.roles.contains("ROLE_LOJISTA"));
}

#[test]
fn clear_session_removes_both_keys() {
    let (store, ctx) = memory_session();
    ctx.set_session("tok", &profile("ana", &[]));
    ctx.clear_session();
    assert_eq!(store.get("jwtToken"), None);
    assert_eq!(store.get("usuario"), None);
    assert_eq!(ctx.current(), Session::default());
}

#[test]
fn missing_profile_keeps_token_session() {
    let (store, ctx) = memory_session();
    store.set("jwtToken", "tok");
    let session = ctx.current();
    assert_eq!(session.token.as_deref(), Some("tok"));
    assert!(session.display_name.is_empty());
    assert!(session.roles.is_empty());
}

#[test]
fn malformed_profile_fails_open_to_logged_out() {
    let (store, ctx) = memory_session();
    store.set("jwtToken", "tok");
    store.set("usuario", "{not json");
    let session = ctx.current();
    assert!(!session.is_authenticated());
    assert!(!ctx.is_authenticated());
}

#[test]
fn profile_with_unknown_fields_still_parses() {
    let (store, ctx) = memory_session();
    store.set("jwtToken", "tok");
    store.set("usuario", r#"{"username":"bia","authorities":["ROLE_USER"],"extra":1}"#);
    assert_eq!(ctx.current().display_name, "bia");
}

#[test]
fn custom_keys_come_from_config() {
    let store = Arc::new(MemoryStore::default());
    let config = ClientConfig { token_key: "t".to_owned(), profile_key: "p".to_owned(), ..ClientConfig::default() };
    let ctx = SessionContext::new(store.clone(), &config);
    ctx.set_session("tok", &profile("ana", &[]));
    assert_eq!(store.get("t").as_deref(), Some("tok"));
    assert!(store.get("p").is_some());
    assert_eq!(store.get("jwtToken"), None);
}

#[test]
fn browser_store_is_inert_outside_browser() {
    let ctx = SessionContext::browser(&ClientConfig::default());
    ctx.set_session("tok", &profile("ana", &[]));
    assert_eq!(ctx.token(), None);
    ctx.clear_session();
}
