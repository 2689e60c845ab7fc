use std::sync::Arc;

use super::*;
use crate::config::ClientConfig;
use crate::state::session::{MemoryStore, StoredProfile};

#[test]
fn should_redirect_when_no_token() {
    assert!(should_redirect_to_login(&Session::default()));
}

#[test]
fn should_not_redirect_with_token() {
    let session = Session { token: Some("abc".to_owned()), ..Session::default() };
    assert!(!should_redirect_to_login(&session));
}

#[test]
fn require_session_reflects_stored_token() {
    let ctx = SessionContext::new(Arc::new(MemoryStore::default()), &ClientConfig::default());
    assert!(!require_session(&ctx, nav::MY_STORE));
    ctx.set_session("abc", &StoredProfile::default());
    assert!(require_session(&ctx, nav::MY_STORE));
}
