//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages (store registration, seller dashboard) and protected
//! actions (add to cart, checkout) apply identical redirect behavior: the
//! user lands on `/login` with a `redirect` back to where they were.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{Session, SessionContext};
use crate::util::nav;

/// True when a protected page must send the user to login.
pub fn should_redirect_to_login(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to login when no session is stored.
///
/// Returns `true` when the page may render.
pub fn require_session(session: &SessionContext, return_path: &str) -> bool {
    if should_redirect_to_login(&session.current()) {
        leptos::logging::log!("no session, redirecting to login from {return_path}");
        nav::navigate(&nav::login_redirect(return_path));
        return false;
    }
    true
}

/// Send the user to login after `delay_ms`, returning to the current page.
pub fn redirect_to_login_after(delay_ms: u32) {
    nav::navigate_after(nav::login_redirect(&nav::current_path()), delay_ms);
}
