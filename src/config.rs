//! Client configuration resolved from page `<meta>` tags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront pages are served by the marketplace backend. Deployment
//! specific values (API origin, address service, storage keys) can be
//! overridden per page with `<meta name="marketplace:*">` tags; everything
//! else falls back to production defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CEP_SERVICE_BASE: &str = "https://viacep.com.br";
pub const DEFAULT_TOKEN_KEY: &str = "jwtToken";
pub const DEFAULT_PROFILE_KEY: &str = "usuario";

pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 5_000;
pub const DEFAULT_BADGE_POLL_MS: u32 = 30_000;
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_DASHBOARD_SWAP_MS: u32 = 500;

const META_API_BASE: &str = "marketplace:api-base";
const META_CEP_SERVICE: &str = "marketplace:cep-service";
const META_TOKEN_KEY: &str = "marketplace:token-key";
const META_PROFILE_KEY: &str = "marketplace:profile-key";
const META_BADGE_POLL_MS: &str = "marketplace:badge-poll-ms";

/// Delays applied before a navigation that follows a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectDelays {
    /// After an auth-required response (add to cart, checkout).
    pub auth_required_ms: u32,
    /// After login/logout completes.
    pub session_change_ms: u32,
    /// After store registration succeeds.
    pub registration_ms: u32,
    /// Before leaving for checkout.
    pub checkout_ms: u32,
    /// Checkout attempted without a session.
    pub checkout_login_ms: u32,
}

impl Default for RedirectDelays {
    fn default() -> Self {
        Self {
            auth_required_ms: 2_000,
            session_change_ms: 1_500,
            registration_ms: 2_000,
            checkout_ms: 1_000,
            checkout_login_ms: 1_500,
        }
    }
}

/// Typed client configuration, provided to components as Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prefix for `/api/*` calls; empty means same origin.
    pub api_base: String,
    /// Base URL of the CEP address-resolution service.
    pub cep_service_base: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// `localStorage` key holding the JSON user profile.
    pub profile_key: String,
    pub notification_ttl_ms: u32,
    pub badge_poll_ms: u32,
    pub carousel_interval_ms: u32,
    pub dashboard_swap_ms: u32,
    pub redirects: RedirectDelays,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            cep_service_base: DEFAULT_CEP_SERVICE_BASE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            profile_key: DEFAULT_PROFILE_KEY.to_owned(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            badge_poll_ms: DEFAULT_BADGE_POLL_MS,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            dashboard_swap_ms: DEFAULT_DASHBOARD_SWAP_MS,
            redirects: RedirectDelays::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from a meta-tag lookup, falling back to defaults.
    ///
    /// Recognized names:
    /// - `marketplace:api-base`
    /// - `marketplace:cep-service`
    /// - `marketplace:token-key`
    /// - `marketplace:profile-key`
    /// - `marketplace:badge-poll-ms` (ignored unless a positive integer)
    pub fn from_meta<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        Self {
            api_base: non_blank(META_API_BASE)
                .map(|v| v.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base),
            cep_service_base: non_blank(META_CEP_SERVICE)
                .map(|v| v.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.cep_service_base),
            token_key: non_blank(META_TOKEN_KEY).unwrap_or(defaults.token_key),
            profile_key: non_blank(META_PROFILE_KEY).unwrap_or(defaults.profile_key),
            badge_poll_ms: non_blank(META_BADGE_POLL_MS)
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.badge_poll_ms),
            ..defaults
        }
    }

    /// Read overrides from the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let document = web_sys::window().and_then(|w| w.document());
            Self::from_meta(|name| {
                let doc = document.as_ref()?;
                let selector = format!("meta[name=\"{name}\"]");
                let el = doc.query_selector(&selector).ok().flatten()?;
                el.get_attribute("content")
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for a backend API path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
