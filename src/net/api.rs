//! REST API client for the marketplace backend and the CEP service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. 401/403 become
//! [`ApiError::Unauthorized`] so callers can redirect to login; other
//! failures carry the server's `message` when the body has one. Nothing is
//! retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AddressLookup, CartItemsResponse, CheckAuthResponse, DashboardStats, LoginResponse, QuantityUpdateResponse,
    RecentOrder, StoreInfo, StoreRegistrationForm,
};
use crate::config::ClientConfig;
use crate::state::favorites::FavoriteAction;
use crate::state::session::SessionContext;
use crate::util::upload::LogoUpload;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const CHECK_AUTH_PATH: &str = "/api/auth/check-auth";
pub const CART_PATH: &str = "/api/carrinho";
pub const CART_ITEMS_PATH: &str = "/api/carrinho/itens";
pub const STORE_REGISTRATION_PATH: &str = "/api/lojas/cadastrar";
pub const DASHBOARD_STATS_PATH: &str = "/api/dashboard/estatisticas";
pub const RECENT_ORDERS_PATH: &str = "/api/dashboard/pedidos-recentes";
pub const STORE_INFO_PATH: &str = "/api/minha-loja/informacoes";

pub fn cart_item_path(item_id: i64) -> String {
    format!("{CART_ITEMS_PATH}/{item_id}")
}

/// `GET {base}/ws/{cep}/json/` on the address service.
pub fn cep_lookup_url(service_base: &str, cep: &str) -> String {
    format!("{}/ws/{cep}/json/", service_base.trim_end_matches('/'))
}

/// Handle for backend calls, provided as Leptos context.
///
/// Cheap to clone; clone it into `spawn_local` blocks.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionContext,
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use crate::net::error::{ApiError, failure_from_response};
    use crate::net::types::ErrorBody;

    pub(super) fn with_headers(mut builder: RequestBuilder, headers: Vec<(&'static str, String)>) -> RequestBuilder {
        for (name, value) in headers {
            builder = builder.header(name, &value);
        }
        builder
    }

    /// Turn a non-success response into an error.
    pub(super) async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.json::<ErrorBody>().await.ok();
        Err(failure_from_response(status, body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = check(resp).await?;
        Ok(resp.json::<T>().await?)
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionContext) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// `POST /api/auth/login` with `{email, senha}`.
    ///
    /// # Errors
    ///
    /// Rejected credentials come back as [`ApiError::Rejected`] or
    /// [`ApiError::Unauthorized`] depending on the backend's status.
    pub async fn login(&self, email: &str, senha: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::types::LoginRequest;
            let body = LoginRequest { email: email.to_owned(), senha: senha.to_owned() };
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_PATH)).json(&body)?.send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, senha, self.url(LOGIN_PATH));
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/logout`. The local session should already be cleared.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(&self.url(LOGOUT_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/auth/check-auth`.
    pub async fn check_auth(&self) -> Result<CheckAuthResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.url(CHECK_AUTH_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Number of items in the cart, for the header badge.
    pub async fn cart_count(&self) -> Result<u32, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::types::CartCountResponse;
            let builder = gloo_net::http::Request::get(&self.url(CART_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            let body: CartCountResponse = transport::decode(resp).await?;
            Ok(body.total_itens)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/carrinho/itens`.
    pub async fn cart_items(&self) -> Result<CartItemsResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.url(CART_ITEMS_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Add one unit of a product to the cart.
    pub async fn add_cart_item(&self, product_id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::types::AddCartItemRequest;
            let body = AddCartItemRequest { produto_id: product_id, quantidade: 1 };
            let builder = gloo_net::http::Request::post(&self.url(CART_ITEMS_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).json(&body)?.send().await?;
            transport::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = product_id;
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT /api/carrinho/itens/{id}` with the already-clamped quantity.
    pub async fn update_cart_item(&self, item_id: i64, quantity: u32) -> Result<QuantityUpdateResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::types::UpdateQuantityRequest;
            let body = UpdateQuantityRequest { quantidade: quantity };
            let builder = gloo_net::http::Request::put(&self.url(&cart_item_path(item_id)));
            let resp = transport::with_headers(builder, self.session.auth_headers()).json(&body)?.send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (cart_item_path(item_id), quantity);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /api/carrinho/itens/{id}`.
    pub async fn remove_cart_item(&self, item_id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::delete(&self.url(&cart_item_path(item_id)));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = cart_item_path(item_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Multipart `POST /api/lojas/cadastrar`. Only the bearer header is sent;
    /// the browser supplies the multipart content type.
    pub async fn register_store(&self, form: &StoreRegistrationForm, logo: Option<&LogoUpload>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let data = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
            for (name, value) in form.parts() {
                data.append_with_str(name, value).map_err(|e| ApiError::Network(format!("{e:?}")))?;
            }
            if let Some(logo) = logo {
                data.append_with_blob_and_filename("foto", &logo.file, &logo.name)
                    .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            }
            let headers = self.session.bearer_header().into_iter().collect();
            let builder = gloo_net::http::Request::post(&self.url(STORE_REGISTRATION_PATH));
            let resp = transport::with_headers(builder, headers).body(data)?.send().await?;
            transport::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (form.parts(), logo);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST .../adicionar/{id}` or `DELETE .../remover/{id}`.
    pub async fn toggle_favorite(&self, action: FavoriteAction, product_id: i64) -> Result<(), ApiError> {
        let url = self.url(&action.endpoint(product_id));
        #[cfg(feature = "csr")]
        {
            let builder = match action {
                FavoriteAction::Add => gloo_net::http::Request::post(&url),
                FavoriteAction::Remove => gloo_net::http::Request::delete(&url),
            };
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    /// Resolve a CEP (eight digits) on the address service.
    ///
    /// # Errors
    ///
    /// A CEP the service does not know still decodes successfully, with
    /// `erro` set; callers must check it.
    pub async fn lookup_address(&self, cep: &str) -> Result<AddressLookup, ApiError> {
        let url = cep_lookup_url(&self.config.cep_service_base, cep);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.url(DASHBOARD_STATS_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    pub async fn recent_orders(&self) -> Result<Vec<RecentOrder>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.url(RECENT_ORDERS_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    pub async fn store_info(&self) -> Result<StoreInfo, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.url(STORE_INFO_PATH));
            let resp = transport::with_headers(builder, self.session.auth_headers()).send().await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
