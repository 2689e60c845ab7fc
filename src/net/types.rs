//! Wire DTOs for the marketplace REST API and the CEP service.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Optional fields default
//! rather than fail so a partially populated response still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub authorities: Vec<String>,
}

/// `GET /api/auth/check-auth` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// `GET /api/carrinho` payload; only the item count is consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCountResponse {
    #[serde(default)]
    pub total_itens: u32,
}

/// Product as embedded in a cart line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub foto_url: Option<String>,
    /// Units in stock; bounds the cart quantity.
    #[serde(default)]
    pub quantidade: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: i64,
    pub produto: ProductSummary,
    pub quantidade: u32,
    pub preco_unitario: Decimal,
}

/// `GET /api/carrinho/itens` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CartItemsResponse {
    #[serde(default)]
    pub itens: Vec<CartLine>,
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// `POST /api/carrinho/itens` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub produto_id: i64,
    pub quantidade: u32,
}

/// `PUT /api/carrinho/itens/{id}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateQuantityRequest {
    pub quantidade: u32,
}

/// `PUT /api/carrinho/itens/{id}` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdateResponse {
    /// Line price after the update.
    #[serde(default)]
    pub preco_total: Option<Decimal>,
    /// Cart total after the update.
    #[serde(default)]
    pub total_carrinho: Option<Decimal>,
    /// Quantity the server actually accepted.
    #[serde(default)]
    pub quantidade: Option<u32>,
}

/// Error body returned by the backend on rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

/// CEP service response (`/ws/{cep}/json/`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AddressLookup {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    /// Set when the CEP does not exist.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub erro: bool,
}

/// Product card rendered in the home carousel and grids.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: i64,
    pub nome: String,
    pub preco: Decimal,
    #[serde(default)]
    pub foto_url: Option<String>,
    #[serde(default)]
    pub loja_nome: Option<String>,
    #[serde(default)]
    pub favorito: bool,
}

/// `GET /api/dashboard/estatisticas` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub pedidos_hoje: u64,
    #[serde(default)]
    pub vendas_dia: Decimal,
    #[serde(default)]
    pub visualizacoes: u64,
    #[serde(default)]
    pub novos_seguidores: u64,
}

/// Row of `GET /api/dashboard/pedidos-recentes`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: i64,
    #[serde(default)]
    pub cliente_nome: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub valor: Decimal,
    #[serde(default)]
    pub status: String,
}

/// `GET /api/minha-loja/informacoes` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub ativa: bool,
    #[serde(default)]
    pub total_produtos: u64,
    #[serde(default)]
    pub total_vendas: u64,
    #[serde(default)]
    pub avaliacao_media: Option<Decimal>,
}

/// Text fields of the multipart store-registration request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreRegistrationForm {
    pub nome: String,
    /// Digits only.
    pub cnpj: String,
    pub descricao: String,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

impl StoreRegistrationForm {
    /// Multipart field names and values, in submission order.
    pub fn parts(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("nome", self.nome.as_str()),
            ("cnpj", self.cnpj.as_str()),
            ("descricao", self.descricao.as_str()),
            ("endereco.rua", self.rua.as_str()),
            ("endereco.numero", self.numero.as_str()),
            ("endereco.bairro", self.bairro.as_str()),
            ("endereco.cidade", self.cidade.as_str()),
            ("endereco.estado", self.estado.as_str()),
        ]
    }
}

/// Accept `true`/`false` as either a JSON boolean or a string.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::String(s) => match s.as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("expected boolean flag, got {other:?}"))),
        },
        serde_json::Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("expected boolean flag, got {other}"))),
    }
}
