use super::*;

#[test]
fn cart_items_response_parses_backend_shape() {
    let raw = r#"{
        "itens": [
            {
                "id": 7,
                "produto": { "id": 3, "nome": "Caneca", "descricao": null, "fotoUrl": "/img/c.png", "quantidade": 12 },
                "quantidade": 2,
                "precoUnitario": 19.9
            }
        ],
        "total": 39.8
    }"#;
    let parsed: CartItemsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.itens.len(), 1);
    let line = &parsed.itens[0];
    assert_eq!(line.id, 7);
    assert_eq!(line.produto.nome, "Caneca");
    assert_eq!(line.produto.foto_url.as_deref(), Some("/img/c.png"));
    assert_eq!(line.produto.quantidade, Some(12));
    assert_eq!(line.preco_unitario, Decimal::new(199, 1));
    assert_eq!(parsed.total, Some(Decimal::new(398, 1)));
}

#[test]
fn cart_items_response_defaults_when_empty() {
    let parsed: CartItemsResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.itens.is_empty());
    assert_eq!(parsed.total, None);
}

#[test]
fn quantity_update_response_fields_are_optional() {
    let parsed: QuantityUpdateResponse = serde_json::from_str(r#"{"precoTotal": 59.7}"#).unwrap();
    assert_eq!(parsed.preco_total, Some(Decimal::new(597, 1)));
    assert_eq!(parsed.total_carrinho, None);
    assert_eq!(parsed.quantidade, None);
}

#[test]
fn add_cart_item_request_serializes_camel_case() {
    let body = serde_json::to_value(AddCartItemRequest { produto_id: 5, quantidade: 1 }).unwrap();
    assert_eq!(body, serde_json::json!({ "produtoId": 5, "quantidade": 1 }));
}

#[test]
fn login_request_uses_portuguese_password_field() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.c".to_owned(), senha: "x".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.c", "senha": "x" }));
}

#[test]
fn address_lookup_accepts_boolean_and_string_error_flags() {
    let a: AddressLookup = serde_json::from_str(r#"{"erro": true}"#).unwrap();
    assert!(a.erro);
    let b: AddressLookup = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
    assert!(b.erro);
    let c: AddressLookup = serde_json::from_str(
        r#"{"logradouro":"Avenida Paulista","bairro":"Bela Vista","localidade":"São Paulo","uf":"SP"}"#,
    )
    .unwrap();
    assert!(!c.erro);
    assert_eq!(c.localidade, "São Paulo");
}

#[test]
fn address_lookup_rejects_garbage_flag() {
    assert!(serde_json::from_str::<AddressLookup>(r#"{"erro": 3}"#).is_err());
}

#[test]
fn error_body_prefers_message_over_error() {
    let body = ErrorBody { message: Some("CNPJ já cadastrado".to_owned()), error: Some("x".to_owned()) };
    assert_eq!(body.into_message().as_deref(), Some("CNPJ já cadastrado"));
    let fallback = ErrorBody { message: None, error: Some("Credenciais inválidas".to_owned()) };
    assert_eq!(fallback.into_message().as_deref(), Some("Credenciais inválidas"));
    assert_eq!(ErrorBody::default().into_message(), None);
}

#[test]
fn store_registration_parts_use_nested_address_names() {
    let form = StoreRegistrationForm {
        nome: "Loja".to_owned(),
        cnpj: "11222333000181".to_owned(),
        rua: "Rua A".to_owned(),
        ..StoreRegistrationForm::default()
    };
    let parts = form.parts();
    assert_eq!(parts[0], ("nome", "Loja"));
    assert_eq!(parts[1], ("cnpj", "11222333000181"));
    assert_eq!(parts[3], ("endereco.rua", "Rua A"));
    assert_eq!(parts.len(), 8);
}

#[test]
fn dashboard_payloads_default_missing_numbers() {
    let stats: DashboardStats = serde_json::from_str(r#"{"pedidosHoje": 4}"#).unwrap();
    assert_eq!(stats.pedidos_hoje, 4);
    assert_eq!(stats.vendas_dia, Decimal::ZERO);

    let info: StoreInfo = serde_json::from_str(r#"{"nome":"Loja","ativa":true}"#).unwrap();
    assert!(info.ativa);
    assert_eq!(info.total_produtos, 0);

    let order: RecentOrder =
        serde_json::from_str(r#"{"id":9,"clienteNome":"Ana","data":"2024-01-02","valor":10.5,"status":"shipped"}"#)
            .unwrap();
    assert_eq!(order.cliente_nome, "Ana");
    assert_eq!(order.valor, Decimal::new(105, 1));
}
