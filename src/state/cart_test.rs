use super::*;
use crate::net::types::ProductSummary;

fn line(id: i64, price_cents: i64, qty: u32, stock: Option<i64>) -> CartLine {
    CartLine {
        id,
        produto: ProductSummary {
            id: id * 10,
            nome: format!("Produto {id}"),
            descricao: None,
            foto_url: None,
            quantidade: stock,
        },
        quantidade: qty,
        preco_unitario: Decimal::new(price_cents, 2),
    }
}

fn loaded(lines: Vec<CartLine>) -> CartState {
    let mut state = CartState::default();
    state.begin_load();
    state.finish_load(Ok(CartItemsResponse { itens: lines, total: None }));
    state
}

fn snapshot(state: &CartState) -> &CartSnapshot {
    state.snapshot().expect("cart should be loaded")
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn clamp_raises_zero_to_minimum() {
    assert_eq!(clamp_quantity(0, 99), 1);
    assert_eq!(clamp_quantity(-4, 99), 1);
}

#[test]
fn clamp_caps_at_maximum() {
    assert_eq!(clamp_quantity(500, 99), 99);
    assert_eq!(clamp_quantity(7, 5), 5);
}

#[test]
fn clamp_with_zero_max_still_allows_one() {
    assert_eq!(clamp_quantity(3, 0), 1);
}

#[test]
fn parse_quantity_input_falls_back_to_minimum() {
    assert_eq!(parse_quantity_input(" 12 "), 12);
    assert_eq!(parse_quantity_input("0"), 0);
    assert_eq!(parse_quantity_input("abc"), 1);
    assert_eq!(parse_quantity_input(""), 1);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_with_items_becomes_loaded() {
    let state = loaded(vec![line(1, 1000, 2, Some(5)), line(2, 250, 1, None)]);
    let snap = snapshot(&state);
    assert_eq!(snap.items.len(), 2);
    assert_eq!(snap.items[0].line_price, Decimal::new(2000, 2));
    assert_eq!(snap.items[0].max_quantity, 5);
    assert_eq!(snap.items[1].max_quantity, DEFAULT_MAX_QUANTITY);
    assert_eq!(snap.total, Decimal::new(2250, 2));
    assert!(!state.shows_empty());
}

#[test]
fn load_prefers_server_total() {
    let mut state = CartState::default();
    state.finish_load(Ok(CartItemsResponse { itens: vec![line(1, 1000, 1, None)], total: Some(Decimal::new(900, 2)) }));
    assert_eq!(snapshot(&state).total, Decimal::new(900, 2));
}

#[test]
fn load_with_zero_items_is_empty() {
    let mut state = CartState::default();
    state.finish_load(Ok(CartItemsResponse::default()));
    assert_eq!(state.phase, CartPhase::Empty);
    assert!(state.shows_empty());
}

#[test]
fn load_auth_failure_is_empty() {
    let mut state = CartState::default();
    state.finish_load(Err(ApiError::Unauthorized(401)));
    assert_eq!(state.phase, CartPhase::Empty);
}

#[test]
fn load_other_failure_is_error_rendered_as_empty() {
    let mut state = CartState::default();
    state.finish_load(Err(ApiError::Status(500)));
    assert_eq!(state.phase, CartPhase::Error);
    assert!(state.shows_empty());
}

#[test]
fn loading_is_not_rendered_as_empty() {
    let mut state = CartState::default();
    state.begin_load();
    assert!(state.is_loading());
    assert!(!state.shows_empty());
}

#[test]
fn stock_of_zero_uses_default_max() {
    let state = loaded(vec![line(1, 100, 1, Some(0))]);
    assert_eq!(snapshot(&state).items[0].max_quantity, DEFAULT_MAX_QUANTITY);
}

// =============================================================
// Quantity changes
// =============================================================

#[test]
fn request_quantity_clamps_and_applies_optimistically() {
    let mut state = loaded(vec![line(1, 1000, 2, Some(5))]);
    let ticket = state.request_quantity(1, QuantityChange::Set(500)).unwrap();
    assert_eq!(ticket.quantity, 5);
    assert_eq!(snapshot(&state).items[0].quantity, 5);

    let ticket = state.request_quantity(1, QuantityChange::Set(0)).unwrap();
    assert_eq!(ticket.quantity, 1);
}

#[test]
fn stepper_stays_within_bounds() {
    let mut state = loaded(vec![line(1, 1000, 1, Some(2))]);
    assert_eq!(state.request_quantity(1, QuantityChange::Decrement).unwrap().quantity, 1);
    assert_eq!(state.request_quantity(1, QuantityChange::Increment).unwrap().quantity, 2);
    assert_eq!(state.request_quantity(1, QuantityChange::Increment).unwrap().quantity, 2);
}

#[test]
fn request_quantity_for_unknown_item_is_none() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    assert_eq!(state.request_quantity(9, QuantityChange::Increment), None);
    let mut empty = CartState::default();
    assert_eq!(empty.request_quantity(1, QuantityChange::Increment), None);
}

#[test]
fn apply_quantity_reconciles_line_and_total_from_response() {
    let mut state = loaded(vec![line(1, 1000, 1, None), line(2, 500, 1, None)]);
    let ticket = state.request_quantity(1, QuantityChange::Set(3)).unwrap();
    let resp = QuantityUpdateResponse {
        preco_total: Some(Decimal::new(3000, 2)),
        total_carrinho: Some(Decimal::new(3500, 2)),
        quantidade: Some(3),
    };
    assert!(state.apply_quantity(&ticket, &resp));
    let snap = snapshot(&state);
    assert_eq!(snap.items[0].line_price, Decimal::new(3000, 2));
    assert_eq!(snap.total, Decimal::new(3500, 2));
}

#[test]
fn apply_quantity_computes_missing_fields_locally() {
    let mut state = loaded(vec![line(1, 1000, 1, None), line(2, 500, 1, None)]);
    let ticket = state.request_quantity(1, QuantityChange::Set(2)).unwrap();
    assert!(state.apply_quantity(&ticket, &QuantityUpdateResponse::default()));
    let snap = snapshot(&state);
    assert_eq!(snap.items[0].line_price, Decimal::new(2000, 2));
    assert_eq!(snap.total, Decimal::new(2500, 2));
}

#[test]
fn server_quantity_overrides_optimistic_value() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    let ticket = state.request_quantity(1, QuantityChange::Set(8)).unwrap();
    let resp = QuantityUpdateResponse { quantidade: Some(4), ..QuantityUpdateResponse::default() };
    assert!(state.apply_quantity(&ticket, &resp));
    assert_eq!(snapshot(&state).items[0].quantity, 4);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    let first = state.request_quantity(1, QuantityChange::Set(2)).unwrap();
    let second = state.request_quantity(1, QuantityChange::Set(5)).unwrap();

    let second_resp = QuantityUpdateResponse {
        preco_total: Some(Decimal::new(5000, 2)),
        total_carrinho: Some(Decimal::new(5000, 2)),
        quantidade: Some(5),
    };
    assert!(state.apply_quantity(&second, &second_resp));

    // The first request's response arrives last and must not win.
    let first_resp = QuantityUpdateResponse {
        preco_total: Some(Decimal::new(2000, 2)),
        total_carrinho: Some(Decimal::new(2000, 2)),
        quantidade: Some(2),
    };
    assert!(!state.is_latest(&first));
    assert!(!state.apply_quantity(&first, &first_resp));
    let snap = snapshot(&state);
    assert_eq!(snap.items[0].quantity, 5);
    assert_eq!(snap.total, Decimal::new(5000, 2));
}

#[test]
fn sequences_are_tracked_per_item() {
    let mut state = loaded(vec![line(1, 1000, 1, None), line(2, 1000, 1, None)]);
    let a = state.request_quantity(1, QuantityChange::Increment).unwrap();
    let b = state.request_quantity(2, QuantityChange::Increment).unwrap();
    assert!(state.is_latest(&a));
    assert!(state.is_latest(&b));
}

#[test]
fn failed_update_keeps_clamped_value() {
    let mut state = loaded(vec![line(1, 1000, 1, Some(10))]);
    let ticket = state.request_quantity(1, QuantityChange::Set(50)).unwrap();
    // No reconcile call on failure: the optimistic value stays.
    assert_eq!(ticket.quantity, 10);
    assert_eq!(snapshot(&state).items[0].quantity, 10);
}

// =============================================================
// Removal
// =============================================================

#[test]
fn removal_recomputes_total_from_remaining_lines() {
    let mut state = loaded(vec![line(1, 1000, 2, None), line(2, 750, 1, None)]);
    assert!(state.begin_remove(1));
    assert_eq!(state.finish_remove(1, true), RemoveOutcome::Removed { now_empty: false });
    let snap = snapshot(&state);
    assert_eq!(snap.items.len(), 1);
    assert_eq!(snap.total, Decimal::new(750, 2));
    assert_ne!(snap.total, Decimal::ZERO);
}

#[test]
fn removal_forgets_pending_quantity_requests_for_the_row() {
    let mut state = loaded(vec![line(1, 1000, 1, None), line(2, 500, 1, None)]);
    let ticket = state.request_quantity(1, QuantityChange::Increment).unwrap();
    assert!(state.begin_remove(1));
    assert_eq!(state.finish_remove(1, true), RemoveOutcome::Removed { now_empty: false });

    assert!(!state.is_latest(&ticket));
    let resp = QuantityUpdateResponse { preco_total: None, total_carrinho: None, quantidade: Some(2) };
    assert!(!state.apply_quantity(&ticket, &resp));
    assert_eq!(snapshot(&state).total, Decimal::new(500, 2));
}

#[test]
fn removing_last_item_switches_to_empty() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    assert!(state.begin_remove(1));
    assert_eq!(state.finish_remove(1, true), RemoveOutcome::Removed { now_empty: true });
    assert_eq!(state.phase, CartPhase::Empty);
    assert!(state.shows_empty());
}

#[test]
fn failed_removal_keeps_row() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    assert!(state.begin_remove(1));
    assert_eq!(state.finish_remove(1, false), RemoveOutcome::Kept);
    assert_eq!(state.item_count(), 1);
    assert!(!state.is_removing(1));
}

#[test]
fn double_click_remove_is_ignored_while_pending() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    assert!(state.begin_remove(1));
    assert!(!state.begin_remove(1));
    assert!(state.is_removing(1));
    state.finish_remove(1, false);
    assert!(state.begin_remove(1));
}

#[test]
fn remove_unknown_item_is_rejected() {
    let mut state = loaded(vec![line(1, 1000, 1, None)]);
    assert!(!state.begin_remove(42));
    assert_eq!(state.finish_remove(42, true), RemoveOutcome::Kept);
}

#[test]
fn summary_mirrors_total() {
    let state = loaded(vec![line(1, 1999, 1, None)]);
    let summary = snapshot(&state).summary();
    assert_eq!(summary.subtotal, Decimal::new(1999, 2));
    assert_eq!(summary.total, Decimal::new(1999, 2));
}
