//! Cart page model: items, quantities, and totals synchronized with the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart page renders a [`CartState`] held in an `RwSignal`. Quantity edits
//! are clamped and shown immediately, then confirmed by the server; removals
//! wait for the server before the row disappears.
//!
//! DESIGN
//! ======
//! Quantity requests are not cancelled when superseded. Each one carries a
//! per-item sequence number and only the response to the most recently issued
//! request for that item is applied, so a slow early response can never
//! overwrite a later edit.
//!
//! A failed quantity update leaves the clamped value in place (no rollback),
//! unlike favorites which revert. Removal recomputes the total from the
//! remaining lines.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::net::error::ApiError;
use crate::net::types::{CartItemsResponse, CartLine, QuantityUpdateResponse};

pub const MIN_QUANTITY: u32 = 1;
/// Upper bound used when the product's stock is unknown.
pub const DEFAULT_MAX_QUANTITY: u32 = 99;

/// One cart row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub unit_price: Decimal,
    /// Price for the whole line as last confirmed (or computed locally).
    pub line_price: Decimal,
    pub quantity: u32,
    pub max_quantity: u32,
}

impl CartItem {
    pub fn from_line(line: CartLine) -> Self {
        let max_quantity = line
            .produto
            .quantidade
            .and_then(|stock| u32::try_from(stock).ok())
            .filter(|stock| *stock >= MIN_QUANTITY)
            .unwrap_or(DEFAULT_MAX_QUANTITY);
        let quantity = line.quantidade.max(MIN_QUANTITY);
        Self {
            id: line.id,
            product_id: line.produto.id,
            name: line.produto.nome,
            description: line.produto.descricao,
            image_url: line.produto.foto_url,
            unit_price: line.preco_unitario,
            line_price: line.preco_unitario * Decimal::from(quantity),
            quantity,
            max_quantity,
        }
    }
}

/// Subtotal and total shown in the cart summary; shipping is always free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub total: Decimal,
}

/// Ordered cart lines plus the total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

impl CartSnapshot {
    /// Build from a load response, trusting the server total when present.
    pub fn from_response(resp: CartItemsResponse) -> Self {
        let items: Vec<CartItem> = resp.itens.into_iter().map(CartItem::from_line).collect();
        let mut snapshot = Self { items, total: Decimal::ZERO };
        snapshot.total = resp.total.unwrap_or_else(|| snapshot.computed_total());
        snapshot
    }

    /// Sum of the line prices.
    pub fn computed_total(&self) -> Decimal {
        self.items.iter().map(|item| item.line_price).sum()
    }

    pub fn item(&self, item_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    fn item_mut(&mut self, item_id: i64) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary { subtotal: self.total, total: self.total }
    }
}

/// Cart lifecycle. `Error` renders the same as `Empty`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CartPhase {
    #[default]
    Empty,
    Loading,
    Loaded(CartSnapshot),
    Error,
}

/// A requested quantity change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    /// Value typed into the input.
    Set(i64),
    Increment,
    Decrement,
}

/// Parse the quantity input; anything unparsable counts as the minimum.
pub fn parse_quantity_input(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(i64::from(MIN_QUANTITY))
}

/// Clamp a requested quantity into `[MIN_QUANTITY, max]`.
pub fn clamp_quantity(value: i64, max: u32) -> u32 {
    let max = max.max(MIN_QUANTITY);
    let clamped = value.clamp(i64::from(MIN_QUANTITY), i64::from(max));
    u32::try_from(clamped).unwrap_or(MIN_QUANTITY)
}

/// Handle for one in-flight quantity update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantityTicket {
    pub item_id: i64,
    pub quantity: u32,
    pub seq: u64,
}

/// What a finished removal did to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { now_empty: bool },
    Kept,
}

/// Cart page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub phase: CartPhase,
    latest_seq: HashMap<i64, u64>,
    next_seq: u64,
    removing: HashSet<i64>,
}

impl CartState {
    pub fn begin_load(&mut self) {
        self.phase = CartPhase::Loading;
    }

    /// Replace the whole cart from a load result.
    ///
    /// Auth failures, other errors, and an empty item list all end in the
    /// empty-cart view.
    pub fn finish_load(&mut self, result: Result<CartItemsResponse, ApiError>) {
        self.latest_seq.clear();
        self.removing.clear();
        self.phase = match result {
            Ok(resp) if resp.itens.is_empty() => CartPhase::Empty,
            Ok(resp) => CartPhase::Loaded(CartSnapshot::from_response(resp)),
            Err(ApiError::Unauthorized(_)) => CartPhase::Empty,
            Err(_) => CartPhase::Error,
        };
    }

    pub fn snapshot(&self) -> Option<&CartSnapshot> {
        match &self.phase {
            CartPhase::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    fn snapshot_mut(&mut self) -> Option<&mut CartSnapshot> {
        match &mut self.phase {
            CartPhase::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CartPhase::Loading)
    }

    /// True when the empty-cart call to action should be rendered.
    pub fn shows_empty(&self) -> bool {
        match &self.phase {
            CartPhase::Empty | CartPhase::Error => true,
            CartPhase::Loading => false,
            CartPhase::Loaded(snapshot) => snapshot.items.is_empty(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.items.len())
    }

    /// Clamp and apply a quantity change locally, returning the request to send.
    ///
    /// Returns `None` for an unknown item.
    pub fn request_quantity(&mut self, item_id: i64, change: QuantityChange) -> Option<QuantityTicket> {
        let item = self.snapshot_mut()?.item_mut(item_id)?;
        let requested = match change {
            QuantityChange::Set(value) => value,
            QuantityChange::Increment => i64::from(item.quantity) + 1,
            QuantityChange::Decrement => i64::from(item.quantity) - 1,
        };
        let quantity = clamp_quantity(requested, item.max_quantity);
        item.quantity = quantity;

        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq.insert(item_id, seq);
        Some(QuantityTicket { item_id, quantity, seq })
    }

    /// Whether `ticket` is still the newest request for its item.
    pub fn is_latest(&self, ticket: &QuantityTicket) -> bool {
        self.latest_seq.get(&ticket.item_id) == Some(&ticket.seq)
    }

    /// Reconcile a successful update. Stale responses are discarded.
    pub fn apply_quantity(&mut self, ticket: &QuantityTicket, resp: &QuantityUpdateResponse) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        let Some(snapshot) = self.snapshot_mut() else {
            return false;
        };
        let Some(item) = snapshot.item_mut(ticket.item_id) else {
            return false;
        };
        if let Some(quantity) = resp.quantidade {
            item.quantity = quantity.max(MIN_QUANTITY);
        }
        item.line_price = resp
            .preco_total
            .unwrap_or_else(|| item.unit_price * Decimal::from(item.quantity));
        snapshot.total = resp.total_carrinho.unwrap_or_else(|| snapshot.computed_total());
        true
    }

    /// Mark a removal in flight. Returns `false` for unknown items or when a
    /// removal for the same item is already pending.
    pub fn begin_remove(&mut self, item_id: i64) -> bool {
        let known = self.snapshot().is_some_and(|s| s.item(item_id).is_some());
        known && self.removing.insert(item_id)
    }

    pub fn is_removing(&self, item_id: i64) -> bool {
        self.removing.contains(&item_id)
    }

    /// Settle a removal: on success drop the row and recompute the total.
    pub fn finish_remove(&mut self, item_id: i64, succeeded: bool) -> RemoveOutcome {
        self.removing.remove(&item_id);
        if !succeeded {
            return RemoveOutcome::Kept;
        }
        let Some(snapshot) = self.snapshot_mut() else {
            return RemoveOutcome::Kept;
        };
        let before = snapshot.items.len();
        snapshot.items.retain(|item| item.id != item_id);
        if snapshot.items.len() == before {
            return RemoveOutcome::Kept;
        }
        snapshot.total = snapshot.computed_total();
        let now_empty = snapshot.items.is_empty();
        self.latest_seq.remove(&item_id);

        if now_empty {
            self.phase = CartPhase::Empty;
        }
        RemoveOutcome::Removed { now_empty }
    }
}
