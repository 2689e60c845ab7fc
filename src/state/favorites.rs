//! Favorite flags with optimistic toggling.
//!
//! A click flips the flag at once. If the server refuses, or the request
//! never completes, the flip is undone so the heart matches the server.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::{HashMap, HashSet};

/// Direction of a toggle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    pub fn endpoint(self, product_id: i64) -> String {
        match self {
            Self::Add => format!("/api/favoritos/adicionar/{product_id}"),
            Self::Remove => format!("/api/favoritos/remover/{product_id}"),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Add => "Produto adicionado aos favoritos",
            Self::Remove => "Produto removido dos favoritos",
        }
    }
}

/// An in-flight toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub product_id: i64,
    pub action: FavoriteAction,
    /// Flag value before the optimistic flip.
    pub previous: bool,
}

/// Per-product favorite flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteState {
    flags: HashMap<i64, bool>,
    pending: HashSet<i64>,
}

impl FavoriteState {
    /// Seed flags from server-rendered data.
    pub fn from_flags(flags: impl IntoIterator<Item = (i64, bool)>) -> Self {
        Self { flags: flags.into_iter().collect(), pending: HashSet::new() }
    }

    /// Merge server-rendered flags, leaving products with a toggle in flight alone.
    pub fn seed(&mut self, flags: impl IntoIterator<Item = (i64, bool)>) {
        for (product_id, flag) in flags {
            if !self.pending.contains(&product_id) {
                self.flags.insert(product_id, flag);
            }
        }
    }

    pub fn is_favorite(&self, product_id: i64) -> bool {
        self.flags.get(&product_id).copied().unwrap_or(false)
    }

    pub fn is_pending(&self, product_id: i64) -> bool {
        self.pending.contains(&product_id)
    }

    /// Flip the flag optimistically. Returns `None` while a toggle for the
    /// same product is still in flight.
    pub fn begin_toggle(&mut self, product_id: i64) -> Option<FavoriteToggle> {
        if !self.pending.insert(product_id) {
            return None;
        }
        let previous = self.is_favorite(product_id);
        self.flags.insert(product_id, !previous);
        let action = if previous { FavoriteAction::Remove } else { FavoriteAction::Add };
        Some(FavoriteToggle { product_id, action, previous })
    }

    /// Finish a toggle; a refused one restores the previous flag.
    pub fn settle(&mut self, toggle: FavoriteToggle, accepted: bool) {
        self.pending.remove(&toggle.product_id);
        if !accepted {
            self.flags.insert(toggle.product_id, toggle.previous);
        }
    }
}
