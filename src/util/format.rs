//! Display formatting for prices and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use rust_decimal::{Decimal, RoundingStrategy};

/// `R$ 12.34`, always two decimal places.
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {:.2}", amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Free-shipping label shown in the cart summary.
pub const FREE_SHIPPING_LABEL: &str = "R$ 0,00";

/// `dd/mm/yyyy` from an ISO-8601 date or date-time; anything else is echoed.
pub fn format_date_br(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
            format!("{d}/{m}/{y}")
        }
        _ => iso.to_owned(),
    }
}
