//! CNPJ check-digit validation.

#[cfg(test)]
#[path = "cnpj_test.rs"]
mod cnpj_test;

use super::mask::digits_only;

const CNPJ_LEN: usize = 14;

/// Validate a CNPJ, formatted or bare.
///
/// Rejects anything that is not exactly 14 digits, any single repeated digit,
/// and any number whose two trailing check digits do not match the weighted
/// modulo-11 computation over the preceding digits.
pub fn is_valid_cnpj(raw: &str) -> bool {
    let digits: Vec<u32> = digits_only(raw).chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CNPJ_LEN {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..12]);
    if first != digits[12] {
        return false;
    }
    check_digit(&digits[..13]) == digits[13]
}

/// Weights run 2..=9 from the rightmost digit leftward, then wrap to 2.
fn check_digit(base: &[u32]) -> u32 {
    let sum: u32 = base
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let rem = sum % 11;
    if rem < 2 { 0 } else { 11 - rem }
}
