//! Incremental input masks for Brazilian document and contact fields.
//!
//! Every mask strips non-digits, truncates to the field's digit capacity, and
//! inserts separators only once the digit that follows them has been typed,
//! so re-applying the mask on each keystroke is stable.

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;

pub const CEP_DIGITS: usize = 8;

const CPF_BREAKS: &[(usize, &str)] = &[(3, "."), (6, "."), (9, "-")];
const CNPJ_BREAKS: &[(usize, &str)] = &[(2, "."), (5, "."), (8, "/"), (12, "-")];
const CEP_BREAKS: &[(usize, &str)] = &[(5, "-")];

/// The supported masked field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskKind {
    /// `NNN.NNN.NNN-NN`
    Cpf,
    /// `NN.NNN.NNN/NNNN-NN`
    Cnpj,
    /// `(NN) NNNN-NNNN` or `(NN) NNNNN-NNNN`
    Phone,
    /// `NNNNN-NNN`
    Cep,
}

impl MaskKind {
    /// Maximum number of digits the field accepts.
    pub fn max_digits(self) -> usize {
        match self {
            Self::Cpf | Self::Phone => 11,
            Self::Cnpj => 14,
            Self::Cep => CEP_DIGITS,
        }
    }

    /// Placeholder shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Cpf => "000.000.000-00",
            Self::Cnpj => "00.000.000/0000-00",
            Self::Phone => "(00) 00000-0000",
            Self::Cep => "00000-000",
        }
    }

    /// Re-format raw input text.
    pub fn apply(self, raw: &str) -> String {
        let digits = truncated_digits(raw, self.max_digits());
        match self {
            Self::Cpf => group(&digits, CPF_BREAKS),
            Self::Cnpj => group(&digits, CNPJ_BREAKS),
            Self::Cep => group(&digits, CEP_BREAKS),
            Self::Phone => format_phone_digits(&digits),
        }
    }
}

/// Keep only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn truncated_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Insert `sep` before the digit at each break index.
fn group(digits: &str, breaks: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + breaks.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if let Some((_, sep)) = breaks.iter().find(|(at, _)| *at == i) {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}

fn format_phone_digits(digits: &str) -> String {
    if digits.len() < 3 {
        return digits.to_owned();
    }
    // Area code (2) + 4-digit prefix for landlines, 5-digit for mobiles.
    let dash_at = if digits.len() <= 10 { 6 } else { 7 };
    format!("({}", group(digits, &[(2, ") "), (dash_at, "-")]))
}

/// Result of feeding one keystroke into a [`CepWatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CepInput {
    /// Masked text to write back into the field.
    pub display: String,
    /// Eight-digit CEP to resolve, when this keystroke completed a new one.
    pub lookup: Option<String>,
}

/// Tracks the CEP field so a completed code is looked up exactly once.
///
/// A lookup is requested the first time the field reaches eight digits. Edits
/// that keep the same complete code (or a blur afterwards) do not repeat it;
/// dropping below eight digits re-arms the watcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CepWatcher {
    last_lookup: Option<String>,
}

impl CepWatcher {
    pub fn on_input(&mut self, raw: &str) -> CepInput {
        let display = MaskKind::Cep.apply(raw);
        let lookup = self.observe(&digits_only(&display));
        CepInput { display, lookup }
    }

    pub fn on_blur(&mut self, raw: &str) -> Option<String> {
        let digits = truncated_digits(raw, CEP_DIGITS);
        self.observe(&digits)
    }

    fn observe(&mut self, digits: &str) -> Option<String> {
        if digits.len() != CEP_DIGITS {
            self.last_lookup = None;
            return None;
        }
        if self.last_lookup.as_deref() == Some(digits) {
            return None;
        }
        self.last_lookup = Some(digits.to_owned());
        Some(digits.to_owned())
    }
}
